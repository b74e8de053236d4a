const MAX_ROWS: usize = 10;
const MAX_COLUMN: usize = 50;

/// Shortens `s` to at most `max` chars, ending in "..." when cut.
/// Counts chars, not bytes, so multi-byte text never splits.
pub fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Before/after table of the lines that differ, paired by line number.
/// Empty when the two texts have the same lines.
pub fn render_diff_side_by_side(old_str: &str, new_str: &str) -> String {
    let old_lines: Vec<&str> = old_str.lines().collect();
    let new_lines: Vec<&str> = new_str.lines().collect();
    let total = old_lines.len().max(new_lines.len());

    let changed: Vec<(usize, &str, &str)> = (0..total)
        .filter_map(|i| {
            let old_line = old_lines.get(i).copied().unwrap_or("");
            let new_line = new_lines.get(i).copied().unwrap_or("");
            (old_line != new_line).then_some((i + 1, old_line.trim_end(), new_line.trim_end()))
        })
        .collect();

    if changed.is_empty() {
        return String::new();
    }

    // "Before" has to fit in the left column
    let left_width = changed
        .iter()
        .map(|(_, old_line, _)| old_line.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(6, MAX_COLUMN);

    let mut out = String::new();
    out.push_str("\u{001b}[36m╭─ Changes\u{001b}[0m\n");
    out.push_str(&format!(
        "\u{001b}[90m│ line │ {:width$} │ After\u{001b}[0m\n",
        "Before",
        width = left_width
    ));
    out.push_str(&format!(
        "\u{001b}[36m├──────┼─{:─<width$}─┼─\u{001b}[0m\n",
        "",
        width = left_width
    ));

    for (line_no, old_line, new_line) in changed.iter().take(MAX_ROWS) {
        out.push_str(&format!(
            "\u{001b}[90m│ {:>4} │\u{001b}[0m \u{001b}[31m{:width$}\u{001b}[0m \u{001b}[90m│\u{001b}[0m \u{001b}[32m{}\u{001b}[0m\n",
            line_no,
            clip(old_line, left_width),
            clip(new_line, MAX_COLUMN),
            width = left_width
        ));
    }

    if changed.len() > MAX_ROWS {
        out.push_str(&format!(
            "\u{001b}[90m│ ... ({} more changed lines)\u{001b}[0m\n",
            changed.len() - MAX_ROWS
        ));
    }

    out.push_str("\u{001b}[36m╰─\u{001b}[0m\n");
    out
}

pub fn display_diff_side_by_side(old_str: &str, new_str: &str) {
    print!("{}", render_diff_side_by_side(old_str, new_str));
}
