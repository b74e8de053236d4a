use crate::utils::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_short_string_untouched() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn test_clip_counts_chars_not_bytes() {
        assert_eq!(clip("校园地图校园地图", 5), "校园...");
        assert_eq!(clip("−−−−−−−−", 6), "−−−...");
    }

    #[test]
    fn test_render_identical_is_empty() {
        let text = "one\ntwo\nthree";
        assert!(render_diff_side_by_side(text, text).is_empty());
    }

    #[test]
    fn test_render_shows_only_changed_lines() {
        let old = "first\n  {open ? \"?'?\" : \"+\"}\nlast\n";
        let new = "first\n  {open ? \"\\u2212\" : \"+\"}\nlast\n";

        let out = render_diff_side_by_side(old, new);
        assert!(out.contains("Changes"));
        assert!(out.contains("│    2 │"));
        assert!(out.contains("{open ? \"?'?\" : \"+\"}"));
        assert!(out.contains("{open ? \"\\u2212\" : \"+\"}"));
        assert!(!out.contains("first"));
        assert!(!out.contains("last"));
    }

    #[test]
    fn test_render_caps_rows() {
        let old: Vec<String> = (0..15).map(|i| format!("old {}", i)).collect();
        let new: Vec<String> = (0..15).map(|i| format!("new {}", i)).collect();

        let out = render_diff_side_by_side(&old.join("\n"), &new.join("\n"));
        assert!(out.contains("old 9"));
        assert!(!out.contains("old 10"));
        assert!(out.contains("(5 more changed lines)"));
    }

    #[test]
    fn test_render_clips_long_multibyte_lines() {
        let old = "ü".repeat(80);
        let new = "→".repeat(80);

        let out = render_diff_side_by_side(&old, &new);
        assert!(out.contains(&format!("{}...", "ü".repeat(47))));
        assert!(out.contains(&format!("{}...", "→".repeat(47))));
    }

    #[test]
    fn test_render_keeps_indentation_changes_visible() {
        let old = "<ul>\n  <li/>\n</ul>";
        let new = "<ul>\n    <li/>\n</ul>";

        let out = render_diff_side_by_side(old, new);
        assert!(out.contains("│    2 │"));
        assert!(out.contains("\u{001b}[31m  <li/>"));
        assert!(out.contains("\u{001b}[32m    <li/>\u{001b}[0m"));
    }
}
