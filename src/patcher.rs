use crate::error::PatchError;
use crate::tools::{apply_all, read_text, write_text};
use crate::types::{PatchReport, RuleOutcome, Substitution};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Relative to the working directory the tool is launched from.
pub const DEFAULT_TARGET: &str = "components/legend.jsx";

/// The broken ternary as the generator emitted it: the lost minus sign left
/// a `?`, two U+0002 control chars, `'` and another `?`.
pub const BROKEN_MINUS: &str = "{open ? \"?\u{2}\u{2}'?\" : \"+\"}";
/// Same breakage once the control chars have been stripped by an editor.
pub const BROKEN_MINUS_FLAT: &str = r#"{open ? "?'?" : "+"}"#;
/// Same ternary with a JS minus-sign escape. The backslash is literal text.
pub const FIXED_MINUS: &str = r#"{open ? "\u2212" : "+"}"#;

pub const STRAY_QUOTES: &str = "?\u{2}\"?\"";
pub const STRAY_QUOTES_FLAT: &str = "?\"?\"";
pub const STRAY_QUOTES_FIX: &str = "???";

/// The rules the legend needs, in the order they must run. Each fix matches
/// both the raw control-char form and the stripped form.
///
/// The stray-quote rules fire whenever any `?` is left after the minus
/// rules, not only when those matched, so they also rewrite unrelated runs.
pub fn legend_rules() -> Vec<Substitution> {
    vec![
        Substitution::new("minus-escape", BROKEN_MINUS, FIXED_MINUS),
        Substitution::new("minus-escape-flat", BROKEN_MINUS_FLAT, FIXED_MINUS),
        Substitution::new("stray-quotes", STRAY_QUOTES, STRAY_QUOTES_FIX).guarded_by('?'),
        Substitution::new("stray-quotes-flat", STRAY_QUOTES_FLAT, STRAY_QUOTES_FIX)
            .guarded_by('?'),
    ]
}

/// Result of a dry run: the report plus both versions of the text.
#[derive(Debug)]
pub struct Preview {
    pub report: PatchReport,
    pub before: String,
    pub after: String,
}

pub struct Patcher {
    path: PathBuf,
    rules: Vec<Substitution>,
}

impl Patcher {
    pub fn new(path: impl Into<PathBuf>) -> Patcher {
        Patcher {
            path: path.into(),
            rules: legend_rules(),
        }
    }

    pub fn with_rules(mut self, rules: Vec<Substitution>) -> Patcher {
        self.rules = rules;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read, transform, overwrite. The file is rewritten even when nothing
    /// matched.
    pub fn run(&self) -> Result<PatchReport, PatchError> {
        let (original, patched, outcomes) = self.transform()?;
        let changed = patched != original;

        write_text(&self.path, &patched)?;
        info!(
            path = %self.path.display(),
            bytes = patched.len(),
            changed,
            "wrote file"
        );

        Ok(PatchReport {
            path: self.path.clone(),
            outcomes,
            changed,
            written: true,
        })
    }

    /// Same pipeline as `run`, without touching the file.
    pub fn preview(&self) -> Result<Preview, PatchError> {
        let (before, after, outcomes) = self.transform()?;
        let changed = after != before;

        Ok(Preview {
            report: PatchReport {
                path: self.path.clone(),
                outcomes,
                changed,
                written: false,
            },
            before,
            after,
        })
    }

    fn transform(&self) -> Result<(String, String, Vec<RuleOutcome>), PatchError> {
        let original = read_text(&self.path)?;
        debug!(path = %self.path.display(), bytes = original.len(), "read file");

        let (patched, outcomes) = apply_all(&original, &self.rules);
        Ok((original, patched, outcomes))
    }
}
