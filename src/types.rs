use serde::Serialize;
use std::path::PathBuf;

/// A literal find/replace pair, optionally gated on a marker character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Substitution {
    pub name: String,
    pub target: String,
    pub replacement: String,
    // rule only runs when this char is present at the time it is reached
    pub guard: Option<char>,
}

impl Substitution {
    pub fn new(name: &str, target: &str, replacement: &str) -> Substitution {
        Substitution {
            name: name.to_string(),
            target: target.to_string(),
            replacement: replacement.to_string(),
            guard: None,
        }
    }

    pub fn guarded_by(mut self, guard: char) -> Substitution {
        self.guard = Some(guard);
        self
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RuleOutcome {
    pub name: String,
    pub applied: bool, // false when the guard was absent
    pub replacements: usize,
}

impl RuleOutcome {
    pub fn applied(name: &str, replacements: usize) -> RuleOutcome {
        RuleOutcome {
            name: name.to_string(),
            applied: true,
            replacements,
        }
    }

    pub fn skipped(name: &str) -> RuleOutcome {
        RuleOutcome {
            name: name.to_string(),
            applied: false,
            replacements: 0,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct PatchReport {
    pub path: PathBuf,
    pub outcomes: Vec<RuleOutcome>,
    pub changed: bool,
    pub written: bool,
}

impl PatchReport {
    pub fn total_replacements(&self) -> usize {
        self.outcomes.iter().map(|o| o.replacements).sum()
    }
}
