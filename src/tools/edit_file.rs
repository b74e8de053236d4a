use crate::types::{RuleOutcome, Substitution};
use tracing::debug;

/// Applies one rule to `content`, replacing every non-overlapping occurrence
/// of its target.
///
/// # Arguments
///
/// * `content` - The text to transform.
/// * `rule` - The substitution. If it has a guard and the guard character is
///   not in `content`, nothing is replaced and the outcome is marked skipped.
///
pub fn apply_substitution(content: &str, rule: &Substitution) -> (String, RuleOutcome) {
    if let Some(guard) = rule.guard {
        if !content.contains(guard) {
            debug!(rule = %rule.name, %guard, "guard absent, skipping");
            return (content.to_string(), RuleOutcome::skipped(&rule.name));
        }
    }

    // an empty pattern would match between every char
    if rule.target.is_empty() {
        return (content.to_string(), RuleOutcome::applied(&rule.name, 0));
    }

    let replacements = content.matches(rule.target.as_str()).count();
    let patched = if replacements == 0 {
        content.to_string()
    } else {
        content.replace(rule.target.as_str(), &rule.replacement)
    };

    debug!(rule = %rule.name, replacements, "applied");
    (patched, RuleOutcome::applied(&rule.name, replacements))
}

/// Runs the rules in order, each one seeing the output of the previous.
pub fn apply_all(content: &str, rules: &[Substitution]) -> (String, Vec<RuleOutcome>) {
    let mut current = content.to_string();
    let mut outcomes = Vec::with_capacity(rules.len());

    for rule in rules {
        let (next, outcome) = apply_substitution(&current, rule);
        current = next;
        outcomes.push(outcome);
    }

    (current, outcomes)
}
