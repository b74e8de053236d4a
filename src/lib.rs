pub mod error;
pub mod logging;
pub mod patcher;
pub mod tools;
pub mod types;
pub mod utils;

#[cfg(test)]
mod tests;

pub use error::PatchError;
pub use patcher::{DEFAULT_TARGET, Patcher, Preview, legend_rules};
pub use types::{PatchReport, RuleOutcome, Substitution};
