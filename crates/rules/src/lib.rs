pub mod ruleset;

pub use ruleset::{CategoryRule, RuleError, RuleSet};

use gastos_core::Category;
use std::sync::OnceLock;

/// The embedded default taxonomy, parsed once.
pub fn default_rules() -> &'static RuleSet {
    static RULES: OnceLock<RuleSet> = OnceLock::new();
    RULES.get_or_init(|| {
        RuleSet::from_toml(include_str!("default_rules.toml"))
            .expect("embedded rule taxonomy is valid")
    })
}

/// Classify against the default taxonomy.
pub fn classify(description: &str) -> Category {
    default_rules().classify(description)
}
