use std::sync::OnceLock;

use super::core::RuleSet;
use super::loader::load_rule_set;

/// Cache the process-wide rule set
static RULES: OnceLock<RuleSet> = OnceLock::new();

/// Get the process-wide rule set, loading it on first use.
///
/// The first call searches the working directory's ancestors for a rule-set file.
/// A file that fails to load is reported through `log` and the defaults are used
/// instead; callers that need the error should call
/// [`super::load_rule_set`] themselves and pass the result explicitly.
pub fn global_rules() -> &'static RuleSet {
    RULES.get_or_init(|| {
        load_rule_set().unwrap_or_else(|e| {
            log::warn!("{}. Using default rule set.", e);
            RuleSet::default()
        })
    })
}

/// Install `rules` as the process-wide rule set.
///
/// Only possible before the first call to [`global_rules`]; afterwards the rule set
/// is frozen and the rejected value is handed back.
pub fn init_global_rules(rules: RuleSet) -> Result<(), RuleSet> {
    RULES.set(rules)
}
