//! Rule-set configuration.
//!
//! A [`RuleSet`] lists every substring, node name and replacement the pipeline
//! consults. It is usually built once, either from [`RuleSet::default`] or from a
//! `.sigtidy.json` / `.sigtidy.toml` file found in an ancestor of the working
//! directory, and then passed by reference to every pipeline call.

mod accessors;
mod core;
mod loader;

pub use accessors::{global_rules, init_global_rules};
pub use core::RuleSet;
pub use loader::{
    directory_ancestors, load_rule_set, load_rule_set_file, load_rule_set_from, parse_rule_set,
    ConfigFormat, CONFIG_FILE_NAMES,
};
