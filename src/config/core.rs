use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{Error, Result};

/// Every list and map consulted by the normalization pipeline.
///
/// Built once (defaults, or loaded from a file) and then only read. Independent
/// instances can coexist; nothing in the crate mutates a `RuleSet` it was handed.
///
/// When deserialized, all seven keys are required. The legacy key spellings with a
/// trailing underscore are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Substrings deleted first, e.g. inline ABI namespaces (`::__1`).
    #[serde(alias = "suppress_extra_namespaces_")]
    pub suppress_extra_namespaces: Vec<String>,

    /// Keyword prefixes deleted second (`class `, `struct `).
    #[serde(alias = "suppress_extract_struct_class_", alias = "suppress_struct_class_")]
    pub suppress_struct_class: Vec<String>,

    /// Ad-hoc substrings deleted last.
    #[serde(alias = "suppress_custom_")]
    pub suppress_custom: Vec<String>,

    /// Template arguments pruned from the tree, matched against a node's trimmed
    /// `left` text.
    #[serde(alias = "undesirable_type_nodes_")]
    pub undesirable_type_nodes: Vec<String>,

    /// Verbatim substitutions applied after pruning, in key order.
    #[serde(alias = "replacements_after_undesirable_node_extractions_")]
    pub replacements_after_undesirable_node_extractions: BTreeMap<String, String>,

    /// Rewrite `const T` as `T const` in the final output.
    #[serde(alias = "force_east_const_")]
    pub force_east_const: bool,

    /// Signatures nested deeper than this render on several indented lines.
    /// 0 disables indentation.
    #[serde(alias = "indent_depth_limit_")]
    pub indent_depth_limit: usize,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            suppress_extra_namespaces: strings(&["::__1", "::__cxx11"]),
            suppress_struct_class: strings(&["class ", "struct "]),
            suppress_custom: strings(&[" __ptr64"]),
            undesirable_type_nodes: strings(&["std::char_traits", "std::allocator", "std::less"]),
            replacements_after_undesirable_node_extractions: BTreeMap::from([
                (
                    "basic_string<_CharT, _Traits, _Allocator>".to_string(),
                    "std::string".to_string(),
                ),
                ("std::basic_string<char>".to_string(), "std::string".to_string()),
            ]),
            force_east_const: false,
            indent_depth_limit: 3,
        }
    }
}

impl RuleSet {
    /// No suppressions, no pruning, no replacements, no east-const, no indentation.
    pub fn empty() -> Self {
        Self {
            suppress_extra_namespaces: Vec::new(),
            suppress_struct_class: Vec::new(),
            suppress_custom: Vec::new(),
            undesirable_type_nodes: Vec::new(),
            replacements_after_undesirable_node_extractions: BTreeMap::new(),
            force_east_const: false,
            indent_depth_limit: 0,
        }
    }

    pub fn with_force_east_const(mut self, enabled: bool) -> Self {
        self.force_east_const = enabled;
        self
    }

    pub fn with_indent_depth_limit(mut self, limit: usize) -> Self {
        self.indent_depth_limit = limit;
        self
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        serde_json::from_str(contents)
            .map_err(|e| Error::config(format!("Failed to parse rule set JSON: {}", e)))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| Error::config(format!("Failed to parse rule set TOML: {}", e)))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize rule set: {}", e)))
    }

    /// A complete document suitable as a starting point for a `.sigtidy.json` file.
    pub fn example_json() -> &'static str {
        EXAMPLE_JSON
    }

    pub(crate) fn is_undesirable(&self, name: &str) -> bool {
        self.undesirable_type_nodes.iter().any(|n| n == name)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const EXAMPLE_JSON: &str = r#"{
    "force_east_const": true,
    "indent_depth_limit": 3,
    "replacements_after_undesirable_node_extractions": {
        "basic_string<_CharT, _Traits, _Allocator>": "std::string",
        "std::basic_string<char>": "std::string"
    },
    "suppress_custom": [
        " __ptr64"
    ],
    "suppress_extra_namespaces": [
        "::__1",
        "::__cxx11"
    ],
    "suppress_struct_class": [
        "class ",
        "struct "
    ],
    "undesirable_type_nodes": [
        "std::char_traits",
        "std::allocator",
        "std::less"
    ]
}
"#;
