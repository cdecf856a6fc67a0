use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::RuleSet;
use crate::errors::{Error, Result};

/// File names searched in every ancestor directory, in priority order.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".sigtidy.json", ".sigtidy.toml"];

const MAX_TRAVERSAL_DEPTH: usize = 64;

/// Document syntax of a rule-set file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// `.toml` files are TOML, everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse a rule-set document
pub fn parse_rule_set(contents: &str, format: ConfigFormat) -> Result<RuleSet> {
    match format {
        ConfigFormat::Json => RuleSet::from_json_str(contents),
        ConfigFormat::Toml => RuleSet::from_toml_str(contents),
    }
}

/// Loads one rule-set file. Unlike the directory search, a missing file is an error.
pub fn load_rule_set_file(path: impl AsRef<Path>) -> Result<RuleSet> {
    let path = path.as_ref();
    let contents = read_config_file(path)?;
    parse_rule_set(&contents, ConfigFormat::from_path(path)).map_err(|e| match e {
        Error::ConfigParse { message, .. } => Error::config_with_path(
            format!("{} ({})", message, path.display()),
            path,
        ),
        other => other,
    })
}

/// Tries one candidate path: `Ok(None)` when the file does not exist.
pub(crate) fn try_load_from_path(config_path: &Path) -> Result<Option<RuleSet>> {
    match load_rule_set_file(config_path) {
        Ok(rules) => {
            log::debug!("Loaded rule set from {}", config_path.display());
            Ok(Some(rules))
        }
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(Error::Io(e)) => {
            log::warn!("Failed to read config file {}: {}", config_path.display(), e);
            Err(Error::Io(e))
        }
        Err(e) => Err(e),
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Searches `start` and its ancestors for a rule-set file.
///
/// The nearest directory wins; within a directory JSON is preferred over TOML.
/// Falls back to [`RuleSet::default`] when no file exists. A file that exists but
/// cannot be parsed is reported, not skipped.
pub fn load_rule_set_from(start: impl Into<PathBuf>) -> Result<RuleSet> {
    for dir in directory_ancestors(start.into(), MAX_TRAVERSAL_DEPTH) {
        for name in CONFIG_FILE_NAMES {
            if let Some(rules) = try_load_from_path(&dir.join(name))? {
                return Ok(rules);
            }
        }
    }

    log::debug!(
        "No rule set found after checking {} directories. Using defaults.",
        MAX_TRAVERSAL_DEPTH
    );
    Ok(RuleSet::default())
}

/// [`load_rule_set_from`] starting at the current working directory.
pub fn load_rule_set() -> Result<RuleSet> {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using default rule set.", e);
            return Ok(RuleSet::default());
        }
    };
    load_rule_set_from(current)
}
