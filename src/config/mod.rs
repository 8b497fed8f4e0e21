//! Loading and saving the classification rule set.
//!
//! The rule set lives in a `rules.toml` file next to the site content.
//! A missing file yields the built-in defaults, and invalid TOML falls
//! back to them so a broken deploy still renders with the stock
//! conventions.
//!
//! # Examples
//!
//! ```no_run
//! use reel_layout::config;
//!
//! // Load the rule set from the platform config directory.
//! let mut rules = config::load().unwrap_or_default();
//!
//! // Tighten a convention and persist it.
//! rules.vertical_markers.push("_short".to_string());
//! config::save(&rules).expect("Failed to save rules");
//! ```

pub mod defaults;

use crate::classifier::RuleSet;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

const RULES_FILE: &str = "rules.toml";
const APP_NAME: &str = "ReelLayout";

fn get_default_rules_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(RULES_FILE);
        path
    })
}

/// Loads the rule set from the platform config directory, falling back to
/// the defaults when no file exists.
pub fn load() -> Result<RuleSet> {
    if let Some(path) = get_default_rules_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(RuleSet::default())
}

/// Saves the rule set to the platform config directory.
pub fn save(rules: &RuleSet) -> Result<()> {
    if let Some(path) = get_default_rules_path() {
        return save_to_path(rules, &path);
    }
    Ok(())
}

/// Loads a rule set from an explicit path. Invalid TOML falls back to the
/// defaults rather than failing the render.
pub fn load_from_path(path: &Path) -> Result<RuleSet> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

/// Saves a rule set to an explicit path, creating parent directories.
pub fn save_to_path(rules: &RuleSet, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(rules)?;
    fs::write(path, content)?;
    Ok(())
}
