//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for shiplog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Git configuration
    pub git: GitConfig,

    /// Changelog configuration
    pub changelog: ChangelogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git: GitConfig::default(),
            changelog: ChangelogConfig::default(),
        }
    }
}

/// Git configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Regex restricting which tags count as release tags
    pub tag_pattern: Option<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self { tag_pattern: None }
    }
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path
    pub file: PathBuf,

    /// Prepend to an existing changelog instead of overwriting it
    pub prepend: bool,

    /// Recognized commit types, in section output order.
    ///
    /// This table is the single source of truth: it decides which headers
    /// count as conventional and which section each type renders under.
    pub types: Vec<TypeMapping>,

    /// Whether to include commit hashes
    pub include_hashes: bool,

    /// Whether to include authors
    pub include_authors: bool,

    /// Repository URL, used to link commit hashes
    pub repository: Option<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("CHANGELOG.md"),
            prepend: false,
            types: TypeMapping::defaults(),
            include_hashes: true,
            include_authors: false,
            repository: None,
        }
    }
}

/// A commit type and the changelog section it renders under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMapping {
    /// Commit type name (e.g. "feat")
    #[serde(rename = "type")]
    pub name: String,
    /// Section heading in the changelog
    pub section: String,
}

impl TypeMapping {
    /// Create a new mapping
    pub fn new(name: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            section: section.into(),
        }
    }

    /// The default type table
    pub fn defaults() -> Vec<TypeMapping> {
        vec![
            TypeMapping::new("feat", "⭐ Features:"),
            TypeMapping::new("fix", "🐛 Fixes:"),
            TypeMapping::new("perf", "⚡ Optimizations:"),
            TypeMapping::new("docs", "📖 Documentation:"),
            TypeMapping::new("style", "💅 Styling:"),
            TypeMapping::new("refactor", "♻️ Refactoring:"),
            TypeMapping::new("test", "🧪 Tests:"),
            TypeMapping::new("chore", "🧹 Chores:"),
        ]
    }
}
