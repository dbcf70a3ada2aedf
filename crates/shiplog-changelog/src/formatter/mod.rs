//! Changelog formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use shiplog_core::config::ChangelogConfig;

use crate::record::ChangelogEntry;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Format a changelog entry to string
    fn format(&self, entry: &ChangelogEntry, config: &ChangelogConfig) -> String;
}
