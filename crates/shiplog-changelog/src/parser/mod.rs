//! Commit parsing

mod conventional;

pub use conventional::ConventionalParser;

use crate::record::CommitRecord;
use shiplog_git::CommitInfo;

/// Trait for commit parsers
///
/// Parsing is total: every commit yields a record, and classification
/// fields are simply left unset when the message is not conventional.
/// Filtering happens later, in the normalizer and the generator.
pub trait CommitParser: Send + Sync {
    /// Parse a commit into a structured record
    fn parse(&self, commit: &CommitInfo) -> CommitRecord;
}
