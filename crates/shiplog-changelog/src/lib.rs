//! Shiplog Changelog - commit parsing, normalization and rendering
//!
//! This crate turns raw git commits into a formatted changelog entry:
//! the parser splits each message into conventional-commit fields, the
//! normalizer cleans up workflow markers and recovers titled commits,
//! and the generator groups the survivors into sections and renders
//! them through a formatter.

pub mod formatter;
pub mod generator;
pub mod normalizer;
pub mod parser;
pub mod record;

pub use formatter::{ChangelogFormatter, MarkdownFormatter};
pub use generator::ChangelogGenerator;
pub use normalizer::CommitNormalizer;
pub use parser::{CommitParser, ConventionalParser};
pub use record::{ChangelogEntry, CommitRecord, Note, Section};
