//! Commit normalization
//!
//! Cleans up the non-standard markers this workflow layers on top of
//! Conventional Commits before a record reaches the formatter:
//! `[SNAPSHOT]` tags on the footer and notes, titled release commits
//! whose real conventional header sits on the first body line, and
//! `[skip ci]` commits that should not appear in the changelog at all.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument};

use crate::record::CommitRecord;
use shiplog_core::config::TypeMapping;

/// Marker appended to the footer of pre-release build commits
pub const SNAPSHOT_MARKER: &str = "[SNAPSHOT]";

/// Marker excluding a commit from the changelog entirely
pub const SKIP_CI_MARKER: &str = "[skip ci]";

/// Regex for re-parsing a header recovered from the body
static FALLBACK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[a-z]+)(?:\((?P<scope>[^)]+)\))?:\s*(?P<subject>.+)$")
        .expect("Invalid regex")
});

/// Normalizes commit records before rendering
///
/// Normalization is pure: it takes the record by value and returns a
/// new one, so no caller ever observes a record changing under it. It
/// is also idempotent, so re-running a record through `normalize`
/// leaves it untouched.
pub struct CommitNormalizer {
    types: Vec<TypeMapping>,
}

impl CommitNormalizer {
    /// Create a normalizer over the given type table
    pub fn new(types: Vec<TypeMapping>) -> Self {
        Self { types }
    }

    /// Check whether a commit must be dropped from the changelog
    ///
    /// Only the raw `message` text is consulted, never the split fields.
    /// Callers check this before normalizing; suppressed commits are never
    /// handed to [`CommitNormalizer::normalize`].
    pub fn is_suppressed(&self, record: &CommitRecord) -> bool {
        record
            .message
            .as_deref()
            .is_some_and(|m| m.contains(SKIP_CI_MARKER))
    }

    /// Normalize a commit record
    ///
    /// Three steps, in fixed order:
    /// 1. If the footer ends with `[SNAPSHOT]`, strip every occurrence of
    ///    the marker from the footer and from each note's text.
    /// 2. If the record is already conventional, stop here.
    /// 3. Otherwise promote the first body line to the header, clear the
    ///    body, and re-parse the new header. A failed re-parse is not an
    ///    error: the record passes through with its classification unset
    ///    for the renderer to handle.
    #[instrument(skip(self, record), fields(hash = %record.hash))]
    pub fn normalize(&self, record: CommitRecord) -> CommitRecord {
        let mut commit = record;

        let is_snapshot = commit
            .footer
            .as_deref()
            .is_some_and(|f| f.ends_with(SNAPSHOT_MARKER));
        if is_snapshot {
            if let Some(footer) = &mut commit.footer {
                *footer = footer.replace(SNAPSHOT_MARKER, "").trim().to_string();
            }
            for note in &mut commit.notes {
                note.text = note.text.replace(SNAPSHOT_MARKER, "").trim().to_string();
            }
            debug!("stripped snapshot markers");
        }

        if !self.is_conventional(&commit) {
            let fallback = commit.body.lines().next().unwrap_or("").trim().to_string();
            if fallback.is_empty() {
                // Nothing to recover from the body; leave the record alone
                // so normalizing it again stays a no-op.
                return commit;
            }

            if let Some(caps) = FALLBACK_REGEX.captures(&fallback) {
                commit.commit_type = caps.name("type").map(|m| m.as_str().to_string());
                commit.scope = caps.name("scope").map(|m| m.as_str().to_string());
                commit.subject = caps.name("subject").map(|m| m.as_str().to_string());
                debug!(
                    commit_type = ?commit.commit_type,
                    "recovered conventional header from body"
                );
            }

            commit.header = fallback;
            commit.body = String::new();
        }

        commit
    }

    /// Check whether a record already carries a conventional header
    ///
    /// True when the parsed type is set and the header opens with one of
    /// the configured types, either bare (`feat:`) or scoped (`feat(`).
    fn is_conventional(&self, record: &CommitRecord) -> bool {
        if record.commit_type.is_none() {
            return false;
        }

        self.types.iter().any(|t| {
            record.header.starts_with(&format!("{}:", t.name))
                || record.header.starts_with(&format!("{}(", t.name))
        })
    }
}
