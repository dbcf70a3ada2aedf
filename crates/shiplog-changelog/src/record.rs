//! Changelog record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit record as it flows through the changelog pipeline
///
/// Produced by a [`crate::parser::CommitParser`] from a raw git commit,
/// cleaned up by the normalizer, then consumed by a formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Original commit hash
    pub hash: String,
    /// First line of the commit message
    pub header: String,
    /// Message body between header and footer (may be empty)
    pub body: String,
    /// Trailing metadata block, when present
    pub footer: Option<String>,
    /// Annotation notes (breaking-change notes)
    pub notes: Vec<Note>,
    /// Commit type (feat, fix, etc.), when the header is conventional
    pub commit_type: Option<String>,
    /// Scope (optional, in parentheses)
    pub scope: Option<String>,
    /// Commit subject, when the header is conventional
    pub subject: Option<String>,
    /// Full raw message text, kept separately from the split fields.
    ///
    /// Suppression checks consult only this field, never the split ones.
    pub message: Option<String>,
    /// Author name
    pub author: String,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
}

/// An annotation note attached to a commit (e.g. a breaking change)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Note title (e.g. "BREAKING CHANGE")
    pub title: String,
    /// Note text
    pub text: String,
}

impl Note {
    /// Create a new note
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// A section in a changelog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section title
    pub title: String,
    /// Commits in this section
    pub commits: Vec<CommitRecord>,
}

impl Section {
    /// Create a new section
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            commits: Vec::new(),
        }
    }

    /// Add a commit to the section
    pub fn add_commit(&mut self, commit: CommitRecord) {
        self.commits.push(commit);
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// A changelog entry for a release
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogEntry {
    /// Release version string
    pub version: String,
    /// Release date
    pub date: DateTime<Utc>,
    /// Sections in this entry, in type-table order
    pub sections: Vec<Section>,
    /// Breaking-change notes (highlighted separately)
    pub breaking: Vec<Note>,
}

impl ChangelogEntry {
    /// Create a new changelog entry
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: Utc::now(),
            sections: Vec::new(),
            breaking: Vec::new(),
        }
    }

    /// Set the date
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Add a section, dropping it if it has no commits
    pub fn add_section(&mut self, section: Section) {
        if !section.is_empty() {
            self.sections.push(section);
        }
    }

    /// Add a breaking-change note
    pub fn add_breaking(&mut self, note: Note) {
        self.breaking.push(note);
    }

    /// Check if entry has any content
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.breaking.is_empty()
    }
}
