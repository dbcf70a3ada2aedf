//! Conventional Commits parser
//!
//! Parses commits following the Conventional Commits specification:
//! https://www.conventionalcommits.org/

use regex::Regex;
use std::sync::LazyLock;

use super::CommitParser;
use crate::record::{CommitRecord, Note};
use shiplog_git::CommitInfo;

/// Regex for parsing conventional commit headers
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[a-zA-Z]+)(?:\((?P<scope>[^)]+)\))?(?P<breaking>!)?: (?P<subject>.+)$")
        .expect("Invalid regex")
});

/// Regex for footer token lines
static FOOTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<token>[A-Za-z-]+|BREAKING CHANGE): (?P<value>.+)$").expect("Invalid regex")
});

/// Regex for issue reference lines ("closes #4", "fixes #12" ...)
static REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:close[sd]?|fix(?:e[sd])?|resolve[sd]?)\s+#\d+").expect("Invalid regex")
});

/// Regex for breaking-change note lines
static BREAKING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^BREAKING[ -]CHANGE: (?P<text>.+)$").expect("Invalid regex"));

const BREAKING_TITLE: &str = "BREAKING CHANGE";

/// Parser for Conventional Commits format
///
/// Parsing never fails: a commit whose header is not conventional still
/// produces a record, with `commit_type`/`scope`/`subject` left unset.
pub struct ConventionalParser;

impl ConventionalParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Split a raw message into header, body and footer
    ///
    /// The footer is the run of trailing paragraphs whose opening line is a
    /// `Token: value` trailer or an issue reference. Everything between the
    /// header and the footer is the body.
    fn split_message(&self, message: &str) -> (String, String, Option<String>) {
        let mut lines = message.lines();
        let header = lines.next().unwrap_or("").trim_end().to_string();

        let mut paragraphs: Vec<Vec<&str>> = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in lines {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    paragraphs.push(std::mem::take(&mut current));
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current);
        }

        let mut split_at = paragraphs.len();
        while split_at > 0 && is_footer_paragraph(&paragraphs[split_at - 1]) {
            split_at -= 1;
        }

        let body = join_paragraphs(&paragraphs[..split_at]);
        let footer = if split_at < paragraphs.len() {
            Some(join_paragraphs(&paragraphs[split_at..]))
        } else {
            None
        };

        (header, body, footer)
    }

    /// Extract breaking-change notes from the footer
    fn extract_notes(&self, footer: &str) -> Vec<Note> {
        let mut notes = Vec::new();
        let mut in_note = false;

        for line in footer.lines() {
            if let Some(caps) = BREAKING_REGEX.captures(line) {
                in_note = true;
                notes.push(Note::new(BREAKING_TITLE, &caps["text"]));
            } else if FOOTER_REGEX.is_match(line) || REFERENCE_REGEX.is_match(line) {
                in_note = false;
            } else if in_note && !line.trim().is_empty() {
                // Continuation of the previous note; blank separator lines
                // between footer paragraphs are not part of the text
                if let Some(last) = notes.last_mut() {
                    last.text.push('\n');
                    last.text.push_str(line.trim());
                }
            }
        }

        notes
    }
}

impl Default for ConventionalParser {
    fn default() -> Self {
        Self::new()
    }
}

fn is_footer_paragraph(lines: &[&str]) -> bool {
    lines
        .first()
        .is_some_and(|l| FOOTER_REGEX.is_match(l) || REFERENCE_REGEX.is_match(l))
}

fn join_paragraphs(paragraphs: &[Vec<&str>]) -> String {
    paragraphs
        .iter()
        .map(|p| p.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

impl CommitParser for ConventionalParser {
    fn parse(&self, commit: &CommitInfo) -> CommitRecord {
        let (header, body, footer) = self.split_message(&commit.message);
        let mut notes = footer
            .as_deref()
            .map(|f| self.extract_notes(f))
            .unwrap_or_default();

        let mut commit_type = None;
        let mut scope = None;
        let mut subject = None;

        if let Some(caps) = HEADER_REGEX.captures(&header) {
            commit_type = caps.name("type").map(|m| m.as_str().to_lowercase());
            scope = caps.name("scope").map(|m| m.as_str().to_string());
            subject = caps.name("subject").map(|m| m.as_str().to_string());

            // A "!" marker without an explicit note still flags a break
            if caps.name("breaking").is_some() && notes.is_empty() {
                if let Some(subject) = &subject {
                    notes.push(Note::new(BREAKING_TITLE, subject.clone()));
                }
            }
        }

        CommitRecord {
            hash: commit.hash.clone(),
            header,
            body,
            footer,
            notes,
            commit_type,
            scope,
            subject,
            message: Some(commit.message.clone()),
            author: commit.author.clone(),
            timestamp: commit.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_commit(message: &str) -> CommitInfo {
        CommitInfo::new(
            "abc1234567890",
            message,
            "Test Author",
            "test@example.com",
            Utc::now(),
        )
    }

    #[test]
    fn test_parse_simple_feat() {
        let parser = ConventionalParser::new();
        let record = parser.parse(&make_commit("feat: add new feature"));

        assert_eq!(record.header, "feat: add new feature");
        assert_eq!(record.commit_type.as_deref(), Some("feat"));
        assert_eq!(record.subject.as_deref(), Some("add new feature"));
        assert!(record.scope.is_none());
    }

    #[test]
    fn test_parse_with_scope() {
        let parser = ConventionalParser::new();
        let record = parser.parse(&make_commit("fix(parser): handle edge case"));

        assert_eq!(record.commit_type.as_deref(), Some("fix"));
        assert_eq!(record.scope.as_deref(), Some("parser"));
        assert_eq!(record.subject.as_deref(), Some("handle edge case"));
    }

    #[test]
    fn test_parse_non_conventional_still_yields_record() {
        let parser = ConventionalParser::new();
        let record = parser.parse(&make_commit("Just a regular commit message"));

        assert_eq!(record.header, "Just a regular commit message");
        assert!(record.commit_type.is_none());
        assert!(record.subject.is_none());
    }

    #[test]
    fn test_split_body_and_footer() {
        let parser = ConventionalParser::new();
        let record = parser.parse(&make_commit(
            "Release build\n\nfeat(api): add login\nmore text\n\ncloses #4 [SNAPSHOT]\n",
        ));

        assert_eq!(record.header, "Release build");
        assert_eq!(record.body, "feat(api): add login\nmore text");
        assert_eq!(record.footer.as_deref(), Some("closes #4 [SNAPSHOT]"));
    }

    #[test]
    fn test_footer_token_lines() {
        let parser = ConventionalParser::new();
        let record = parser.parse(&make_commit("feat: add feature\n\nBody text\n\nRefs: #123"));

        assert_eq!(record.body, "Body text");
        assert_eq!(record.footer.as_deref(), Some("Refs: #123"));
    }

    #[test]
    fn test_breaking_marker_creates_note() {
        let parser = ConventionalParser::new();
        let record = parser.parse(&make_commit("feat!: drop old endpoint"));

        assert_eq!(record.notes.len(), 1);
        assert_eq!(record.notes[0].title, "BREAKING CHANGE");
        assert_eq!(record.notes[0].text, "drop old endpoint");
    }

    #[test]
    fn test_breaking_change_footer_note() {
        let parser = ConventionalParser::new();
        let record = parser.parse(&make_commit(
            "feat: add feature\n\nBREAKING CHANGE: config format changed",
        ));

        assert_eq!(record.footer.as_deref(), Some("BREAKING CHANGE: config format changed"));
        assert_eq!(record.notes.len(), 1);
        assert_eq!(record.notes[0].text, "config format changed");
    }

    #[test]
    fn test_multiline_breaking_note() {
        let parser = ConventionalParser::new();
        let record = parser.parse(&make_commit(
            "feat: rework\n\nBREAKING CHANGE: first line\nsecond line",
        ));

        assert_eq!(record.notes.len(), 1);
        assert_eq!(record.notes[0].text, "first line\nsecond line");
    }

    #[test]
    fn test_breaking_note_followed_by_reference_footer() {
        let parser = ConventionalParser::new();
        let record = parser.parse(&make_commit(
            "feat: x\n\nBREAKING CHANGE: config renamed\n\ncloses #4",
        ));

        assert_eq!(record.notes.len(), 1);
        assert_eq!(record.notes[0].text, "config renamed");
        assert_eq!(
            record.footer.as_deref(),
            Some("BREAKING CHANGE: config renamed\n\ncloses #4")
        );
    }

    #[test]
    fn test_raw_message_preserved() {
        let parser = ConventionalParser::new();
        let raw = "chore: tidy [skip ci]\n\nhousekeeping";
        let record = parser.parse(&make_commit(raw));

        assert_eq!(record.message.as_deref(), Some(raw));
    }
}
