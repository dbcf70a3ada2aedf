//! Markdown changelog formatter

use shiplog_core::config::ChangelogConfig;
use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::record::ChangelogEntry;

/// Markdown changelog formatter
pub struct MarkdownFormatter {
    /// Repository URL for commit links
    pub repo_url: Option<String>,
}

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self { repo_url: None }
    }

    /// Set repository URL for links
    pub fn with_repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = Some(url.into());
        self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, entry, config), fields(version = %entry.version, section_count = entry.sections.len()))]
    fn format(&self, entry: &ChangelogEntry, config: &ChangelogConfig) -> String {
        let mut output = String::new();

        // Version header
        let date_str = entry.date.format("%Y-%m-%d").to_string();
        output.push_str(&format!("## {} ({})\n\n", entry.version, date_str));

        // Sections, already in table order
        for section in &entry.sections {
            if section.is_empty() {
                continue;
            }

            output.push_str(&format!("### {}\n\n", section.title));

            for commit in &section.commits {
                output.push_str("* ");

                if let Some(scope) = &commit.scope {
                    output.push_str(&format!("**{}:** ", scope));
                }

                let subject = commit.subject.as_deref().unwrap_or(&commit.header);
                output.push_str(subject);

                if config.include_hashes {
                    let short_hash = &commit.hash[..7.min(commit.hash.len())];
                    if let Some(repo_url) = &self.repo_url {
                        output.push_str(&format!(
                            " ([{}]({}/commit/{}))",
                            short_hash, repo_url, commit.hash
                        ));
                    } else {
                        output.push_str(&format!(" ({})", short_hash));
                    }
                }

                if config.include_authors {
                    output.push_str(&format!(" - {}", commit.author));
                }

                output.push('\n');
            }

            output.push('\n');
        }

        // Breaking changes close out the entry
        if !entry.breaking.is_empty() {
            output.push_str("### ⚠ BREAKING CHANGES\n\n");
            for note in &entry.breaking {
                output.push_str(&format!("* {}\n", note.text));
            }
            output.push('\n');
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{CommitRecord, Note, Section};
    use chrono::{TimeZone, Utc};

    fn make_record(commit_type: &str, scope: Option<&str>, subject: &str) -> CommitRecord {
        CommitRecord {
            hash: "abc1234567890".to_string(),
            header: format!("{}: {}", commit_type, subject),
            body: String::new(),
            footer: None,
            notes: vec![],
            commit_type: Some(commit_type.to_string()),
            scope: scope.map(|s| s.to_string()),
            subject: Some(subject.to_string()),
            message: None,
            author: "Test".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_format_basic() {
        let formatter = MarkdownFormatter::new();
        let config = ChangelogConfig::default();

        let mut entry = ChangelogEntry::new("1.0.0");
        let mut section = Section::new("⭐ Features:");
        section.add_commit(make_record("feat", None, "add new feature"));
        entry.add_section(section);

        let output = formatter.format(&entry, &config);

        assert!(output.contains("## 1.0.0"));
        assert!(output.contains("### ⭐ Features:"));
        assert!(output.contains("* add new feature"));
    }

    #[test]
    fn test_format_with_scope() {
        let formatter = MarkdownFormatter::new();
        let config = ChangelogConfig::default();

        let mut entry = ChangelogEntry::new("1.0.0");
        let mut section = Section::new("🐛 Fixes:");
        section.add_commit(make_record("fix", Some("parser"), "handle edge case"));
        entry.add_section(section);

        let output = formatter.format(&entry, &config);

        assert!(output.contains("* **parser:** handle edge case"));
    }

    #[test]
    fn test_format_breaking_changes() {
        let formatter = MarkdownFormatter::new();
        let config = ChangelogConfig::default();

        let mut entry = ChangelogEntry::new("2.0.0");
        entry.add_breaking(Note::new("BREAKING CHANGE", "remove deprecated API"));

        let output = formatter.format(&entry, &config);

        assert!(output.contains("### ⚠ BREAKING CHANGES"));
        assert!(output.contains("* remove deprecated API"));
    }

    #[test]
    fn test_format_with_repo_url() {
        let formatter = MarkdownFormatter::new().with_repo_url("https://github.com/test/repo");
        let config = ChangelogConfig::default();

        let mut entry = ChangelogEntry::new("1.0.0");
        let mut section = Section::new("⭐ Features:");
        section.add_commit(make_record("feat", None, "feature"));
        entry.add_section(section);

        let output = formatter.format(&entry, &config);

        assert!(output.contains("([abc1234](https://github.com/test/repo/commit/abc1234567890))"));
    }

    #[test]
    fn test_format_plain_hash_without_repo_url() {
        let formatter = MarkdownFormatter::new();
        let config = ChangelogConfig::default();

        let mut entry = ChangelogEntry::new("1.0.0");
        let mut section = Section::new("⭐ Features:");
        section.add_commit(make_record("feat", None, "feature"));
        entry.add_section(section);

        let output = formatter.format(&entry, &config);

        assert!(output.contains("* feature (abc1234)"));
    }

    #[test]
    fn test_format_without_hashes() {
        let formatter = MarkdownFormatter::new();
        let config = ChangelogConfig {
            include_hashes: false,
            ..ChangelogConfig::default()
        };

        let mut entry = ChangelogEntry::new("1.0.0");
        let mut section = Section::new("⭐ Features:");
        section.add_commit(make_record("feat", None, "feature"));
        entry.add_section(section);

        let output = formatter.format(&entry, &config);

        assert!(output.contains("* feature\n"));
        assert!(!output.contains("abc1234"));
    }

    #[test]
    fn test_format_with_authors() {
        let formatter = MarkdownFormatter::new();
        let config = ChangelogConfig {
            include_authors: true,
            ..ChangelogConfig::default()
        };

        let mut entry = ChangelogEntry::new("1.0.0");
        let mut section = Section::new("⭐ Features:");
        section.add_commit(make_record("feat", None, "feature"));
        entry.add_section(section);

        let output = formatter.format(&entry, &config);

        assert!(output.contains("* feature (abc1234) - Test\n"));
    }

    #[test]
    fn test_format_heading_uses_entry_date() {
        let formatter = MarkdownFormatter::new();
        let config = ChangelogConfig::default();

        let date = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        let entry = ChangelogEntry::new("2.1.0").with_date(date);

        let output = formatter.format(&entry, &config);

        assert!(output.starts_with("## 2.1.0 (2026-03-14)\n\n"));
    }
}
