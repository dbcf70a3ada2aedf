//! Changelog generation

use shiplog_core::config::ChangelogConfig;
use shiplog_git::CommitInfo;
use tracing::{debug, info, instrument};

use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::normalizer::CommitNormalizer;
use crate::parser::{CommitParser, ConventionalParser};
use crate::record::{ChangelogEntry, CommitRecord, Section};

/// Changelog generator
///
/// Drives the pipeline: parse each commit, drop suppressed ones,
/// normalize the rest, group them by type and hand the result to a
/// formatter.
pub struct ChangelogGenerator {
    parser: Box<dyn CommitParser>,
    formatter: Box<dyn ChangelogFormatter>,
    normalizer: CommitNormalizer,
    config: ChangelogConfig,
}

impl ChangelogGenerator {
    /// Create a new generator with default parser and formatter
    pub fn new(config: ChangelogConfig) -> Self {
        let mut formatter = MarkdownFormatter::new();
        if let Some(url) = &config.repository {
            formatter = formatter.with_repo_url(url);
        }

        Self {
            parser: Box::new(ConventionalParser::new()),
            formatter: Box::new(formatter),
            normalizer: CommitNormalizer::new(config.types.clone()),
            config,
        }
    }

    /// Use a custom parser
    pub fn with_parser<P: CommitParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Generate a changelog entry from commits
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn generate(&self, version: &str, commits: &[CommitInfo]) -> ChangelogEntry {
        info!(version, commit_count = commits.len(), "generating changelog entry");
        let mut entry = ChangelogEntry::new(version);

        // Parse, drop suppressed commits, then normalize. Suppression runs
        // on the raw record, before any cleanup touches it.
        let normalized: Vec<CommitRecord> = commits
            .iter()
            .map(|c| self.parser.parse(c))
            .filter(|r| !self.normalizer.is_suppressed(r))
            .map(|r| self.normalizer.normalize(r))
            .collect();

        // Breaking notes are collected from every surviving record, even
        // ones whose type has no section of its own.
        for record in &normalized {
            for note in &record.notes {
                entry.add_breaking(note.clone());
            }
        }

        // One section per configured type, in table order. Records with an
        // unknown or missing type are dropped here.
        for mapping in &self.config.types {
            let mut section = Section::new(&mapping.section);
            for record in &normalized {
                if record.commit_type.as_deref() == Some(mapping.name.as_str()) {
                    section.add_commit(record.clone());
                }
            }
            entry.add_section(section);
        }

        debug!(
            section_count = entry.sections.len(),
            breaking_count = entry.breaking.len(),
            "changelog sections built"
        );

        entry
    }

    /// Format a changelog entry to string
    pub fn format(&self, entry: &ChangelogEntry) -> String {
        self.formatter.format(entry, &self.config)
    }

    /// Generate and format in one step
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn generate_formatted(&self, version: &str, commits: &[CommitInfo]) -> String {
        let entry = self.generate(version, commits);
        let output = self.format(&entry);
        debug!(output_len = output.len(), "changelog formatted");
        output
    }
}
