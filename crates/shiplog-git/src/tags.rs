//! Tag operations

use chrono::{TimeZone, Utc};
use regex::Regex;
use semver::Version;
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::TagInfo;
use shiplog_core::error::GitError;

impl GitRepo {
    /// Get all tags
    #[instrument(skip(self))]
    pub fn tags(&self) -> Result<Vec<TagInfo>> {
        let mut tags = Vec::new();

        self.repo.tag_foreach(|oid, name| {
            let name = String::from_utf8_lossy(name)
                .trim_start_matches("refs/tags/")
                .to_string();

            // Try to get the commit this tag points to
            if let Ok(commit) = self.repo.find_commit(oid) {
                tags.push(TagInfo::new(&name, commit.id().to_string()));
            } else if let Ok(tag) = self.repo.find_tag(oid) {
                // Annotated tag
                let target_id = tag.target_id();
                let mut tag_info = TagInfo::new(&name, target_id.to_string());

                if let Some(msg) = tag.message() {
                    tag_info = tag_info.with_message(msg);
                }

                if let Some(tagger) = tag.tagger() {
                    if let Some(name) = tagger.name() {
                        tag_info = tag_info.with_tagger(name);
                    }
                    let timestamp = Utc
                        .timestamp_opt(tagger.when().seconds(), 0)
                        .single()
                        .unwrap_or_else(Utc::now);
                    tag_info = tag_info.with_timestamp(timestamp);
                }

                tags.push(tag_info);
            }

            true
        })?;

        debug!(count = tags.len(), "listed all tags");
        Ok(tags)
    }

    /// Get tags matching a pattern
    pub fn tags_matching(&self, pattern: &str) -> Result<Vec<TagInfo>> {
        let regex = Regex::new(pattern).map_err(|e| GitError::NoTags(e.to_string()))?;

        let all_tags = self.tags()?;
        let matching: Vec<_> = all_tags
            .into_iter()
            .filter(|t| regex.is_match(&t.name))
            .collect();

        Ok(matching)
    }

    /// Find the latest tag by semantic version
    #[instrument(skip(self), fields(pattern))]
    pub fn find_latest_tag(&self, pattern: Option<&str>) -> Result<Option<TagInfo>> {
        let tags = match pattern {
            Some(p) => self.tags_matching(p)?,
            None => self.tags()?,
        };

        // Filter to tags with valid versions and sort by version
        let mut versioned_tags: Vec<_> = tags
            .into_iter()
            .filter_map(|t| {
                t.version
                    .as_ref()
                    .and_then(|v| Version::parse(v).ok())
                    .map(|v| (t, v))
            })
            .collect();

        versioned_tags.sort_by(|a, b| b.1.cmp(&a.1));

        let result = versioned_tags.into_iter().next().map(|(t, _)| t);
        debug!(latest = ?result.as_ref().map(|t| &t.name), "found latest tag");
        Ok(result)
    }
}
