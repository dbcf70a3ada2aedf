//! Changelog file operations

use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;

/// Write changelog content to the configured file.
///
/// The default mirrors the generator's single-release output: the file is
/// replaced with the new entry. With `prepend` the new entry is stacked on
/// top of the existing content instead.
pub fn write_changelog(config: &Config, content: &str) -> Result<()> {
    let path = &config.changelog.file;
    let prepend = config.changelog.prepend;
    info!(path = %path.display(), prepend, "writing changelog");

    if prepend && path.exists() {
        let existing = std::fs::read_to_string(path)?;
        let combined = format!("{}\n{}", content, existing);
        std::fs::write(path, combined)?;
    } else {
        std::fs::write(path, content)?;
    }

    Ok(())
}

/// Read existing changelog content
pub fn read_changelog(path: &Path) -> Result<Option<String>> {
    if path.exists() {
        debug!(path = %path.display(), "reading existing changelog");
        Ok(Some(std::fs::read_to_string(path)?))
    } else {
        debug!(path = %path.display(), "no existing changelog found");
        Ok(None)
    }
}
