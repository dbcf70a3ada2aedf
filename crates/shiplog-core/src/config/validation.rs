//! Configuration validation

use regex::Regex;
use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_git(config)?;
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_git(config: &Config) -> Result<()> {
    if let Some(pattern) = &config.git.tag_pattern {
        if let Err(e) = Regex::new(pattern) {
            return Err(ConfigError::InvalidValue {
                field: "git.tag_pattern".to_string(),
                message: format!("invalid regex: {}", e),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "file path cannot be empty".to_string(),
        }
        .into());
    }

    if config.changelog.types.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.types".to_string(),
            message: "at least one commit type mapping is required".to_string(),
        }
        .into());
    }

    for (i, mapping) in config.changelog.types.iter().enumerate() {
        if mapping.name.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("changelog.types[{}].type", i),
                message: "type name cannot be empty".to_string(),
            }
            .into());
        }
        if mapping.section.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("changelog.types[{}].section", i),
                message: "section heading cannot be empty".to_string(),
            }
            .into());
        }
    }

    let mut seen = std::collections::HashSet::new();
    for mapping in &config.changelog.types {
        if !seen.insert(mapping.name.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "changelog.types".to_string(),
                message: format!("duplicate type name: {}", mapping.name),
            }
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::TypeMapping;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_types_rejected() {
        let mut config = Config::default();
        config.changelog.types.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let mut config = Config::default();
        config
            .changelog
            .types
            .push(TypeMapping::new("feat", "More Features"));
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_bad_tag_pattern_rejected() {
        let mut config = Config::default();
        config.git.tag_pattern = Some("(".to_string());
        assert!(validate_config(&config).is_err());
    }
}
