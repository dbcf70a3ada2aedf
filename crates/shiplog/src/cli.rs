//! CLI definition and command handling

use clap::Parser;
use console::style;
use tracing::info;

use shiplog_changelog::ChangelogGenerator;
use shiplog_core::config::load_config_or_default;
use shiplog_core::workflow::write_changelog;
use shiplog_git::GitRepo;

/// Shiplog - conventional-commit changelog generator
#[derive(Debug, Parser)]
#[command(name = "shiplog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Release version tag the changelog entry is generated for
    #[arg(value_name = "TAG")]
    pub tag: String,
}

impl Cli {
    /// Execute the CLI
    pub fn execute(self) -> anyhow::Result<()> {
        info!(tag = %self.tag, "generating changelog");
        let cwd = std::env::current_dir()?;
        let (config, config_path) = load_config_or_default(&cwd);
        if let Some(path) = &config_path {
            info!(path = %path.display(), "loaded configuration");
        }

        let repo = GitRepo::discover(&cwd)?;

        // Range: everything since the latest release tag, or the full
        // history when nothing has been tagged yet
        let latest_tag = repo.find_latest_tag(config.git.tag_pattern.as_deref())?;
        let commits = match &latest_tag {
            Some(tag) => repo.commits_since_tag(&tag.name)?,
            None => repo.all_commits()?,
        };

        if commits.is_empty() {
            println!("{}", style("No commits found since last release.").yellow());
            return Ok(());
        }

        let generator = ChangelogGenerator::new(config.changelog.clone());
        let changelog = generator.generate_formatted(&self.tag, &commits);

        write_changelog(&config, &changelog)?;

        println!(
            "{} Changelog written to {}",
            style("✓").green().bold(),
            style(config.changelog.file.display()).cyan()
        );

        Ok(())
    }
}
