use std::path::PathBuf;

mod config;
mod convert;
mod interactive;
mod terminal;

use anyhow::Context;
use clap::ArgAction;
use convert::{ToArabic, ToRoman};
use numerals::Config;
use terminal::Palette;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = match &self.config {
            Some(path) => Config::load(path)
                .map_err(|e| anyhow::anyhow!("{e}"))
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => Config::default(),
        };
        tracing::debug!(?config, "configuration loaded");

        self.command
            .unwrap_or(Command::Interactive)
            .run(&config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries the session, so diagnostics go to stderr
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Convert values interactively (default)
    Interactive,

    /// Convert integers to Roman numerals
    ToRoman(ToRoman),

    /// Convert Roman numerals to integers
    ToArabic(ToArabic),

    /// Show or create configuration
    Config(config::Command),
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        let palette = Palette::new(config.color);
        match self {
            Self::Interactive => interactive::run(config, palette)?,
            Self::ToRoman(command) => command.run(palette)?,
            Self::ToArabic(command) => command.run(palette)?,
            Self::Config(command) => command.run(config, palette)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["roman"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from(["roman", "to-roman", "14", "-vv", "--config", "r.toml"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("r.toml")));
        assert!(matches!(cli.command, Some(Command::ToRoman(_))));
    }

    #[test]
    fn negative_numbers_are_arguments() {
        let cli = Cli::try_parse_from(["roman", "to-roman", "-5"]).unwrap();
        assert!(matches!(cli.command, Some(Command::ToRoman(_))));
    }

    #[test]
    fn conversions_need_at_least_one_value() {
        assert!(Cli::try_parse_from(["roman", "to-arabic"]).is_err());
    }
}
