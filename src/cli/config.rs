use std::{io::Write, path::PathBuf};

use numerals::{Config, domain::ColorChoice};
use tracing::instrument;

use super::terminal::Palette;

/// Show the effective configuration, or write a default configuration file
///
/// Configuration is read from the file given with `--config`. Without it,
/// defaults are used.
///
/// Available configuration keys:
///   prompt        Text printed before each line of input (default: "> ")
///   `exit_command`  Keyword that ends a session (default: exit)
///   banner        Greet the user when a session starts (default: true)
///   color         auto, always or never (default: auto)
#[derive(Debug, clap::Parser)]
pub struct Command {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Show all configuration values
    Show,

    /// Get a specific configuration value
    Get {
        /// Configuration key to retrieve
        ///
        /// Available keys: prompt, `exit_command`, banner, color
        key: String,
    },

    /// Write a configuration file containing the defaults
    Init {
        /// Where to write the file
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Command {
    #[instrument(level = "debug", skip(config, palette))]
    pub fn run(self, config: &Config, palette: Palette) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout().lock();
        match self.command {
            ConfigCommand::Show => show_config(config, palette, &mut stdout),
            ConfigCommand::Get { key } => get_config(config, &key, &mut stdout),
            ConfigCommand::Init { path, force } => {
                if path.exists() && !force {
                    anyhow::bail!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    );
                }
                Config::default()
                    .save(&path)
                    .map_err(|e| anyhow::anyhow!("{e}"))?;
                tracing::info!(path = %path.display(), "wrote default configuration");
                writeln!(
                    stdout,
                    "{}",
                    palette.success(&format!("Created {}", path.display()))
                )?;
                Ok(())
            }
        }
    }
}

const fn color_name(choice: ColorChoice) -> &'static str {
    match choice {
        ColorChoice::Auto => "auto",
        ColorChoice::Always => "always",
        ColorChoice::Never => "never",
    }
}

fn show_config(config: &Config, palette: Palette, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Configuration:")?;
    writeln!(out, "  prompt: {:?}", config.prompt())?;
    writeln!(out, "  exit_command: {}", config.exit_command())?;
    writeln!(out, "  banner: {}", config.banner)?;
    writeln!(
        out,
        "  color: {} {}",
        color_name(config.color),
        palette.dim("(auto follows the terminal)")
    )?;
    Ok(())
}

fn get_config(config: &Config, key: &str, out: &mut impl Write) -> anyhow::Result<()> {
    match key {
        "prompt" => writeln!(out, "{}", config.prompt())?,
        "exit_command" => writeln!(out, "{}", config.exit_command())?,
        "banner" => writeln!(out, "{}", config.banner)?,
        "color" => writeln!(out, "{}", color_name(config.color))?,
        _ => {
            anyhow::bail!(
                "Unknown configuration key: '{key}'\n\nAvailable keys:\n  prompt\n  \
                 exit_command\n  banner\n  color",
            );
        }
    }
    Ok(())
}
