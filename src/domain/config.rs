use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for the interactive shell.
///
/// None of these settings affect conversion; they only control how the shell
/// talks to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The prompt printed before each line of input.
    prompt: String,

    /// The keyword that ends an interactive session.
    ///
    /// Compared case-insensitively.
    exit_command: String,

    /// Whether to greet the user when the session starts.
    pub banner: bool,

    /// When to colour output.
    pub color: ColorChoice,
}

/// When to colour terminal output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour only when stdout supports it.
    #[default]
    Auto,
    /// Always colour.
    Always,
    /// Never colour.
    Never,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            exit_command: default_exit_command(),
            banner: true,
            color: ColorChoice::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the input prompt.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the exit keyword.
    #[must_use]
    pub fn exit_command(&self) -> &str {
        &self.exit_command
    }

    /// Checks whether a line of input is the exit keyword.
    ///
    /// Surrounding whitespace is ignored and case does not matter.
    #[must_use]
    pub fn is_exit_command(&self, input: &str) -> bool {
        input.trim().eq_ignore_ascii_case(&self.exit_command)
    }

    /// Sets the exit keyword.
    ///
    /// Blank keywords are ignored, since an empty line would otherwise end
    /// the session. Returns `true` if the keyword was changed.
    pub fn set_exit_command(&mut self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            false
        } else {
            self.exit_command = keyword.to_ascii_lowercase();
            true
        }
    }
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_exit_command() -> String {
    "exit".to_string()
}

const fn default_banner() -> bool {
    true
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_prompt")]
        prompt: String,

        #[serde(default = "default_exit_command")]
        exit_command: String,

        #[serde(default = "default_banner")]
        banner: bool,

        #[serde(default)]
        color: ColorChoice,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                prompt,
                exit_command,
                banner,
                color,
            } => {
                let mut config = Self {
                    prompt,
                    banner,
                    color,
                    ..Self::default()
                };
                config.set_exit_command(&exit_command);
                config
            }
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            prompt: config.prompt,
            exit_command: config.exit_command,
            banner: config.banner,
            color: config.color,
        }
    }
}
