//! Terminal colour handling

use numerals::domain::ColorChoice;
use owo_colors::{OwoColorize, colors::css};

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Colours output, or passes it through untouched when disabled.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self {
                enabled: supports_color(),
            },
            ColorChoice::Always => Self { enabled: true },
            ColorChoice::Never => Self::plain(),
        }
    }

    /// A palette that never colours, for captured output.
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// Colour as a conversion result (green)
    pub fn success(self, text: &str) -> String {
        if self.enabled {
            text.fg::<css::Green>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Colour as a rejected input (amber)
    pub fn warning(self, text: &str) -> String {
        if self.enabled {
            text.fg::<css::Orange>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Dim the text
    pub fn dim(self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}
