//! The interactive conversion session.
//!
//! The session shows a menu, reads which direction to convert in, reads a
//! single value, and prints the result. Rejected input is reported and the
//! menu is shown again; only the exit keyword or end of input ends the
//! session.

use std::io::{self, BufRead, Write};

use numerals::{ArabicNumber, Config, ParseError, RomanNumeral};
use tracing::instrument;

use super::terminal::Palette;

const WELCOME: &str = "Welcome to the Arabic to Roman converter!";
const MENU: [&str; 2] = [
    "Enter 1 to convert a number to a Roman Numeral.",
    "Enter 2 to convert a Roman Numeral to a number.",
];
const ARABIC_INSTRUCTIONS: &str =
    "Enter an Arabic number below to see it converted to Roman numerals.";
const ROMAN_INSTRUCTIONS: &str =
    "Enter a Roman Numeral below to see it converted to an Arabic number.";
const NUMBER_PARSE_ERROR: &str = "Unable to parse input into a valid number.";
const GOODBYE: &str = "Exiting.";

/// The conversion direction chosen from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    ToRoman,
    ToArabic,
}

impl Mode {
    /// Interprets a menu selection, returning the message to show on failure.
    fn from_menu(input: &str) -> Result<Self, String> {
        match input.trim().parse::<i64>() {
            Ok(1) => Ok(Self::ToRoman),
            Ok(2) => Ok(Self::ToArabic),
            Ok(_) => Err(format!("Invalid command '{input}' entered.")),
            Err(_) => Err(format!("Unable to parse input '{input}' into 1 or 2.")),
        }
    }
}

/// The outcome of one pass through the menu.
enum Reply {
    Converted(String),
    Rejected(String),
}

/// Runs a session on the process's standard input and output.
pub fn run(config: &Config, palette: Palette) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Session::new(config, palette, stdin.lock(), &mut stdout).run()?;
    Ok(())
}

/// An interactive session over arbitrary line-based input and output.
pub struct Session<'a, R, W> {
    config: &'a Config,
    palette: Palette,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub const fn new(config: &'a Config, palette: Palette, input: R, output: W) -> Self {
        Self {
            config,
            palette,
            input,
            output,
        }
    }

    /// Runs the menu loop until the exit keyword or end of input.
    #[instrument(level = "debug", skip_all)]
    pub fn run(mut self) -> io::Result<()> {
        if self.config.banner {
            writeln!(self.output, "{WELCOME}")?;
            let hint = format!("Type '{}' to exit.", self.config.exit_command());
            writeln!(self.output, "{}", self.palette.dim(&hint))?;
        }

        loop {
            for line in MENU {
                writeln!(self.output, "{line}")?;
            }
            let Some(selection) = self.prompt()? else {
                break;
            };
            if self.config.is_exit_command(&selection) {
                tracing::debug!("exit keyword received");
                break;
            }

            let reply = match Mode::from_menu(&selection) {
                Ok(mode) => {
                    tracing::debug!(?mode, "mode selected");
                    match self.convert(mode)? {
                        Some(reply) => reply,
                        None => break,
                    }
                }
                Err(message) => {
                    tracing::info!(input = %selection, "unrecognised menu selection");
                    Reply::Rejected(message)
                }
            };

            match reply {
                Reply::Converted(value) => {
                    writeln!(self.output, "{}", self.palette.success(&value))?;
                }
                Reply::Rejected(message) => {
                    writeln!(self.output, "{}", self.palette.warning(&message))?;
                }
            }
        }

        writeln!(self.output, "{GOODBYE}")?;
        self.output.flush()
    }

    /// Reads and converts one value. Returns `None` at end of input.
    fn convert(&mut self, mode: Mode) -> io::Result<Option<Reply>> {
        let instructions = match mode {
            Mode::ToRoman => ARABIC_INSTRUCTIONS,
            Mode::ToArabic => ROMAN_INSTRUCTIONS,
        };
        writeln!(self.output, "{instructions}")?;

        let Some(input) = self.prompt()? else {
            return Ok(None);
        };

        let reply = match mode {
            Mode::ToRoman => Self::to_roman(&input),
            Mode::ToArabic => Self::to_arabic(&input),
        };
        Ok(Some(reply))
    }

    fn to_roman(input: &str) -> Reply {
        match input.parse::<ArabicNumber>() {
            Ok(number) => Reply::Converted(number.to_roman().to_string()),
            Err(ParseError::Range(e)) => {
                tracing::info!(error = %e, "number out of range");
                Reply::Rejected(format!(
                    "Enter a valid integer > 0 and <= {}.",
                    ArabicNumber::MAX
                ))
            }
            Err(e @ ParseError::NotAnInteger(_)) => {
                tracing::info!(error = %e, "input is not a number");
                Reply::Rejected(NUMBER_PARSE_ERROR.to_string())
            }
        }
    }

    fn to_arabic(input: &str) -> Reply {
        match RomanNumeral::parse(input.trim()) {
            Ok(numeral) => Reply::Converted(numeral.value().to_string()),
            Err(e) => {
                tracing::info!(error = %e, "input is not a numeral");
                Reply::Rejected(format!(
                    "Unable to convert '{input}' into an Arabic number. Did you enter a valid \
                     roman numeral?"
                ))
            }
        }
    }

    /// Prints the prompt and reads a line, without its line ending.
    fn prompt(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "{}", self.config.prompt())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
