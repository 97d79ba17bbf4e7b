use std::{io::Write, process};

use numerals::{ArabicNumber, Error, RomanNumeral};
use serde::Serialize;
use tracing::instrument;

use super::terminal::Palette;

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Convert one or more integers to Roman numerals
#[derive(Debug, clap::Parser)]
pub struct ToRoman {
    /// The integers to convert (1 to 3999)
    #[arg(required = true, allow_negative_numbers = true)]
    numbers: Vec<String>,

    /// Output format (text, json)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: OutputFormat,
}

impl ToRoman {
    #[instrument(level = "debug", skip(palette))]
    pub fn run(self, palette: Palette) -> anyhow::Result<()> {
        let outcomes: Vec<_> = self.numbers.iter().map(|n| Outcome::to_roman(n)).collect();
        report(&outcomes, self.output, palette)
    }
}

/// Convert one or more Roman numerals to integers
#[derive(Debug, clap::Parser)]
pub struct ToArabic {
    /// The numerals to convert (case-insensitive)
    #[arg(required = true)]
    numerals: Vec<String>,

    /// Output format (text, json)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: OutputFormat,
}

impl ToArabic {
    #[instrument(level = "debug", skip(palette))]
    pub fn run(self, palette: Palette) -> anyhow::Result<()> {
        let outcomes: Vec<_> = self
            .numerals
            .iter()
            .map(|numeral| Outcome::to_arabic(numeral))
            .collect();
        report(&outcomes, self.output, palette)
    }
}

/// The result of converting a single argument.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct Outcome {
    input: String,
    #[serde(flatten)]
    result: Converted,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum Converted {
    Output(String),
    Error(String),
}

impl Outcome {
    fn to_roman(input: &str) -> Self {
        let result = input
            .parse::<ArabicNumber>()
            .map(|number| number.to_roman().to_string())
            .map_err(Error::from);
        Self::new(input, result)
    }

    fn to_arabic(input: &str) -> Self {
        let result = input
            .trim()
            .parse::<RomanNumeral>()
            .map(|numeral| numeral.value().to_string())
            .map_err(Error::from);
        Self::new(input, result)
    }

    fn new(input: &str, result: Result<String, Error>) -> Self {
        let result = match result {
            Ok(output) => Converted::Output(output),
            Err(e) => {
                tracing::debug!(input, error = %e, "conversion failed");
                Converted::Error(e.to_string())
            }
        };
        Self {
            input: input.to_string(),
            result,
        }
    }

    const fn is_error(&self) -> bool {
        matches!(self.result, Converted::Error(_))
    }
}

/// Prints the outcomes and exits with status 1 if any of them failed.
fn report(outcomes: &[Outcome], format: OutputFormat, palette: Palette) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    write_outcomes(outcomes, format, palette, &mut stdout, &mut stderr)?;

    let failures = outcomes.iter().filter(|outcome| outcome.is_error()).count();
    if failures > 0 {
        tracing::warn!(failures, "some inputs could not be converted");
        drop(stdout);
        drop(stderr);
        process::exit(1);
    }

    Ok(())
}

fn write_outcomes(
    outcomes: &[Outcome],
    format: OutputFormat,
    palette: Palette,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, outcomes)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for outcome in outcomes {
                match &outcome.result {
                    Converted::Output(value) => writeln!(out, "{}", palette.success(value))?,
                    Converted::Error(message) => writeln!(err, "{}", palette.warning(message))?,
                }
            }
        }
    }
    Ok(())
}
