//! Domain models for Roman numeral conversion.
//!
//! This module contains the boundary table, the two validated value types
//! ([`ArabicNumber`] and [`RomanNumeral`]), and the configuration of the
//! interactive shell.

/// The boundary table of (value, symbol) pairs.
pub mod boundary;
pub use boundary::Boundary;

/// Integers in the representable range.
pub mod arabic;
pub use arabic::{ArabicNumber, ParseError, RangeError};

/// Validated Roman numerals.
pub mod roman;
pub use roman::{FormatError, RomanNumeral};

mod config;
pub use config::{ColorChoice, Config};

/// Any error produced while converting between numerals and integers.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// An integer outside 1 to 3999.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// A string that is not a well-formed numeral.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Text that is not an integer literal.
    #[error(transparent)]
    Parse(ParseError),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Range(range) => Self::Range(range),
            other @ ParseError::NotAnInteger(_) => Self::Parse(other),
        }
    }
}
