//! Roman numeral conversion
//!
//! Converts integers between 1 and 3999 to canonical Roman numerals and back,
//! rejecting out-of-range integers and malformed numerals with typed errors.

pub mod domain;
pub use domain::{ArabicNumber, Config, Error, FormatError, ParseError, RangeError, RomanNumeral};

/// Conversion between integers and numerals.
pub mod convert;
pub use convert::{to_arabic, to_roman};
