use std::{fmt, str::FromStr};

use super::{boundary, roman::RomanNumeral};

/// An integer that has a standard Roman numeral representation.
///
/// The value is always within [`ArabicNumber::MIN`] and
/// [`ArabicNumber::MAX`], inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArabicNumber(u16);

impl ArabicNumber {
    /// The smallest representable number.
    pub const MIN: u16 = 1;

    /// The largest representable number.
    ///
    /// The alphabet has no single symbol for 5000, so 4000 would need four
    /// repeated `M`s.
    pub const MAX: u16 = 3999;

    /// Creates a new `ArabicNumber`.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if `value` is not between 1 and 3999.
    pub fn new(value: i64) -> Result<Self, RangeError> {
        u16::try_from(value)
            .ok()
            .filter(|n| (Self::MIN..=Self::MAX).contains(n))
            .map(Self)
            .ok_or(RangeError { value })
    }

    /// Returns the integer value.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Converts the number to its canonical Roman numeral.
    ///
    /// # Examples
    ///
    /// ```
    /// use numerals::ArabicNumber;
    ///
    /// let number = ArabicNumber::new(2578).unwrap();
    /// assert_eq!(number.to_roman().as_str(), "MMDLXXVIII");
    /// ```
    #[must_use]
    pub fn to_roman(self) -> RomanNumeral {
        RomanNumeral::from(self)
    }

    /// Greedy decomposition over the boundary table, most significant first.
    pub(super) fn compose(self) -> String {
        let mut remainder = self.0;
        let mut numeral = String::new();

        while let Some(boundary) = boundary::floor(remainder) {
            numeral.push_str(boundary.symbol);
            remainder -= boundary.value;
        }

        numeral
    }
}

impl From<ArabicNumber> for u16 {
    fn from(number: ArabicNumber) -> Self {
        number.0
    }
}

impl fmt::Display for ArabicNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ArabicNumber {
    type Err = ParseError;

    /// Parses an integer literal, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| ParseError::NotAnInteger(s.to_string()))?;
        Ok(Self::new(value)?)
    }
}

/// Error returned when an integer has no standard Roman numeral.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
#[error(
    "{value} is out of range: expected an integer between {min} and {max}",
    min = ArabicNumber::MIN,
    max = ArabicNumber::MAX
)]
pub struct RangeError {
    value: i64,
}

impl RangeError {
    /// The rejected value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }
}

/// Errors that can occur when parsing an [`ArabicNumber`] from text.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// The text is not an integer literal.
    #[error("'{0}' is not a valid integer")]
    NotAnInteger(String),

    /// The text is an integer, but outside the representable range.
    #[error(transparent)]
    Range(#[from] RangeError),
}
