use std::{fmt, ops::Deref, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ArabicNumber, boundary};

/// The grammar of well-formed numerals in canonical (uppercase) form.
///
/// Each group covers one decimal digit, thousands first.
static GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("numeral grammar is a valid regex")
});

/// Returns `true` if `numeral` is a non-empty, uppercase, canonical numeral.
///
/// The grammar on its own also matches the empty string, which is not a
/// numeral.
#[must_use]
pub fn is_well_formed(numeral: &str) -> bool {
    !numeral.is_empty() && GRAMMAR.is_match(numeral)
}

/// Sums the letters of a well-formed numeral.
///
/// Letters are scanned right to left. A letter worth less than the one to
/// its right is the first half of a subtractive pair and is subtracted.
fn decompose(numeral: &str) -> u16 {
    let mut total = 0;
    let mut previous = 0;

    for letter in numeral.chars().rev() {
        let value = boundary::symbol_value(letter);
        debug_assert!(value.is_some(), "untabulated letter {letter:?} in {numeral}");
        let value = value.unwrap_or_default();
        if value < previous {
            total -= value;
        } else {
            total += value;
        }
        previous = value;
    }

    total
}

/// A validated Roman numeral in canonical uppercase form.
///
/// Between `I` (1) and `MMMCMXCIX` (3999).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RomanNumeral(String);

impl RomanNumeral {
    /// Parses a numeral, accepting any ASCII letter case.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] if the input is empty, contains letters
    /// outside the alphabet, or is not in canonical subtractive form (for
    /// example `IIII`, `VX` or `IC`).
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        let uppercase = input.to_ascii_uppercase();
        if is_well_formed(&uppercase) {
            Ok(Self(uppercase))
        } else {
            Err(FormatError {
                input: input.to_string(),
            })
        }
    }

    /// Returns the numeral as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the integer value of the numeral.
    ///
    /// # Examples
    ///
    /// ```
    /// use numerals::RomanNumeral;
    ///
    /// let numeral = RomanNumeral::parse("cmxcix").unwrap();
    /// assert_eq!(numeral.as_str(), "CMXCIX");
    /// assert_eq!(numeral.value(), 999);
    /// ```
    #[must_use]
    pub fn value(&self) -> u16 {
        decompose(&self.0)
    }
}

impl From<ArabicNumber> for RomanNumeral {
    fn from(number: ArabicNumber) -> Self {
        Self(number.compose())
    }
}

impl FromStr for RomanNumeral {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for RomanNumeral {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for RomanNumeral {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a string is not a well-formed Roman numeral.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("'{input}' is not a valid Roman numeral")]
pub struct FormatError {
    input: String,
}

impl FormatError {
    /// The rejected input, as supplied.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("I")]
    #[test_case("IV")]
    #[test_case("XIV")]
    #[test_case("XLIX")]
    #[test_case("CDXCIX")]
    #[test_case("MMMCMXCIX")]
    fn canonical_numerals_are_well_formed(numeral: &str) {
        assert!(is_well_formed(numeral));
    }

    #[test_case(""; "empty")]
    #[test_case("IIII"; "four ones")]
    #[test_case("VV"; "repeated five")]
    #[test_case("VX"; "five before ten")]
    #[test_case("IC"; "one before hundred")]
    #[test_case("IIV"; "double subtraction")]
    #[test_case("XCX"; "pair followed by its larger letter")]
    #[test_case("MMMM"; "four thousand")]
    #[test_case("ABC"; "outside the alphabet")]
    #[test_case("xiv"; "lowercase")]
    #[test_case(" XIV"; "leading space")]
    fn malformed_strings_are_rejected(numeral: &str) {
        assert!(!is_well_formed(numeral));
    }

    #[test_case("I", 1)]
    #[test_case("IV", 4)]
    #[test_case("IX", 9)]
    #[test_case("XIV", 14)]
    #[test_case("XL", 40)]
    #[test_case("XC", 90)]
    #[test_case("CLIII", 153)]
    #[test_case("CD", 400)]
    #[test_case("CM", 900)]
    #[test_case("CMXCIX", 999)]
    #[test_case("MMCDXCIX", 2499)]
    #[test_case("MMDLXXVIII", 2578)]
    #[test_case("MMMCMXCIX", 3999)]
    fn decompose_sums_with_subtractive_pairs(numeral: &str, expected: u16) {
        assert_eq!(decompose(numeral), expected);
    }

    #[test]
    fn decompose_agrees_with_left_to_right_rule() {
        for value in 1..=3999 {
            let numeral = ArabicNumber::new(value).unwrap().compose();
            let letters: Vec<i32> = numeral
                .chars()
                .filter_map(boundary::symbol_value)
                .map(i32::from)
                .collect();
            let mut expected = 0;
            for (i, letter) in letters.iter().enumerate() {
                match letters.get(i + 1) {
                    Some(next) if letter < next => expected -= letter,
                    _ => expected += letter,
                }
            }
            assert_eq!(i32::from(decompose(&numeral)), expected, "{numeral}");
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "untabulated letter")]
    fn decompose_rejects_untabulated_letters() {
        decompose("XIZ");
    }

    #[test]
    fn parse_normalizes_case() {
        let lower = RomanNumeral::parse("xiv").unwrap();
        let mixed = RomanNumeral::parse("xIv").unwrap();
        let upper = RomanNumeral::parse("XIV").unwrap();

        assert_eq!(lower, upper);
        assert_eq!(mixed, upper);
        assert_eq!(lower.as_str(), "XIV");
        assert_eq!(lower.value(), 14);
    }

    #[test_case(""; "empty")]
    #[test_case("IIII"; "four ones")]
    #[test_case("ABC"; "outside the alphabet")]
    #[test_case("VX"; "five before ten")]
    #[test_case("iiii"; "lowercase four ones")]
    #[test_case("ⅻ"; "unicode numeral")]
    fn parse_rejects_malformed(input: &str) {
        let error = RomanNumeral::parse(input).unwrap_err();
        assert_eq!(error.input(), input);
    }

    #[test]
    fn from_str_matches_parse() {
        let numeral: RomanNumeral = "mmdlxxviii".parse().unwrap();
        assert_eq!(numeral, RomanNumeral::parse("MMDLXXVIII").unwrap());
        assert_eq!(numeral.value(), 2578);
        assert!("IIII".parse::<RomanNumeral>().is_err());
    }

    #[test]
    fn from_arabic_is_canonical() {
        let numeral = RomanNumeral::from(ArabicNumber::new(1994).unwrap());
        assert_eq!(numeral.to_string(), "MCMXCIV");
        assert!(is_well_formed(&numeral));
    }

    #[test]
    fn error_display() {
        let error = RomanNumeral::parse("VX").unwrap_err();
        assert_eq!(error.to_string(), "'VX' is not a valid Roman numeral");
    }
}
