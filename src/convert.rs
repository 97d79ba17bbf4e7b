//! The two conversion operations.
//!
//! Both are pure: they perform no I/O, hold no state, and may be called from
//! any number of threads at once.

use crate::domain::{ArabicNumber, FormatError, RangeError, RomanNumeral};

/// Converts an integer to its canonical Roman numeral.
///
/// # Errors
///
/// Returns a [`RangeError`] if `n` is not between 1 and 3999.
///
/// # Examples
///
/// ```
/// assert_eq!(numerals::to_roman(2499).unwrap(), "MMCDXCIX");
/// assert!(numerals::to_roman(0).is_err());
/// ```
pub fn to_roman(n: i64) -> Result<String, RangeError> {
    let number = ArabicNumber::new(n)?;
    Ok(RomanNumeral::from(number).to_string())
}

/// Converts a Roman numeral to an integer.
///
/// Letter case is ignored.
///
/// # Errors
///
/// Returns a [`FormatError`] if `numeral` is not a well-formed Roman numeral.
///
/// # Examples
///
/// ```
/// assert_eq!(numerals::to_arabic("CLIII").unwrap(), 153);
/// assert_eq!(numerals::to_arabic("xiv").unwrap(), 14);
/// assert!(numerals::to_arabic("IIII").is_err());
/// ```
pub fn to_arabic(numeral: &str) -> Result<u16, FormatError> {
    RomanNumeral::parse(numeral).map(|numeral| numeral.value())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use test_case::test_case;

    use super::*;
    use crate::domain::roman::is_well_formed;

    #[test_case(1, "I")]
    #[test_case(4, "IV")]
    #[test_case(9, "IX")]
    #[test_case(40, "XL")]
    #[test_case(90, "XC")]
    #[test_case(400, "CD")]
    #[test_case(900, "CM")]
    #[test_case(1000, "M")]
    #[test_case(3999, "MMMCMXCIX")]
    #[test_case(2578, "MMDLXXVIII")]
    #[test_case(2499, "MMCDXCIX")]
    fn to_roman_exact(n: i64, expected: &str) {
        assert_eq!(to_roman(n).unwrap(), expected);
    }

    #[test_case(0; "zero")]
    #[test_case(4000; "four thousand")]
    #[test_case(-12; "negative")]
    fn to_roman_rejects_out_of_range(n: i64) {
        let error = to_roman(n).unwrap_err();
        assert_eq!(error.value(), n);
    }

    #[test_case("CLIII", 153)]
    #[test_case("CMXCIX", 999)]
    #[test_case("xiv", 14)]
    #[test_case("MMMCMXCIX", 3999)]
    fn to_arabic_exact(numeral: &str, expected: u16) {
        assert_eq!(to_arabic(numeral).unwrap(), expected);
    }

    #[test_case("IIII"; "four ones")]
    #[test_case(""; "empty")]
    #[test_case("ABC"; "outside the alphabet")]
    #[test_case("VX"; "five before ten")]
    fn to_arabic_rejects_malformed(numeral: &str) {
        let error = to_arabic(numeral).unwrap_err();
        assert_eq!(error.input(), numeral);
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(to_arabic("xiv"), to_arabic("XIV"));
        assert_eq!(to_arabic("XIV"), Ok(14));
    }

    #[test]
    fn every_integer_round_trips() {
        for n in 1..=3999 {
            let numeral = to_roman(n).unwrap();
            assert_eq!(i64::from(to_arabic(&numeral).unwrap()), n, "{numeral}");
        }
    }

    /// The ten ways of writing one decimal digit with the given letters.
    fn digit_forms(one: char, five: char, ten: char) -> Vec<String> {
        let ones = |n: usize| one.to_string().repeat(n);
        vec![
            String::new(),
            ones(1),
            ones(2),
            ones(3),
            format!("{one}{five}"),
            five.to_string(),
            format!("{five}{}", ones(1)),
            format!("{five}{}", ones(2)),
            format!("{five}{}", ones(3)),
            format!("{one}{ten}"),
        ]
    }

    /// Every canonical numeral, built digit by digit without the converter.
    fn canonical_numerals() -> Vec<String> {
        let thousands = ["", "M", "MM", "MMM"];
        let hundreds = digit_forms('C', 'D', 'M');
        let tens = digit_forms('X', 'L', 'C');
        let units = digit_forms('I', 'V', 'X');

        let mut numerals = Vec::new();
        for m in thousands {
            for c in &hundreds {
                for x in &tens {
                    for i in &units {
                        numerals.push(format!("{m}{c}{x}{i}"));
                    }
                }
            }
        }
        numerals.retain(|numeral| !numeral.is_empty());
        numerals
    }

    #[test]
    fn every_numeral_round_trips() {
        let numerals = canonical_numerals();
        assert_eq!(numerals.len(), 3999);

        for numeral in &numerals {
            assert!(is_well_formed(numeral), "{numeral}");
            let value = to_arabic(numeral).unwrap();
            assert_eq!(&to_roman(i64::from(value)).unwrap(), numeral);
            assert_eq!(to_arabic(&numeral.to_lowercase()), Ok(value));
        }
    }

    #[test]
    fn grammar_accepts_only_canonical_numerals() {
        // every string of up to five letters over the alphabet
        let canonical: HashSet<String> = canonical_numerals().into_iter().collect();
        let mut candidates = vec![String::new()];
        for _ in 0..5 {
            candidates = candidates
                .iter()
                .flat_map(|prefix| "MDCLXVI".chars().map(move |c| format!("{prefix}{c}")))
                .collect();
            for candidate in &candidates {
                assert_eq!(
                    is_well_formed(candidate),
                    canonical.contains(candidate),
                    "{candidate}"
                );
                if let Ok(value) = to_arabic(candidate) {
                    assert_eq!(&to_roman(i64::from(value)).unwrap(), candidate);
                }
            }
        }
    }

    #[test]
    fn distinct_integers_give_distinct_numerals() {
        let numerals: HashSet<_> = (1..=3999).map(|n| to_roman(n).unwrap()).collect();
        assert_eq!(numerals.len(), 3999);
    }
}
