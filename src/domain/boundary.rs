//! The canonical subtractive-form alphabet.
//!
//! Every conversion is built on this table. It is a `const` array, strictly
//! descending by value, with unique symbols.

/// A single (value, symbol) pair of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    /// The integer value the symbol stands for.
    pub value: u16,

    /// The symbol, either a single letter or a subtractive pair.
    pub symbol: &'static str,
}

impl Boundary {
    const fn new(value: u16, symbol: &'static str) -> Self {
        Self { value, symbol }
    }
}

/// The 13 boundary values, largest first.
pub const BOUNDARIES: [Boundary; 13] = [
    Boundary::new(1000, "M"),
    Boundary::new(900, "CM"),
    Boundary::new(500, "D"),
    Boundary::new(400, "CD"),
    Boundary::new(100, "C"),
    Boundary::new(90, "XC"),
    Boundary::new(50, "L"),
    Boundary::new(40, "XL"),
    Boundary::new(10, "X"),
    Boundary::new(9, "IX"),
    Boundary::new(5, "V"),
    Boundary::new(4, "IV"),
    Boundary::new(1, "I"),
];

/// Returns the entry with the largest value not exceeding `n`.
///
/// Returns `None` only for zero, since the smallest boundary is 1.
#[must_use]
pub fn floor(n: u16) -> Option<Boundary> {
    BOUNDARIES.iter().copied().find(|boundary| boundary.value <= n)
}

/// Returns the value of a tabulated symbol.
///
/// Both single letters (`"X"`) and subtractive pairs (`"XC"`) are accepted.
#[must_use]
pub fn value_of(symbol: &str) -> Option<u16> {
    BOUNDARIES
        .iter()
        .find(|boundary| boundary.symbol == symbol)
        .map(|boundary| boundary.value)
}

/// Returns the value of a single uppercase letter of the alphabet.
#[must_use]
pub fn symbol_value(letter: char) -> Option<u16> {
    let mut buf = [0; 4];
    value_of(letter.encode_utf8(&mut buf))
}
