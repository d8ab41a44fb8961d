use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

use crate::error::{LinkedNumberError, Result};
use crate::linked_num_constants::*;

/// A single digit: the symbol it was written with and its magnitude.
///
/// `'0'..='9'` map to `0..=9`, letters map to `10..=35` regardless of case.
/// Two digits compare by magnitude only, so `'a'` equals `'A'`.
#[derive(Debug, Clone, Copy)]
pub struct Digit {
    symbol: char,
    value: u8,
}

impl Digit {
    pub fn new(symbol: char) -> Result<Self> {
        match symbol.to_digit(MAX_RADIX) {
            Some(value) => Ok(Digit { symbol, value: value as u8 }),
            None => Err(LinkedNumberError::InvalidDigit(symbol)),
        }
    }

    /// Builds the canonical (upper case) digit for `value`.
    pub fn from_value(value: u32) -> Result<Self> {
        if value < MAX_RADIX {
            Ok(Digit::canonical(value as u8))
        } else {
            Err(LinkedNumberError::InvalidDigitValue(value))
        }
    }

    /// `value` must be below `MAX_RADIX`.
    #[inline]
    pub(crate) fn canonical(value: u8) -> Self {
        Digit { symbol: DIGITS[value as usize], value }
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.value as u32
    }

    #[inline]
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Whether this digit may appear in a number written in `radix`.
    #[inline]
    pub fn fits(&self, radix: u32) -> bool {
        self.value() < radix
    }
}

impl TryFrom<char> for Digit {
    type Error = LinkedNumberError;

    fn try_from(symbol: char) -> Result<Self> {
        Digit::new(symbol)
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

impl PartialEq for Digit {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Digit {}

impl Hash for Digit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for Digit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Digit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

#[test]
fn test_new() {
    assert_eq!(Digit::new('0').unwrap().value(), 0);
    assert_eq!(Digit::new('9').unwrap().value(), 9);
    assert_eq!(Digit::new('A').unwrap().value(), 10);
    assert_eq!(Digit::new('z').unwrap().value(), 35);
    assert_eq!(Digit::new('f').unwrap().symbol(), 'f');

    assert_eq!(Digit::new('-'), Err(LinkedNumberError::InvalidDigit('-')));
    assert_eq!(Digit::new(' '), Err(LinkedNumberError::InvalidDigit(' ')));
    assert_eq!(Digit::try_from('é'), Err(LinkedNumberError::InvalidDigit('é')));
}

#[test]
fn test_from_value() {
    assert_eq!(Digit::from_value(15).unwrap().symbol(), 'F');
    assert_eq!(Digit::from_value(0).unwrap().to_string(), "0");
    assert_eq!(Digit::from_value(36), Err(LinkedNumberError::InvalidDigitValue(36)));
}

#[test]
fn test_eq_ignores_case() {
    let lower = Digit::new('b').unwrap();
    let upper = Digit::new('B').unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.to_string(), "b");
    assert_eq!(upper.to_string(), "B");
    assert!(Digit::new('3').unwrap() < lower);
}

#[test]
fn test_fits() {
    let seven = Digit::new('7').unwrap();
    assert!(seven.fits(8));
    assert!(!seven.fits(7));
}
