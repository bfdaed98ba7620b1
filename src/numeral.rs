use rug::Integer;
use thiserror::Error;

use crate::traits::Zero;

/// Largest base supported by the `0-9a-z` digit alphabet
pub const MAX_BASE: u32 = 36;

#[derive(Clone, Debug, Error, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum DecodeError {
    #[error("Invalid base {0}: must be between 2 and 36")]
    InvalidBase(Integer),
    #[error("Invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },
    #[error("No digits to decode")]
    Empty,
}

/// Decode a non-negative numeral in the given base
///
/// Digits are case-insensitive and taken from the alphabet `0-9a-z`,
/// so `a` (or `A`) stands for 10 and `z` for 35.
pub fn decode(base: &Integer, digits: &str) -> Result<Integer, DecodeError> {
    let radix = base
        .to_u32()
        .filter(|b| (2..=MAX_BASE).contains(b))
        .ok_or_else(|| DecodeError::InvalidBase(base.clone()))?;
    if digits.is_empty() {
        return Err(DecodeError::Empty);
    }
    let mut res = Integer::zero();
    for c in digits.chars().flat_map(char::to_lowercase) {
        let digit = c
            .to_digit(MAX_BASE)
            .filter(|d| *d < radix)
            .ok_or(DecodeError::InvalidDigit {
                digit: c,
                base: radix,
            })?;
        res *= radix;
        res += digit;
    }
    Ok(res)
}
