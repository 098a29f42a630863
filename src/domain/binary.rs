//! Binary strings and the unsigned arithmetic on them
//!
//! A [`BinaryString`] is never empty and only ever holds `'0'` and `'1'`.
//! Every operation here is pure and works in time linear in the input length.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use std::sync::OnceLock;

use num_bigint::BigUint;
use regex::Regex;

use crate::domain::ValidationError;

fn binary_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[01]+$").expect("static binary pattern"))
}

/// Non-empty string of binary digits, most-significant bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryString(String);

/// Validate raw user text and turn it into a [`BinaryString`].
///
/// Surrounding whitespace is trimmed first. Leading zeros are kept;
/// use [`BinaryString::normalize`] to drop them.
///
/// # Errors
/// * [`ValidationError::EmptyInput`] if nothing is left after trimming
/// * [`ValidationError::InvalidCharacter`] if anything other than `0`/`1` is present
pub fn validate(input: &str) -> Result<BinaryString, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    if !binary_pattern().is_match(trimmed) {
        let (position, found) = trimmed
            .chars()
            .enumerate()
            .find(|(_, c)| !matches!(c, '0' | '1'))
            .unwrap_or((0, '?'));
        return Err(ValidationError::InvalidCharacter { found, position });
    }
    Ok(BinaryString(trimmed.to_string()))
}

/// Unsigned binary addition.
///
/// The shorter operand is zero-extended on the left. A carry out of the
/// most-significant bit is kept, so the result is `max(len(a), len(b))`
/// or one bit longer.
pub fn add_binary(a: &BinaryString, b: &BinaryString) -> BinaryString {
    let width = a.len().max(b.len());
    let mut lhs = a.0.bytes().rev();
    let mut rhs = b.0.bytes().rev();

    // least-significant first, reversed at the end
    let mut digits: Vec<char> = Vec::with_capacity(width + 1);
    let mut carry = 0u8;
    for _ in 0..width {
        let total = bit_value(lhs.next()) + bit_value(rhs.next()) + carry;
        digits.push(if total % 2 == 1 { '1' } else { '0' });
        carry = total / 2;
    }
    if carry > 0 {
        digits.push('1');
    }

    BinaryString(digits.into_iter().rev().collect())
}

fn bit_value(digit: Option<u8>) -> u8 {
    u8::from(digit == Some(b'1'))
}

impl BinaryString {
    /// The single bit `1`.
    pub fn one() -> Self {
        Self("1".to_string())
    }

    /// The single bit `0`.
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of bits, always at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Strip leading zeros, keeping at least one digit.
    ///
    /// `"000101"` becomes `"101"`, `"0000"` becomes `"0"`.
    pub fn normalize(&self) -> BinaryString {
        let stripped = self.0.trim_start_matches('0');
        if stripped.is_empty() {
            Self::zero()
        } else {
            Self(stripped.to_string())
        }
    }

    /// Invert every bit. Width is preserved, including leading zeros.
    pub fn ones_complement(&self) -> BinaryString {
        Self(
            self.0
                .chars()
                .map(|c| if c == '0' { '1' } else { '0' })
                .collect(),
        )
    }

    /// One's complement plus one.
    ///
    /// No fixed width is applied: when the addition carries out of the top
    /// bit the result grows by one bit (`"0"` gives `"10"`).
    pub fn twos_complement(&self) -> BinaryString {
        add_binary(&self.ones_complement(), &Self::one())
    }

    /// Unsigned decimal value. Exact for any length.
    pub fn to_decimal(&self) -> BigUint {
        // Horner: each step doubles and adds the next bit
        self.0
            .bytes()
            .fold(BigUint::default(), |acc, b| (acc << 1u32) + u32::from(b == b'1'))
    }
}

impl fmt::Display for BinaryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BinaryString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for BinaryString {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl TryFrom<&str> for BinaryString {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate(value)
    }
}

impl Add for &BinaryString {
    type Output = BinaryString;

    fn add(self, rhs: &BinaryString) -> BinaryString {
        add_binary(self, rhs)
    }
}
