//! Computation results: what the presentation layer renders

use num_bigint::BigUint;

use crate::domain::binary::{validate, BinaryString};
use crate::domain::ValidationError;

/// Normalized input with its one's and two's complements and their
/// unsigned decimal values. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputationResult {
    normalized: BinaryString,
    decimal: BigUint,
    ones_complement: BinaryString,
    ones_decimal: BigUint,
    twos_complement: BinaryString,
    twos_decimal: BigUint,
}

/// Intermediate values shown in the steps area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Steps {
    /// Normalized input
    pub original: BinaryString,
    /// Every bit of `original` inverted
    pub ones_complement: BinaryString,
    /// `ones_complement + 1`
    pub twos_complement: BinaryString,
}

/// Validate, normalize and derive all complements and decimal values.
///
/// Leading zeros are stripped before anything else is computed, so
/// `"0010"` is treated exactly like `"10"`.
pub fn compute(input: &str) -> Result<ComputationResult, ValidationError> {
    let binary = validate(input)?;
    Ok(ComputationResult::from_binary(&binary))
}

impl ComputationResult {
    /// Derive a result from an already validated binary string.
    pub fn from_binary(binary: &BinaryString) -> Self {
        let normalized = binary.normalize();
        let ones_complement = normalized.ones_complement();
        let twos_complement = normalized.twos_complement();

        Self {
            decimal: normalized.to_decimal(),
            ones_decimal: ones_complement.to_decimal(),
            twos_decimal: twos_complement.to_decimal(),
            normalized,
            ones_complement,
            twos_complement,
        }
    }

    pub fn normalized(&self) -> &BinaryString {
        &self.normalized
    }

    pub fn decimal(&self) -> &BigUint {
        &self.decimal
    }

    pub fn ones_complement(&self) -> &BinaryString {
        &self.ones_complement
    }

    pub fn ones_decimal(&self) -> &BigUint {
        &self.ones_decimal
    }

    pub fn twos_complement(&self) -> &BinaryString {
        &self.twos_complement
    }

    pub fn twos_decimal(&self) -> &BigUint {
        &self.twos_decimal
    }

    /// True when the two's complement grew past the input width.
    pub fn has_carry_out(&self) -> bool {
        self.twos_complement.len() > self.normalized.len()
    }

    pub fn steps(&self) -> Steps {
        Steps {
            original: self.normalized.clone(),
            ones_complement: self.ones_complement.clone(),
            twos_complement: self.twos_complement.clone(),
        }
    }
}
