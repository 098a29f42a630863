//! Complement service
//!
//! Runs the full validate → normalize → complement → decimal pipeline.

use tracing::debug;

use crate::application::ApplicationResult;
use crate::domain::{self, add_binary, BinaryString, ComputationResult};

/// Stateless entry point to the binary arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplementService;

impl ComplementService {
    /// Create a new complement service.
    pub fn new() -> Self {
        Self
    }

    /// Compute complements and decimal values for raw user input.
    ///
    /// Validation failures are returned as
    /// [`ApplicationError::Validation`](crate::application::ApplicationError::Validation)
    /// and never produce a partial result.
    pub fn compute(&self, input: &str) -> ApplicationResult<ComputationResult> {
        debug!("compute: input={:?}", input);
        let result = domain::compute(input).inspect_err(|e| {
            debug!("compute: rejected ({}): {:?}", e.kind(), e);
        })?;
        debug!(
            "compute: normalized={} ones={} twos={} carry_out={}",
            result.normalized(),
            result.ones_complement(),
            result.twos_complement(),
            result.has_carry_out()
        );
        Ok(result)
    }

    /// Validate both operands and add them.
    pub fn add(&self, a: &str, b: &str) -> ApplicationResult<BinaryString> {
        let lhs = domain::validate(a)?;
        let rhs = domain::validate(b)?;
        let sum = add_binary(&lhs, &rhs);
        debug!("add: {} + {} = {}", lhs, rhs, sum);
        Ok(sum)
    }
}
