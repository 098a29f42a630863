//! Domain layer: binary arithmetic and computation results
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod binary;
pub mod error;
pub mod result;

pub use binary::{add_binary, validate, BinaryString};
pub use error::ValidationError;
pub use result::{compute, ComputationResult, Steps};
