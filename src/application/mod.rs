//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and adapts it to presentation surfaces.

pub mod error;
pub mod error_ext;
pub mod presenter;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use presenter::{Presenter, ResultView};
pub use services::ComplementService;
