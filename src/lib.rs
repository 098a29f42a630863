//! bincomp: one's and two's complement of unsigned binary numbers
//!
//! Layers:
//! - [`domain`]: binary arithmetic and results, pure and UI-free
//! - [`application`]: service and presenter that adapt the core to a view
//! - [`cli`]: command line and terminal rendering
//!
//! ```
//! let result = bincomp::domain::compute("0101").unwrap();
//! assert_eq!(result.normalized().as_str(), "101");
//! assert_eq!(result.twos_complement().as_str(), "011");
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
