//! Application services

pub mod complement;

pub use complement::ComplementService;
