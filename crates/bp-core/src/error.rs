//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so validation failures raised here surface
//! unchanged at the simulation boundary.

use thiserror::Error;

/// Validation failures for geometry, entity parameters, and configuration.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("{what} must be finite, got ({x}, {y})")]
    NonFinite {
        what: &'static str,
        x:    f64,
        y:    f64,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `bp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
