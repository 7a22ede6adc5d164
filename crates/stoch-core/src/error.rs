//! Core error type.
//!
//! Every violation reported by the `stoch-*` crates is a logic error: it
//! indicates a programming bug at the call site, not a transient condition.
//! Nothing is retried; callers propagate with `?` and abort the simulation.

use thiserror::Error;

/// The top-level error type for `stoch-core` and a common base for the
/// other `stoch-*` crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("rate must be a non-negative number, got {0}")]
    InvalidRate(f64),

    #[error("time must be a non-negative number, got {0}")]
    InvalidTime(f64),
}

/// Shorthand result type for `stoch-core`.
pub type CoreResult<T> = Result<T, CoreError>;
