//! Decay-system error type.

use thiserror::Error;

use stoch_core::ProcId;
use stoch_engine::EngineError;

/// Errors raised while building or updating a decay system.
#[derive(Debug, Error)]
pub enum DecayError {
    #[error("at least one decay process must be defined")]
    Empty,

    #[error("got {populations} populations but {rates} rate constants")]
    LengthMismatch { populations: usize, rates: usize },

    #[error("initial population must be positive")]
    ZeroPopulation,

    #[error("decay rate constant must be positive and finite, got {0}")]
    InvalidRateConstant(f64),

    #[error("process {0} population is already zero")]
    Exhausted(ProcId),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Shorthand result type for `stoch-decay`.
pub type DecayResult<T> = Result<T, DecayError>;
