//! Agent-system error type.

use thiserror::Error;

use stoch_core::{AgentId, CoreError};
use stoch_engine::EngineError;

/// Errors raised while building or updating an agent system.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("unknown agent index {0}")]
    UnknownAgent(AgentId),

    #[error("agent {agent} population would go negative: have {have}, removing {removing}")]
    PopulationUnderflow {
        agent: AgentId,
        have: u64,
        removing: u64,
    },

    #[error("rate constant must be finite and non-negative, got {0}")]
    InvalidRateConstant(f64),

    #[error("transition reactant and product must be distinct, got {0} for both")]
    SelfTransition(AgentId),

    #[error("capacity must be positive")]
    ZeroCapacity,

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Shorthand result type for `stoch-agent`.
pub type AgentResult<T> = Result<T, AgentError>;
