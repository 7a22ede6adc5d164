//! Engine error type.
//!
//! Every variant is a fatal logic error: the simulation state is considered
//! corrupted at the first violation and there is no recovery or rollback.
//! Messages carry the offending index or time so the failing call site can
//! be identified from the error alone.

use thiserror::Error;

use stoch_core::{CoreError, ProcId, SimTime};

/// The error type for all engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("duplicate process index {0}")]
    DuplicateProcess(ProcId),

    #[error("unknown process index {0}")]
    UnknownProcess(ProcId),

    #[error("process {0} cannot be linked to itself")]
    SelfLink(ProcId),

    #[error("event at {event} does not advance past the previous event at {last}")]
    EventOutOfOrder { event: SimTime, last: SimTime },

    #[error("linked event at {linked} occurs after the dependent event at {scheduled}")]
    LinkedEventAfterScheduled { linked: SimTime, scheduled: SimTime },

    #[error("total transition rate must be positive, got {0}")]
    NonPositiveTotalRate(f64),

    #[error("event heap order is violated at slot {0}")]
    HeapUnordered(usize),

    #[error("event queue is empty")]
    EmptyQueue,

    #[error("process selection failed: no processes to select from")]
    SelectionFailed,

    #[error("system state update failed: {0}")]
    System(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl EngineError {
    /// Wrap a client-side state-update failure (population underflow and the
    /// like) raised from a [`System::apply_event`] hook.
    ///
    /// [`System::apply_event`]: crate::System::apply_event
    pub fn system<E>(err: E) -> EngineError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        EngineError::System(Box::new(err))
    }
}

/// Shorthand result type for all engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
