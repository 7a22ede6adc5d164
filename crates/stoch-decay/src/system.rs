//! `DecaySystem` — a set of fully independent decay processes.

use stoch_core::{ProcId, Rate};
use stoch_engine::{EngineError, EngineResult, Event, System, SystemCore};

use crate::error::{DecayError, DecayResult};
use crate::proc::DecayProc;

/// A system of independent first-order decay processes.
///
/// Independence means an empty dependency graph: firing one process never
/// changes another's rate, so the engine's dependent-update paths all see
/// empty sets.
pub struct DecaySystem {
    core: SystemCore,
    procs: Vec<DecayProc>,
}

impl DecaySystem {
    /// Create a system from parallel slices of initial populations and
    /// decay rate constants.
    pub fn new(populations: &[u64], rate_consts: &[f64]) -> DecayResult<DecaySystem> {
        if populations.is_empty() {
            return Err(DecayError::Empty);
        }
        if populations.len() != rate_consts.len() {
            return Err(DecayError::LengthMismatch {
                populations: populations.len(),
                rates: rate_consts.len(),
            });
        }

        let procs: Vec<DecayProc> = populations
            .iter()
            .zip(rate_consts)
            .enumerate()
            .map(|(index, (&pop, &k))| DecayProc::new(ProcId(index as u32), pop, k))
            .collect::<DecayResult<_>>()?;

        let core = SystemCore::new(procs.iter().map(DecayProc::id), [])?;
        Ok(DecaySystem { core, procs })
    }

    /// The process registered under `proc`.
    pub fn proc(&self, proc: ProcId) -> &DecayProc {
        &self.procs[proc.index()]
    }

    /// All processes, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DecayProc> {
        self.procs.iter()
    }
}

impl System for DecaySystem {
    fn core(&self) -> &SystemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SystemCore {
        &mut self.core
    }

    fn rate_of(&self, proc: ProcId) -> Rate {
        self.procs[proc.index()].rate()
    }

    fn apply_event(&mut self, event: Event) -> EngineResult<()> {
        // All decay processes are independent: only the fired process
        // changes.
        self.procs[event.proc().index()]
            .decay()
            .map_err(EngineError::system)
    }
}
