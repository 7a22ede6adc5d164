//! `PriorityList` — self-adjusting rate-weighted process selection.
//!
//! # Why this exists
//!
//! The direct method picks the fired process with probability
//! `rate(k) / total`.  A linear threshold scan is O(position of the
//! selected process), so the scan is cheap exactly when fast processes sit
//! near the head.  Rather than keeping the list sorted (O(n log n) per rate
//! change), every selection swaps the chosen process one slot toward the
//! head.  Frequently selected (high-rate) processes migrate forward over
//! time, including processes whose rates *grow* during the simulation.
//!
//! Membership is fixed at construction; only the order mutates.

use stoch_core::{float, ProcId, Rate, StochRng};

use crate::error::{EngineError, EngineResult};
use crate::system::System;

/// A process list ordered (approximately, adaptively) by selection
/// frequency.
#[derive(Debug)]
pub struct PriorityList {
    procs: Vec<ProcId>,
}

impl PriorityList {
    /// Create a list over all processes in `system`, initially in insertion
    /// order.
    pub fn new<S: System>(system: &S) -> PriorityList {
        PriorityList {
            procs: system.procs().to_vec(),
        }
    }

    /// Select a process at random with probability `rate(k) / total_rate`,
    /// then promote it one position toward the head.
    ///
    /// `total_rate` must be positive.  The scan accumulates current rates
    /// until the running sum reaches `u · total_rate` under the tolerant
    /// comparison; if round-off between the supplied total and the
    /// accumulated sum exhausts the scan, the last process is selected —
    /// with a correctly specified total the threshold is unreachable only
    /// by drift.
    pub fn select<S: System>(
        &mut self,
        system: &S,
        rng: &mut StochRng,
        total_rate: Rate,
    ) -> EngineResult<ProcId> {
        if !total_rate.is_positive() {
            return Err(EngineError::NonPositiveTotalRate(total_rate.value()));
        }

        let threshold = rng.next_f64() * total_rate.value();
        let mut accumulated = 0.0;

        let mut selected = self.procs.len().checked_sub(1).ok_or(EngineError::SelectionFailed)?;
        for (position, &proc) in self.procs.iter().enumerate() {
            accumulated += system.rate_of(proc).value();
            if float::approx_ge(accumulated, threshold) {
                selected = position;
                break;
            }
        }

        let chosen = self.procs[selected];
        if selected > 0 {
            self.procs.swap(selected, selected - 1);
        }
        Ok(chosen)
    }

    /// The number of processes in the list.
    pub fn len(&self) -> usize {
        self.procs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procs.is_empty()
    }
}
