//! `RateManager` — incrementally maintained total transition rate.
//!
//! # Why this exists
//!
//! The direct method needs the total rate `Σ rate(p)` at every step.
//! Re-summing all `n` processes per step costs O(n); after a typical event
//! only the fired process and its dependents changed, so subtracting their
//! cached old rates and adding the fresh ones costs O(deps).
//!
//! # Drift control
//!
//! Partial updates accumulate floating-point round-off, so the manager
//! periodically falls back to a full re-sum.  Two thresholds, fixed at
//! construction, bound both the drift and the amortized cost:
//!
//! - `age_threshold = min(1_000_000, 100 · n)` — partial updates since the
//!   last full refresh;
//! - `proc_threshold = n / 2` — if an event touches half the system or
//!   more, a full refresh is no more expensive than the partial update.
//!
//! The manager assumes a *fixed* process set; behavior is undefined if
//! processes are added or removed from the system underneath it.

use std::collections::{BTreeSet, HashMap};

use stoch_core::{ProcId, Rate};

use crate::error::EngineResult;
use crate::system::System;

const MAX_AGE_THRESHOLD: u32 = 1_000_000;

/// Dynamically maintained total rate for a fixed system of processes.
#[derive(Debug)]
pub struct RateManager {
    cache: HashMap<ProcId, f64>,
    total: f64,
    age: u32,
    age_threshold: u32,
    proc_threshold: usize,
}

impl RateManager {
    /// Create a manager for `system`, performing the initial full sum.
    pub fn new<S: System>(system: &S) -> RateManager {
        let count = system.process_count();
        let mut manager = RateManager {
            cache: HashMap::with_capacity(count),
            total: 0.0,
            age: 0,
            age_threshold: MAX_AGE_THRESHOLD.min((count as u32).saturating_mul(100)),
            proc_threshold: count / 2,
        };
        manager.refresh_full(system);
        manager
    }

    /// The total instantaneous transition rate.
    ///
    /// Fails only if accumulated drift has pushed the cached total negative
    /// beyond the comparison tolerance, which indicates rates changing
    /// outside the update protocol.
    pub fn total_rate(&self) -> EngineResult<Rate> {
        Ok(Rate::new(self.total)?)
    }

    /// Update the total after an event: `fired` is the process that
    /// occurred, `dependents` the processes whose rates may have changed as
    /// a result (excluding `fired`).
    pub fn apply_event<S: System>(
        &mut self,
        system: &S,
        fired: ProcId,
        dependents: &BTreeSet<ProcId>,
    ) {
        if self.age < self.age_threshold && dependents.len() < self.proc_threshold {
            self.update_partial(system, fired, dependents);
        } else {
            self.refresh_full(system);
        }
    }

    fn update_partial<S: System>(&mut self, system: &S, fired: ProcId, dependents: &BTreeSet<ProcId>) {
        self.age += 1;
        self.update_proc(system, fired);
        for &dependent in dependents {
            self.update_proc(system, dependent);
        }
    }

    fn update_proc<S: System>(&mut self, system: &S, proc: ProcId) {
        let new_rate = system.rate_of(proc).value();
        // The cache covers every process after construction.
        let cached = self.cache.entry(proc).or_insert(0.0);
        self.total += new_rate - *cached;
        *cached = new_rate;
    }

    fn refresh_full<S: System>(&mut self, system: &S) {
        tracing::trace!(age = self.age, "full rate refresh");
        self.age = 0;
        self.total = 0.0;
        for &proc in system.procs() {
            let rate = system.rate_of(proc).value();
            self.cache.insert(proc, rate);
            self.total += rate;
        }
    }
}
