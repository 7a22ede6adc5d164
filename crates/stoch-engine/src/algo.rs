//! The simulation algorithms: reference direct, optimized direct, and
//! next-reaction.
//!
//! Each algorithm owns the system it simulates together with its random
//! source and whatever indices it maintains, and exposes one operation:
//! [`advance`](StochAlgo::advance) — select the next event, apply it to the
//! system, and bring the algorithm's own indices up to date using the fired
//! process's dependents.  A driver bounds the run externally by step count
//! or simulated time.

use stoch_core::{float, ProcId, StochRng};

use crate::error::{EngineError, EngineResult};
use crate::event::Event;
use crate::priority::PriorityList;
use crate::queue::EventQueue;
use crate::rates::RateManager;
use crate::system::System;

// ── StochAlgo ─────────────────────────────────────────────────────────────────

/// Common driver-facing surface of the three simulation algorithms.
pub trait StochAlgo {
    /// The concrete system type being simulated.
    type Sys: System;

    /// Read-only access to the simulated system.
    fn system(&self) -> &Self::Sys;

    /// Advance the simulation by one event and return it.
    fn advance(&mut self) -> EngineResult<Event>;
}

/// Threshold scan over the whole process list: the first process whose
/// cumulative rate reaches `u · total`, falling through to the last process
/// when round-off exhausts the scan.
fn scan_procs<S: System>(system: &S, threshold: f64) -> EngineResult<ProcId> {
    let mut accumulated = 0.0;
    for &proc in system.procs() {
        accumulated += system.rate_of(proc).value();
        if float::approx_ge(accumulated, threshold) {
            return Ok(proc);
        }
    }
    system
        .procs()
        .last()
        .copied()
        .ok_or(EngineError::SelectionFailed)
}

// ── ReferenceAlgo ─────────────────────────────────────────────────────────────

/// The direct method of Gillespie without any optimizations.
///
/// Every step re-sums all process rates and scans the whole list, so the
/// per-step cost is linear in the process count.  This is unlikely to be
/// the best choice for real problems; it exists as a baseline against which
/// to validate and benchmark the optimized algorithms, and it keeps no
/// state between steps.
pub struct ReferenceAlgo<S: System> {
    system: S,
    rng: StochRng,
}

impl<S: System> ReferenceAlgo<S> {
    pub fn new(system: S, rng: StochRng) -> ReferenceAlgo<S> {
        ReferenceAlgo { system, rng }
    }

    /// Consume the algorithm and return the simulated system.
    pub fn into_system(self) -> S {
        self.system
    }
}

impl<S: System> StochAlgo for ReferenceAlgo<S> {
    type Sys = S;

    fn system(&self) -> &S {
        &self.system
    }

    fn advance(&mut self) -> EngineResult<Event> {
        let total = self.system.total_rate();

        let threshold = self.rng.next_f64() * total.value();
        let proc = scan_procs(&self.system, threshold)?;
        let time = total.sample_time(self.system.last_event_time(), &mut self.rng);

        let event = Event::mark(proc, self.system.rate_of(proc), time);
        self.system.update_state(event)?;
        Ok(event)
    }
}

// ── DirectAlgo ────────────────────────────────────────────────────────────────

/// The direct method of Gillespie with the standard optimizations: the
/// total rate is maintained incrementally by a [`RateManager`] and the
/// fired process is chosen through a self-adjusting [`PriorityList`].
pub struct DirectAlgo<S: System> {
    system: S,
    rng: StochRng,
    rates: RateManager,
    priority: PriorityList,
}

impl<S: System> DirectAlgo<S> {
    pub fn new(system: S, rng: StochRng) -> DirectAlgo<S> {
        let rates = RateManager::new(&system);
        let priority = PriorityList::new(&system);
        DirectAlgo {
            system,
            rng,
            rates,
            priority,
        }
    }

    /// Consume the algorithm and return the simulated system.
    pub fn into_system(self) -> S {
        self.system
    }
}

impl<S: System> StochAlgo for DirectAlgo<S> {
    type Sys = S;

    fn system(&self) -> &S {
        &self.system
    }

    fn advance(&mut self) -> EngineResult<Event> {
        let total = self.rates.total_rate()?;

        let proc = self.priority.select(&self.system, &mut self.rng, total)?;
        let time = total.sample_time(self.system.last_event_time(), &mut self.rng);

        let event = Event::mark(proc, self.system.rate_of(proc), time);
        self.system.update_state(event)?;

        // The priority list adjusts itself through selections; only the
        // rate totals need an explicit update.
        let dependents = self.system.dependents(proc);
        self.rates.apply_event(&self.system, proc, dependents);
        Ok(event)
    }
}

// ── NextReactionAlgo ──────────────────────────────────────────────────────────

/// The next-reaction method of Gibson and Bruck
/// [J. Phys. Chem. A (2000) 104, 1876-1889].
///
/// Every process keeps one scheduled event in an indexed [`EventQueue`].
/// A step reads the earliest event from the root, applies it, resamples the
/// fired process, and retimes each dependent with rate-ratio scaling — the
/// queue stays fully populated for the lifetime of the simulation.
pub struct NextReactionAlgo<S: System> {
    system: S,
    rng: StochRng,
    queue: EventQueue,
}

impl<S: System> NextReactionAlgo<S> {
    /// Seed the queue with the first occurrence of every process.
    pub fn new(system: S, mut rng: StochRng) -> EngineResult<NextReactionAlgo<S>> {
        let mut queue = EventQueue::with_capacity(system.process_count());
        for &proc in system.procs() {
            queue.insert(Event::first(proc, system.rate_of(proc), &mut rng))?;
        }
        Ok(NextReactionAlgo { system, rng, queue })
    }

    /// Consume the algorithm and return the simulated system.
    pub fn into_system(self) -> S {
        self.system
    }

    /// The scheduled-event queue (exposed read-only for diagnostics).
    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }
}

impl<S: System> StochAlgo for NextReactionAlgo<S> {
    type Sys = S;

    fn system(&self) -> &S {
        &self.system
    }

    fn advance(&mut self) -> EngineResult<Event> {
        let event = *self.queue.peek().ok_or(EngineError::EmptyQueue)?;
        self.system.update_state(event)?;

        let fired = event.proc();
        self.queue
            .update(event.next(self.system.rate_of(fired), &mut self.rng))?;

        for &dependent in self.system.dependents(fired) {
            let scheduled = self.queue.find(dependent)?;
            let retimed = scheduled.update(&event, self.system.rate_of(dependent), &mut self.rng)?;
            self.queue.update(retimed)?;
        }

        Ok(event)
    }
}
