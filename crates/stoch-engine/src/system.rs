//! The system container and the engine-facing `System` contract.
//!
//! A concrete system (agent populations, decay chains, …) embeds a
//! [`SystemCore`] for the bookkeeping every system shares — the
//! insertion-ordered process membership, the dependency graph, the event
//! count and the most recent event — and implements the [`System`] trait on
//! top of it.  The trait's provided methods delegate to the core; the two
//! required domain methods are the current-rate lookup and the state-update
//! hook that applies event semantics.

use std::collections::BTreeSet;

use stoch_core::{ProcId, Rate, SimTime};

use crate::error::{EngineError, EngineResult};
use crate::event::Event;
use crate::graph::DepGraph;

// ── SystemCore ────────────────────────────────────────────────────────────────

/// Bookkeeping shared by every system of coupled stochastic processes.
///
/// The process set is fixed after construction: the rate aggregator and the
/// next-reaction queue both assume stable membership.
#[derive(Debug)]
pub struct SystemCore {
    /// Process ids in insertion order.
    order: Vec<ProcId>,
    members: BTreeSet<ProcId>,
    graph: DepGraph,
    event_count: u64,
    last_event: Option<Event>,
}

impl SystemCore {
    /// Build the core from the member processes and the dependency links.
    ///
    /// Fails on a duplicate process index, a link endpoint outside the
    /// member set, or a self-link.
    pub fn new<P, L>(procs: P, links: L) -> EngineResult<SystemCore>
    where
        P: IntoIterator<Item = ProcId>,
        L: IntoIterator<Item = (ProcId, ProcId)>,
    {
        let order: Vec<ProcId> = procs.into_iter().collect();

        let mut members = BTreeSet::new();
        for &proc in &order {
            if !members.insert(proc) {
                return Err(EngineError::DuplicateProcess(proc));
            }
        }

        let mut graph = DepGraph::new();
        for (predecessor, successor) in links {
            for endpoint in [predecessor, successor] {
                if !members.contains(&endpoint) {
                    return Err(EngineError::UnknownProcess(endpoint));
                }
            }
            graph.link(predecessor, successor)?;
        }

        Ok(SystemCore {
            order,
            members,
            graph,
            event_count: 0,
            last_event: None,
        })
    }

    /// Record an event: validate it, bump the count, and store it as the
    /// most recent event.
    ///
    /// Fails unless the event's process belongs to this system and its time
    /// is *strictly* after the previous event's (equal floating-point times
    /// are rejected — they indicate a bug at the call site).
    pub fn record(&mut self, event: Event) -> EngineResult<()> {
        if !self.contains(event.proc()) {
            return Err(EngineError::UnknownProcess(event.proc()));
        }
        if event.time() <= self.last_event_time() {
            return Err(EngineError::EventOutOfOrder {
                event: event.time(),
                last: self.last_event_time(),
            });
        }

        self.event_count += 1;
        self.last_event = Some(event);
        Ok(())
    }

    /// Process ids in insertion order.
    pub fn procs(&self) -> &[ProcId] {
        &self.order
    }

    pub fn process_count(&self) -> usize {
        self.order.len()
    }

    pub fn contains(&self, proc: ProcId) -> bool {
        self.members.contains(&proc)
    }

    /// The processes whose rates may change when `proc` fires.  Excludes
    /// `proc` itself — the fired process is always handled separately.
    pub fn dependents(&self, proc: ProcId) -> &BTreeSet<ProcId> {
        self.graph.successors(proc)
    }

    /// The number of events recorded so far.
    pub fn event_count(&self) -> u64 {
        self.event_count
    }

    /// The most recent event, or `None` before any event has occurred.
    pub fn last_event(&self) -> Option<Event> {
        self.last_event
    }

    /// The time of the most recent event, or [`SimTime::ZERO`] before any
    /// event has occurred.
    pub fn last_event_time(&self) -> SimTime {
        self.last_event.map_or(SimTime::ZERO, |event| event.time())
    }
}

// ── System ────────────────────────────────────────────────────────────────────

/// The contract between the engine and a concrete system of processes.
///
/// Implementors supply the embedded [`SystemCore`], the current-rate lookup,
/// and the [`apply_event`](System::apply_event) hook; everything else is
/// provided.
pub trait System {
    /// The embedded bookkeeping core.
    fn core(&self) -> &SystemCore;

    fn core_mut(&mut self) -> &mut SystemCore;

    /// The current instantaneous rate of `proc`.
    ///
    /// `proc` is always drawn from this system's own membership; rates must
    /// be non-negative and reflect the system state as of the most recent
    /// applied event.
    fn rate_of(&self, proc: ProcId) -> Rate;

    /// Apply the semantics of `event` — the event just recorded as
    /// [`last_event`](System::last_event): mutate the client state (e.g.
    /// agent populations) and refresh the rates of the fired process and
    /// of every process in [`dependents`](System::dependents)`(event.proc())`.
    fn apply_event(&mut self, event: Event) -> EngineResult<()>;

    // ── Provided ──────────────────────────────────────────────────────────

    /// Advance the system state by one event: validate and record it, then
    /// run the [`apply_event`](System::apply_event) hook.
    fn update_state(&mut self, event: Event) -> EngineResult<()> {
        self.core_mut().record(event)?;
        self.apply_event(event)
    }

    /// Process ids in insertion order.
    fn procs(&self) -> &[ProcId] {
        self.core().procs()
    }

    fn process_count(&self) -> usize {
        self.core().process_count()
    }

    fn contains(&self, proc: ProcId) -> bool {
        self.core().contains(proc)
    }

    /// The processes whose rates may change when `proc` fires, excluding
    /// `proc` itself.
    fn dependents(&self, proc: ProcId) -> &BTreeSet<ProcId> {
        self.core().dependents(proc)
    }

    fn event_count(&self) -> u64 {
        self.core().event_count()
    }

    fn last_event(&self) -> Option<Event> {
        self.core().last_event()
    }

    fn last_event_time(&self) -> SimTime {
        self.core().last_event_time()
    }

    /// The exact total of every process's current rate.
    fn total_rate(&self) -> Rate {
        Rate::total(self.procs().iter().map(|&proc| self.rate_of(proc)))
    }
}
