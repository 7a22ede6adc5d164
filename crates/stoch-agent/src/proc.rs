//! Agent-based stochastic processes.
//!
//! The original formulation of these processes is an inheritance tree
//! (first-order process → birth/death/transition, plus a capping
//! decorator).  Here a process is a plain capability set: a [`ProcLaw`]
//! describing what happens to the populations, a rate constant, and an
//! optional [`CapacityGate`].  The engine never sees any of this — it only
//! reads the cached instantaneous rate through the system.

use std::collections::BTreeSet;

use stoch_core::{AgentId, ProcId, Rate};

use crate::error::AgentResult;
use crate::population::Population;

// ── ProcLaw ───────────────────────────────────────────────────────────────────

/// What firing a process does to the agent populations, and which agent
/// drives its first-order rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcLaw {
    /// `parent → parent + child`: one new `child`, the parent retained.
    /// Self-replication is `parent == child`.
    Birth { parent: AgentId, child: AgentId },

    /// `agent → ∅`: one instance removed.
    Death { agent: AgentId },

    /// `from → to`: one instance converted.  `from` and `to` must be
    /// distinct (enforced at construction).
    Transition { from: AgentId, to: AgentId },
}

impl ProcLaw {
    /// The reactive agent whose population drives the rate.
    pub fn reactant(&self) -> AgentId {
        match *self {
            ProcLaw::Birth { parent, .. } => parent,
            ProcLaw::Death { agent } => agent,
            ProcLaw::Transition { from, .. } => from,
        }
    }

    /// Every agent this law mentions (for membership validation).
    pub(crate) fn agents(&self) -> Vec<AgentId> {
        match *self {
            ProcLaw::Birth { parent, child } => vec![parent, child],
            ProcLaw::Death { agent } => vec![agent],
            ProcLaw::Transition { from, to } => vec![from, to],
        }
    }

    /// Apply the population delta for one firing.
    pub(crate) fn apply(&self, population: &mut Population) -> AgentResult<()> {
        match *self {
            ProcLaw::Birth { child, .. } => {
                population.add(child, 1);
                Ok(())
            }
            ProcLaw::Death { agent } => population.remove(agent, 1),
            ProcLaw::Transition { from, to } => {
                population.remove(from, 1)?;
                population.add(to, 1);
                Ok(())
            }
        }
    }
}

// ── CapacityGate ──────────────────────────────────────────────────────────────

/// A hard cap on a process: while the combined population of `members`
/// has reached `capacity`, the process cannot fire.
///
/// The boundary is exclusive: a combined count of `capacity - 1` still
/// permits the base rate; a count of `capacity` (or beyond) forces the
/// rate to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityGate {
    pub(crate) members: BTreeSet<AgentId>,
    pub(crate) capacity: u64,
}

impl CapacityGate {
    pub(crate) fn admits(&self, population: &Population) -> bool {
        population.count_all(&self.members) < self.capacity
    }

    /// The gated agent set.
    pub fn members(&self) -> &BTreeSet<AgentId> {
        &self.members
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }
}

// ── AgentProc ─────────────────────────────────────────────────────────────────

/// One agent-based process: a law, a rate constant, an optional capacity
/// gate, and the cached instantaneous rate maintained by the system.
#[derive(Debug, Clone)]
pub struct AgentProc {
    id: ProcId,
    law: ProcLaw,
    rate_const: f64,
    gate: Option<CapacityGate>,
    rate: Rate,
}

impl AgentProc {
    pub(crate) fn new(
        id: ProcId,
        law: ProcLaw,
        rate_const: f64,
        gate: Option<CapacityGate>,
    ) -> AgentProc {
        AgentProc {
            id,
            law,
            rate_const,
            gate,
            rate: Rate::ZERO,
        }
    }

    pub fn id(&self) -> ProcId {
        self.id
    }

    pub fn law(&self) -> ProcLaw {
        self.law
    }

    /// The ungated first-order rate constant.
    pub fn rate_const(&self) -> f64 {
        self.rate_const
    }

    pub fn gate(&self) -> Option<&CapacityGate> {
        self.gate.as_ref()
    }

    /// The cached instantaneous rate, as of the most recent refresh.
    #[inline]
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// The effective rate constant under the current populations — zero
    /// while the capacity gate (if any) is saturated.
    pub(crate) fn effective_rate_const(&self, population: &Population) -> f64 {
        match &self.gate {
            Some(gate) if !gate.admits(population) => 0.0,
            _ => self.rate_const,
        }
    }

    /// Recompute the cached rate from the current populations:
    /// first-order mass action, `k · n(reactant)`.
    pub(crate) fn refresh_rate(&mut self, population: &Population) -> AgentResult<()> {
        let k = self.effective_rate_const(population);
        let count = population.count(self.law.reactant());
        self.rate = Rate::new(k * count as f64)?;
        Ok(())
    }
}
