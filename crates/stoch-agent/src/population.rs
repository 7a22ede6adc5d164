//! Per-agent population counts.
//!
//! Counts are unsigned, so a negative population is unrepresentable; the
//! only guarded operation is removal, which fails rather than underflow.
//! Storage is a flat `Vec` indexed by `AgentId` — ids are allocated densely
//! by the system builder.

use stoch_core::AgentId;

use crate::error::{AgentError, AgentResult};

/// The number count of each agent species in a system.
#[derive(Debug, Clone, Default)]
pub struct Population {
    counts: Vec<u64>,
}

impl Population {
    /// An all-zero population over `agent_count` species.
    pub fn new(agent_count: usize) -> Population {
        Population {
            counts: vec![0; agent_count],
        }
    }

    /// The number of instances of `agent`.
    #[inline]
    pub fn count(&self, agent: AgentId) -> u64 {
        self.counts[agent.index()]
    }

    /// The combined count over a set of agents.
    pub fn count_all<'a, I>(&self, agents: I) -> u64
    where
        I: IntoIterator<Item = &'a AgentId>,
    {
        agents.into_iter().map(|&agent| self.count(agent)).sum()
    }

    /// Add `count` instances of `agent`.
    pub fn add(&mut self, agent: AgentId, count: u64) {
        self.counts[agent.index()] += count;
    }

    /// Remove `count` instances of `agent`.
    ///
    /// Fails if fewer than `count` instances are present — populations can
    /// never go negative.
    pub fn remove(&mut self, agent: AgentId, count: u64) -> AgentResult<()> {
        let have = self.counts[agent.index()];
        if have < count {
            return Err(AgentError::PopulationUnderflow {
                agent,
                have,
                removing: count,
            });
        }
        self.counts[agent.index()] = have - count;
        Ok(())
    }

    /// Assign the population of `agent` outright.
    pub fn set(&mut self, agent: AgentId, count: u64) {
        self.counts[agent.index()] = count;
    }

    /// The number of agent species (not instances).
    pub fn species_count(&self) -> usize {
        self.counts.len()
    }
}
