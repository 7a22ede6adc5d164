//! `AgentSystem` — a system of coupled agent-based processes, and its
//! builder.
//!
//! The builder registers agents (with initial counts), processes and
//! dependency links, validates everything once, and computes every initial
//! rate — a built system never exposes an uninitialized rate.  After that
//! the system mutates only through the engine's `update_state`, which lands
//! in [`AgentSystem::apply_event`]: apply the fired process's population
//! delta, then refresh the rate of the fired process and of each dependent.

use stoch_core::{AgentId, ProcId, Rate};
use stoch_engine::{EngineError, EngineResult, Event, System, SystemCore};

use crate::error::{AgentError, AgentResult};
use crate::population::Population;
use crate::proc::{AgentProc, CapacityGate, ProcLaw};

// ── AgentSystem ───────────────────────────────────────────────────────────────

/// A system of stochastic processes over populations of discrete agents.
///
/// Construct with [`AgentSystemBuilder`]; drive with any `stoch-engine`
/// algorithm.
pub struct AgentSystem {
    core: SystemCore,
    labels: Vec<String>,
    population: Population,
    procs: Vec<AgentProc>,
}

impl AgentSystem {
    /// The number of agent species.
    pub fn agent_count(&self) -> usize {
        self.labels.len()
    }

    /// The display label given to `agent` at registration.
    pub fn label(&self, agent: AgentId) -> &str {
        &self.labels[agent.index()]
    }

    /// The current number of instances of `agent`.
    pub fn count(&self, agent: AgentId) -> u64 {
        self.population.count(agent)
    }

    /// The current populations, read-only.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// The process registered under `proc`.
    pub fn proc(&self, proc: ProcId) -> &AgentProc {
        &self.procs[proc.index()]
    }
}

impl System for AgentSystem {
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
        let fired = event.proc();

        let law = self.procs[fired.index()].law();
        law.apply(&mut self.population).map_err(EngineError::system)?;

        self.procs[fired.index()]
            .refresh_rate(&self.population)
            .map_err(EngineError::system)?;

        for &dependent in self.core.dependents(fired) {
            self.procs[dependent.index()]
                .refresh_rate(&self.population)
                .map_err(EngineError::system)?;
        }
        Ok(())
    }
}

// ── AgentSystemBuilder ────────────────────────────────────────────────────────

/// Builder for [`AgentSystem`].
///
/// # Example
///
/// ```rust,ignore
/// let mut builder = AgentSystemBuilder::new();
/// let a = builder.agent("A", 1000);
/// let b = builder.agent("B", 2000);
/// let birth = builder.process(ProcLaw::Birth { parent: a, child: a }, 1.0)?;
/// let death = builder.process(ProcLaw::Death { agent: b }, 2.0)?;
/// builder.link(birth, death);
/// let system = builder.build()?;
/// ```
#[derive(Default)]
pub struct AgentSystemBuilder {
    labels: Vec<String>,
    counts: Vec<u64>,
    procs: Vec<(ProcLaw, f64, Option<CapacityGate>)>,
    links: Vec<(ProcId, ProcId)>,
}

impl AgentSystemBuilder {
    pub fn new() -> AgentSystemBuilder {
        Self::default()
    }

    /// Register an agent species with its initial population and return its
    /// id.  Ids are dense and assigned in registration order.
    pub fn agent(&mut self, label: impl Into<String>, count: u64) -> AgentId {
        let id = AgentId(self.labels.len() as u32);
        self.labels.push(label.into());
        self.counts.push(count);
        id
    }

    /// Register a process and return its id.
    ///
    /// Fails on an unknown agent, a self-transition, or a rate constant
    /// that is negative, NaN, or infinite.
    pub fn process(&mut self, law: ProcLaw, rate_const: f64) -> AgentResult<ProcId> {
        self.push_proc(law, rate_const, None)
    }

    /// Register a capacity-capped process: its rate drops to zero whenever
    /// the combined population of `members` reaches `capacity`.
    ///
    /// Fails as [`process`](Self::process) does, and additionally on a zero
    /// capacity or an unknown gate member.
    pub fn capped_process<I>(
        &mut self,
        law: ProcLaw,
        rate_const: f64,
        members: I,
        capacity: u64,
    ) -> AgentResult<ProcId>
    where
        I: IntoIterator<Item = AgentId>,
    {
        if capacity == 0 {
            return Err(AgentError::ZeroCapacity);
        }
        let members: std::collections::BTreeSet<AgentId> = members.into_iter().collect();
        for &member in &members {
            self.require_agent(member)?;
        }
        self.push_proc(law, rate_const, Some(CapacityGate { members, capacity }))
    }

    /// Declare that firing `predecessor` may change the rate of
    /// `successor`.  Endpoints are validated at [`build`](Self::build).
    pub fn link(&mut self, predecessor: ProcId, successor: ProcId) {
        self.links.push((predecessor, successor));
    }

    /// Validate the assembled system, compute every initial rate, and
    /// return it.
    pub fn build(self) -> AgentResult<AgentSystem> {
        let proc_ids = (0..self.procs.len() as u32).map(ProcId);
        let core = SystemCore::new(proc_ids, self.links)?;

        let mut population = Population::new(self.labels.len());
        for (index, &count) in self.counts.iter().enumerate() {
            population.set(AgentId(index as u32), count);
        }

        let mut procs = Vec::with_capacity(self.procs.len());
        for (index, (law, rate_const, gate)) in self.procs.into_iter().enumerate() {
            let mut proc = AgentProc::new(ProcId(index as u32), law, rate_const, gate);
            proc.refresh_rate(&population)?;
            procs.push(proc);
        }

        Ok(AgentSystem {
            core,
            labels: self.labels,
            population,
            procs,
        })
    }

    fn push_proc(
        &mut self,
        law: ProcLaw,
        rate_const: f64,
        gate: Option<CapacityGate>,
    ) -> AgentResult<ProcId> {
        if !rate_const.is_finite() || rate_const < 0.0 {
            return Err(AgentError::InvalidRateConstant(rate_const));
        }
        for agent in law.agents() {
            self.require_agent(agent)?;
        }
        if let ProcLaw::Transition { from, to } = law {
            if from == to {
                return Err(AgentError::SelfTransition(from));
            }
        }

        let id = ProcId(self.procs.len() as u32);
        self.procs.push((law, rate_const, gate));
        Ok(id)
    }

    fn require_agent(&self, agent: AgentId) -> AgentResult<()> {
        if agent.index() >= self.labels.len() {
            return Err(AgentError::UnknownAgent(agent));
        }
        Ok(())
    }
}
