//! `stoch-agent` — systems of coupled stochastic processes over populations
//! of discrete agents.
//!
//! An *agent* is a species of indistinguishable individuals (a molecule, a
//! cell, an organism); the system tracks how many of each exist.  Processes
//! consume and produce agent instances:
//!
//! | Law                  | Effect on populations            | Rate            |
//! |----------------------|----------------------------------|-----------------|
//! | `Birth { parent, child }` | `child += 1` (parent retained) | `k · n(parent)` |
//! | `Death { agent }`    | `agent -= 1`                     | `k · n(agent)`  |
//! | `Transition { from, to }` | `from -= 1`, `to += 1`      | `k · n(from)`   |
//!
//! A process may additionally carry a capacity gate: its rate constant
//! drops to zero whenever the combined population of a designated agent set
//! reaches the capacity, and recovers as soon as it falls below again.
//!
//! Build a system with [`AgentSystemBuilder`], wire the dependency links
//! between processes that share agents, and hand the finished
//! [`AgentSystem`] to any `stoch-engine` algorithm.

pub mod error;
pub mod population;
pub mod proc;
pub mod system;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{AgentError, AgentResult};
pub use population::Population;
pub use proc::{AgentProc, CapacityGate, ProcLaw};
pub use system::{AgentSystem, AgentSystemBuilder};
