//! `stoch-engine` — exact stochastic simulation of coupled discrete-event
//! processes.
//!
//! A *system* is a finite set of processes, each with an instantaneous
//! non-negative rate, coupled through a dependency graph: when one process
//! fires, the rates of its successors may change.  The engine selects which
//! process fires next and when, advances simulated time, applies the event to
//! the system, and updates its own indices incrementally.
//!
//! # Algorithms
//!
//! | Type                | Method                          | Per-step cost        |
//! |---------------------|---------------------------------|----------------------|
//! | [`ReferenceAlgo`]   | Gillespie direct, no optimization | O(n)               |
//! | [`DirectAlgo`]      | Gillespie direct + rate cache + self-adjusting list | O(deps) amortized |
//! | [`NextReactionAlgo`]| Gibson–Bruck next reaction      | O(deps · log n)      |
//!
//! # Driving a simulation
//!
//! ```rust,ignore
//! let system = MySystem::build(...)?;
//! let mut algo = NextReactionAlgo::new(system, StochRng::new(seed))?;
//! for _ in 0..500_000 {
//!     algo.advance()?;
//! }
//! let system = algo.into_system();
//! ```
//!
//! The engine is single-threaded and non-cooperative: `advance` is a
//! synchronous call, and a caller bounds the run by step count or simulated
//! time.  Two simulations on separate systems with separate [`StochRng`]s
//! share no state and may run on different threads.
//!
//! [`StochRng`]: stoch_core::StochRng

pub mod algo;
pub mod error;
pub mod event;
pub mod graph;
pub mod priority;
pub mod queue;
pub mod rates;
pub mod system;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use algo::{DirectAlgo, NextReactionAlgo, ReferenceAlgo, StochAlgo};
pub use error::{EngineError, EngineResult};
pub use event::Event;
pub use graph::DepGraph;
pub use priority::PriorityList;
pub use queue::EventQueue;
pub use rates::RateManager;
pub use system::{System, SystemCore};
