//! `stoch-core` — foundational types for the `stoch` simulation crates.
//!
//! This crate is a dependency of every other `stoch-*` crate.  It
//! intentionally has no `stoch-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                               |
//! |-----------|--------------------------------------------------------|
//! | [`ids`]   | `ProcId`, `AgentId`                                    |
//! | [`rate`]  | `Rate` — instantaneous rate with exponential sampling  |
//! | [`time`]  | `SimTime` — absolute simulation time with `INFINITY`   |
//! | [`float`] | Tolerant floating-point comparisons for rates          |
//! | [`rng`]   | `StochRng` — deterministic uniform source              |
//! | [`error`] | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types |

pub mod error;
pub mod float;
pub mod ids;
pub mod rate;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, ProcId};
pub use rate::Rate;
pub use rng::StochRng;
pub use time::SimTime;
