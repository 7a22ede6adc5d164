//! Directed dependency graph between coupled processes.
//!
//! An edge `p → q` means: when `p` fires, the rate of `q` may change.  The
//! graph is consulted shallowly, one hop per event — no transitive closure
//! is ever computed.  Self-loops are rejected: the process that fired is
//! always handled separately from its dependents, so listing it among them
//! would double-apply its rate refresh.
//!
//! Successor sets are `BTreeSet`s so that dependent iteration order is
//! fixed (ascending `ProcId`).  The next-reaction retimer consumes a random
//! draw for some dependents and not others, which makes iteration order
//! part of the fixed-seed reproducibility contract.

use std::collections::{BTreeSet, HashMap};

use stoch_core::ProcId;

use crate::error::{EngineError, EngineResult};

static NO_DEPENDENTS: BTreeSet<ProcId> = BTreeSet::new();

/// A bidirectional multivalued mapping between predecessor and successor
/// processes.
#[derive(Default, Debug)]
pub struct DepGraph {
    /// `forward[p]` — processes whose rates depend on `p`.
    forward: HashMap<ProcId, BTreeSet<ProcId>>,
    /// `reverse[q]` — processes that determine the rate of `q`.
    reverse: HashMap<ProcId, BTreeSet<ProcId>>,
}

impl DepGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and populate a graph from `(predecessor, successor)` pairs.
    pub fn from_links<I>(links: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = (ProcId, ProcId)>,
    {
        let mut graph = Self::new();
        for (predecessor, successor) in links {
            graph.link(predecessor, successor)?;
        }
        Ok(graph)
    }

    /// Add an edge: the rate of `successor` may change when `predecessor`
    /// fires.  Fails if the two are the same process.
    pub fn link(&mut self, predecessor: ProcId, successor: ProcId) -> EngineResult<()> {
        if predecessor == successor {
            return Err(EngineError::SelfLink(predecessor));
        }
        self.forward.entry(predecessor).or_default().insert(successor);
        self.reverse.entry(successor).or_default().insert(predecessor);
        Ok(())
    }

    /// Remove one edge, if present.
    pub fn unlink(&mut self, predecessor: ProcId, successor: ProcId) {
        if let Some(successors) = self.forward.get_mut(&predecessor) {
            successors.remove(&successor);
        }
        if let Some(predecessors) = self.reverse.get_mut(&successor) {
            predecessors.remove(&predecessor);
        }
    }

    /// Remove every edge touching `proc`, in both directions.
    pub fn remove(&mut self, proc: ProcId) {
        if let Some(successors) = self.forward.remove(&proc) {
            for successor in successors {
                if let Some(predecessors) = self.reverse.get_mut(&successor) {
                    predecessors.remove(&proc);
                }
            }
        }
        if let Some(predecessors) = self.reverse.remove(&proc) {
            for predecessor in predecessors {
                if let Some(successors) = self.forward.get_mut(&predecessor) {
                    successors.remove(&proc);
                }
            }
        }
    }

    /// All direct successors of `proc` — the processes whose rates may
    /// change when it fires.  Never contains `proc` itself.
    pub fn successors(&self, proc: ProcId) -> &BTreeSet<ProcId> {
        self.forward.get(&proc).unwrap_or(&NO_DEPENDENTS)
    }

    /// All direct predecessors of `proc` — the processes that affect its
    /// rate.
    pub fn predecessors(&self, proc: ProcId) -> &BTreeSet<ProcId> {
        self.reverse.get(&proc).unwrap_or(&NO_DEPENDENTS)
    }
}
