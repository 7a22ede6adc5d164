//! `EventQueue` — indexed binary min-heap of scheduled events.
//!
//! # Why this exists
//!
//! The next-reaction method keeps one scheduled event per process and, after
//! every firing, reschedules the fired process and each of its dependents.
//! A plain binary heap cannot do that: rescheduling requires *finding* the
//! node that holds a given process, and a heap has no order among siblings.
//!
//! `EventQueue` pairs the heap with a locator map `ProcId → slot` that is
//! updated at the same site as every swap, so lookup is O(1) and a rekey
//! (`update`) is one O(log n) sift.  `update` sifts in both directions; at
//! most one direction moves the node, and trying both is cheaper than
//! deciding which.
//!
//! # Invariants
//!
//! - `heap.len()` equals the locator size; every live slot has exactly one
//!   locator entry pointing at it.
//! - The heap property (`parent ≤ child` in [`Event`] order) holds after
//!   every public mutation.

use std::collections::HashMap;
use std::fmt;

use stoch_core::ProcId;

use crate::error::{EngineError, EngineResult};
use crate::event::Event;

/// A min-heap of events, one per process, with O(1) lookup by process.
#[derive(Default)]
pub struct EventQueue {
    heap: Vec<Event>,
    locator: HashMap<ProcId, usize>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with room for `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            locator: HashMap::with_capacity(capacity),
        }
    }

    /// Create a queue holding the given events.
    ///
    /// Fails if two events refer to the same process.
    pub fn from_events<I>(events: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = Event>,
    {
        let events = events.into_iter();
        let mut queue = Self::with_capacity(events.size_hint().0);
        for event in events {
            queue.insert(event)?;
        }
        Ok(queue)
    }

    /// Add a new process and its next event.
    ///
    /// Fails if the queue already contains an event for the process.
    pub fn insert(&mut self, event: Event) -> EngineResult<()> {
        if self.contains(event.proc()) {
            return Err(EngineError::DuplicateProcess(event.proc()));
        }

        let slot = self.heap.len();
        self.heap.push(event);
        self.locator.insert(event.proc(), slot);
        self.sift_up(slot);

        debug_assert!(self.is_ordered());
        Ok(())
    }

    /// The next event to occur in the whole system (the heap root), without
    /// removing it.
    pub fn peek(&self) -> Option<&Event> {
        self.heap.first()
    }

    /// The next event to occur for one given process (not necessarily the
    /// next in the system), without removing it.
    pub fn find(&self, proc: ProcId) -> EngineResult<Event> {
        self.slot_of(proc).map(|slot| self.heap[slot])
    }

    /// Whether the queue holds an event for `proc`.
    pub fn contains(&self, proc: ProcId) -> bool {
        self.locator.contains_key(&proc)
    }

    /// Replace the queued event for `event.proc()` and restore heap order.
    ///
    /// Fails unless the queue already contains an event for that process.
    pub fn update(&mut self, event: Event) -> EngineResult<()> {
        let slot = self.slot_of(event.proc())?;
        self.heap[slot] = event;

        self.sift_up(slot);
        self.sift_down(slot);

        debug_assert!(self.is_ordered());
        Ok(())
    }

    /// Remove the event for `proc` and return it.
    ///
    /// Fails unless the queue contains an event for that process.
    pub fn remove(&mut self, proc: ProcId) -> EngineResult<Event> {
        let slot = self.slot_of(proc)?;
        let last = self.heap.len() - 1;

        self.swap_slots(slot, last);
        let removed = self.heap[last];
        self.heap.truncate(last);
        self.locator.remove(&proc);

        if slot < self.heap.len() {
            // The relocated tail node may violate order in either direction.
            self.sift_down(slot);
            self.sift_up(slot);
        }

        if self.heap.capacity() > 2 * self.heap.len() {
            tracing::debug!(len = self.heap.len(), "compacting event heap storage");
            self.heap.shrink_to_fit();
        }

        debug_assert!(self.is_ordered());
        debug_assert!(!self.contains(proc));
        Ok(removed)
    }

    /// The number of queued events.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether every parent precedes (or equals) both of its children.
    ///
    /// Always true between public calls; provided for unit tests and
    /// consistency checks.
    pub fn is_ordered(&self) -> bool {
        self.first_unordered_slot().is_none()
    }

    /// Erroring counterpart of [`EventQueue::is_ordered`], reporting the
    /// first offending slot.
    pub fn validate_order(&self) -> EngineResult<()> {
        match self.first_unordered_slot() {
            None => Ok(()),
            Some(slot) => Err(EngineError::HeapUnordered(slot)),
        }
    }

    // ── Heap internals ────────────────────────────────────────────────────

    fn slot_of(&self, proc: ProcId) -> EngineResult<usize> {
        self.locator
            .get(&proc)
            .copied()
            .ok_or(EngineError::UnknownProcess(proc))
    }

    fn first_unordered_slot(&self) -> Option<usize> {
        (1..self.heap.len()).find(|&child| self.heap[(child - 1) / 2] > self.heap[child])
    }

    /// Swap two slots, keeping the locator in sync.  Every heap move goes
    /// through here.
    fn swap_slots(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.locator.insert(self.heap[a].proc(), a);
        self.locator.insert(self.heap[b].proc(), b);
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.heap[parent] <= self.heap[child] {
                break;
            }
            self.swap_slots(parent, child);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        loop {
            let left = 2 * parent + 1;
            if left >= self.heap.len() {
                break;
            }
            let right = left + 1;
            let child = if right < self.heap.len() && self.heap[right] < self.heap[left] {
                right
            } else {
                left
            };
            if self.heap[parent] <= self.heap[child] {
                break;
            }
            self.swap_slots(parent, child);
            parent = child;
        }
    }
}

impl fmt::Debug for EventQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.heap.iter()).finish()
    }
}
