//! Discrete simulation events and Gibson–Bruck retiming.
//!
//! An [`Event`] marks an occurrence (or scheduled future occurrence) of a
//! stochastic process.  Events are immutable value types: rescheduling
//! produces a fresh record, which removes aliasing hazards in the indexed
//! event queue — a queue slot is simply overwritten with the replacement.
//!
//! The recorded rate is the process rate *at scheduling time*.  It may
//! differ from the process's current rate, and that distinction is exactly
//! what the next-reaction retiming rule needs: the previously unelapsed
//! waiting time is rescaled by the ratio of the old rate to the new one.

use std::cmp::Ordering;
use std::fmt;

use stoch_core::{ProcId, Rate, SimTime, StochRng};

use crate::error::{EngineError, EngineResult};

/// An occurrence (historical or scheduled) of a stochastic process.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    proc: ProcId,
    rate: Rate,
    time: SimTime,
}

impl Event {
    /// Record an occurrence of `proc` at `time`, snapshotting the supplied
    /// current rate.
    pub fn mark(proc: ProcId, rate: Rate, time: SimTime) -> Event {
        Event { proc, rate, time }
    }

    /// Sample the first occurrence of `proc`: an exponential waiting
    /// interval from the start of the clock, with rate parameter equal to
    /// the process's current rate.  A zero rate schedules the event at
    /// `+∞`.
    pub fn first(proc: ProcId, rate: Rate, rng: &mut StochRng) -> Event {
        Event {
            proc,
            rate,
            time: rate.sample_time(SimTime::ZERO, rng),
        }
    }

    /// Sample the next occurrence after *this* process has just fired:
    /// a fresh exponential interval starting from `self.time`, using the
    /// process's refreshed rate.
    pub fn next(self, current: Rate, rng: &mut StochRng) -> Event {
        Event {
            proc: self.proc,
            rate: current,
            time: current.sample_time(self.time, rng),
        }
    }

    /// Reschedule after a *different* (linked) process fired at
    /// `linked_time`, changing this process's rate to `current`.
    ///
    /// Gibson and Bruck [J. Phys. Chem. A (2000) 104, 1876]: the waiting
    /// time to the next occurrence equals the previously unelapsed waiting
    /// time scaled by the ratio of the old rate to the new one.  The old
    /// rate is the one recorded on this event.
    ///
    /// Fails if the linked event occurs after this one — the caller has
    /// applied events out of order.
    pub fn retime(self, current: Rate, linked_time: SimTime, rng: &mut StochRng) -> EngineResult<Event> {
        if linked_time > self.time {
            return Err(EngineError::LinkedEventAfterScheduled {
                linked: linked_time,
                scheduled: self.time,
            });
        }

        let time = if current.is_zero() {
            // Until the rate changes again, the process will never fire.
            SimTime::INFINITY
        } else if self.rate.is_zero() {
            // The previous schedule was +∞; sample a fresh waiting time
            // from the new rate.
            current.sample_time(linked_time, rng)
        } else {
            let ratio = self.rate.value() / current.value();
            let unelapsed = self.time.value() - linked_time.value();
            linked_time.plus(ratio * unelapsed)
        };

        Ok(Event {
            proc: self.proc,
            rate: current,
            time,
        })
    }

    /// Reschedule after `last` — the most recent event in the system —
    /// has been applied.  Delegates to [`Event::next`] when `last` fired
    /// this same process, and to [`Event::retime`] otherwise.
    pub fn update(self, last: &Event, current: Rate, rng: &mut StochRng) -> EngineResult<Event> {
        if last.proc == self.proc {
            Ok(self.next(current, rng))
        } else {
            self.retime(current, last.time, rng)
        }
    }

    /// The process that fired (or is scheduled to fire).
    #[inline]
    pub fn proc(&self) -> ProcId {
        self.proc
    }

    /// The process rate at the instant this event was scheduled.
    #[inline]
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// The absolute time of the occurrence.
    #[inline]
    pub fn time(&self) -> SimTime {
        self.time
    }
}

/// Natural order: chronological, with ties broken by the scheduling rate
/// (higher rate first) and then by the process index (lower index first).
/// The event queue exposes this order, so the tie-break policy is
/// observable and must not change.
impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .cmp(&other.time)
            .then_with(|| other.rate.cmp(&self.rate))
            .then_with(|| self.proc.cmp(&other.proc))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Event({}, {} @ {})", self.proc, self.rate, self.time)
    }
}
