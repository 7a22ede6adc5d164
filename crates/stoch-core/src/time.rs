//! Absolute simulation time.
//!
//! Time is a non-negative real that only moves forward; `INFINITY` is a
//! valid value, used as the scheduled time of a process whose rate is zero
//! (it will never fire until some other event changes its rate).
//!
//! Comparisons are strict: constructors reject NaN, so `f64::total_cmp`
//! gives a genuine total order and `SimTime` can be `Ord`.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// The absolute time at which a stochastic event occurred or will occur.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(f64);

impl SimTime {
    /// The start of the simulation clock.
    pub const ZERO: SimTime = SimTime(0.0);

    /// The end of time — the scheduled "time" of a process that will never
    /// fire at its current rate.
    pub const INFINITY: SimTime = SimTime(f64::INFINITY);

    /// Create a time from a floating-point value.
    ///
    /// Fails if the value is negative or NaN.
    pub fn new(value: f64) -> CoreResult<SimTime> {
        if value.is_nan() || value < 0.0 {
            return Err(CoreError::InvalidTime(value));
        }
        Ok(SimTime(value))
    }

    /// The instant `interval` time units after `self`.
    ///
    /// The interval comes from exponential waiting-time sampling and is
    /// always non-negative (possibly `+∞`).
    #[inline]
    pub fn plus(self, interval: f64) -> SimTime {
        debug_assert!(interval >= 0.0);
        SimTime(self.0 + interval)
    }

    /// The raw floating-point value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}
