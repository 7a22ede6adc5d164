//! Instantaneous process rates and exponential waiting-time sampling.
//!
//! # Units
//!
//! Rate units are not represented explicitly; applications must use one
//! consistent convention (firings per unit of [`SimTime`]).
//!
//! # Zero rates
//!
//! A zero rate means "cannot fire": sampling a waiting interval yields `+∞`
//! without consuming a random draw, so draw order stays reproducible across
//! systems that differ only in which processes are currently disabled.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::float;
use crate::rng::StochRng;
use crate::time::SimTime;

/// The non-negative instantaneous rate of a stochastic process.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rate(f64);

impl Rate {
    /// A process that cannot fire.
    pub const ZERO: Rate = Rate(0.0);

    /// Create a rate from a floating-point value.
    ///
    /// Values within the comparison tolerance of zero collapse to
    /// [`Rate::ZERO`]; values negative beyond the tolerance (or NaN) fail.
    pub fn new(value: f64) -> CoreResult<Rate> {
        if value.is_nan() || float::is_negative(value) {
            return Err(CoreError::InvalidRate(value));
        }
        if float::is_zero(value) {
            return Ok(Rate::ZERO);
        }
        Ok(Rate(value))
    }

    /// The total over a collection of rates.
    pub fn total<I>(rates: I) -> Rate
    where
        I: IntoIterator<Item = Rate>,
    {
        Rate(rates.into_iter().map(|rate| rate.0).sum())
    }

    /// The raw floating-point value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        float::is_zero(self.0)
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        !self.is_zero()
    }

    /// Sample the (relative) waiting interval until the next occurrence of a
    /// process with this rate.
    ///
    /// Returns `+∞` for a zero rate without consuming a draw.  The interval
    /// may underflow to zero for deviates extremely close to zero; callers
    /// tolerate that (the event-ordering check in the system rejects a
    /// genuinely non-advancing event).
    pub fn sample_interval(self, rng: &mut StochRng) -> f64 {
        if self.is_zero() {
            return f64::INFINITY;
        }
        let u = rng.next_f64();
        -(1.0 - u).ln() / self.0
    }

    /// Sample the (absolute) time of the next occurrence of a process with
    /// this rate, given the time of the previous event.
    pub fn sample_time(self, prev: SimTime, rng: &mut StochRng) -> SimTime {
        if self.is_zero() {
            SimTime::INFINITY
        } else {
            prev.plus(self.sample_interval(rng))
        }
    }
}

impl Eq for Rate {}

impl PartialOrd for Rate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
