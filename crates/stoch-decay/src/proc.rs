//! A single first-order decay process.

use std::fmt;

use stoch_core::{ProcId, Rate, SimTime};

use crate::error::{DecayError, DecayResult};

/// A first-order decay process: a population of identical members, each
/// decaying independently at `rate_const`, so the process rate is
/// `population · rate_const`.
#[derive(Debug, Clone)]
pub struct DecayProc {
    id: ProcId,
    init_pop: u64,
    rate_const: f64,
    population: u64,
}

impl DecayProc {
    pub(crate) fn new(id: ProcId, init_pop: u64, rate_const: f64) -> DecayResult<DecayProc> {
        if init_pop == 0 {
            return Err(DecayError::ZeroPopulation);
        }
        if !rate_const.is_finite() || rate_const <= 0.0 {
            return Err(DecayError::InvalidRateConstant(rate_const));
        }
        Ok(DecayProc {
            id,
            init_pop,
            rate_const,
            population: init_pop,
        })
    }

    /// Remove one member.  Fails if the population is already exhausted.
    pub(crate) fn decay(&mut self) -> DecayResult<()> {
        if self.population == 0 {
            return Err(DecayError::Exhausted(self.id));
        }
        self.population -= 1;
        Ok(())
    }

    pub fn id(&self) -> ProcId {
        self.id
    }

    pub fn initial_population(&self) -> u64 {
        self.init_pop
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn rate_const(&self) -> f64 {
        self.rate_const
    }

    /// The current instantaneous rate, `population · rate_const`.
    pub fn rate(&self) -> Rate {
        // Both factors are non-negative and finite.
        Rate::new(self.population as f64 * self.rate_const).unwrap_or(Rate::ZERO)
    }

    /// The analytical expectation for the surviving population at `time`:
    /// `round(n₀ · exp(−k · t))`.
    pub fn expected_population(&self, time: SimTime) -> u64 {
        (self.init_pop as f64 * (-self.rate_const * time.value()).exp()).round() as u64
    }
}

impl fmt::Display for DecayProc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecayProc({}, {})", self.id, self.population)
    }
}
