//! Deterministic random number source.
//!
//! # Determinism strategy
//!
//! A simulation draws from exactly one `StochRng`, created from an explicit
//! seed.  Given a fixed seed and a fixed order of operations, every run
//! produces identical event sequences — reproducibility is part of the engine
//! contract, so nothing in the `stoch-*` crates ever touches `thread_rng`.
//!
//! Independent simulations running in parallel derive their generators via
//! [`StochRng::child`], which mixes a stream offset with the 64-bit
//! fractional golden-ratio constant to spread consecutive offsets uniformly
//! across the seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Deterministic uniform random source for a single simulation.
///
/// The type is `Send` but intentionally not `Sync`: generator state must
/// never be shared between threads.  Two concurrent simulations each hold
/// their own `StochRng`.
pub struct StochRng(SmallRng);

impl StochRng {
    /// Seed deterministically from an explicit seed value.
    pub fn new(seed: u64) -> Self {
        StochRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent child generator — useful for seeding a second
    /// simulation (or a client-side sampler) deterministically from one root
    /// seed.
    pub fn child(&mut self, offset: u64) -> StochRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        StochRng(SmallRng::seed_from_u64(child_seed))
    }

    /// A uniform deviate in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.0.r#gen()
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}
