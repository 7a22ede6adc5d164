//! decay-demo — smallest runnable example for the stoch simulation engine.
//!
//! Simulates a handful of independent first-order decay processes with the
//! next-reaction algorithm and prints the surviving populations next to the
//! analytical expectation `n₀ · exp(−k·t)`.  Swap the algorithm constructor
//! for `DirectAlgo::new` or `ReferenceAlgo::new` to compare methods; with a
//! fixed seed each algorithm reproduces its own run exactly.

use std::time::Instant;

use anyhow::Result;

use stoch_core::StochRng;
use stoch_decay::DecaySystem;
use stoch_engine::{NextReactionAlgo, StochAlgo, System};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const EVENT_COUNT: u64 = 100_000;

const POPULATIONS: [u64; 5] = [50_000, 50_000, 80_000, 100_000, 120_000];
const RATE_CONSTS: [f64; 5] = [0.5, 1.0, 1.5, 2.0, 3.0];

fn main() -> Result<()> {
    let system = DecaySystem::new(&POPULATIONS, &RATE_CONSTS)?;
    let mut algo = NextReactionAlgo::new(system, StochRng::new(SEED))?;

    let started = Instant::now();
    for _ in 0..EVENT_COUNT {
        algo.advance()?;
    }
    let elapsed = started.elapsed();

    let system = algo.system();
    let end_time = system.last_event_time();

    println!(
        "{EVENT_COUNT} events in {elapsed:.2?} — simulated clock {end_time}"
    );
    println!("{:>6} {:>6} {:>10} {:>10} {:>9}", "proc", "k", "actual", "expected", "error");
    for proc in system.iter() {
        let actual = proc.population();
        let expected = proc.expected_population(end_time);
        let error = actual as f64 / expected as f64 - 1.0;
        println!(
            "{:>6} {:>6.2} {:>10} {:>10} {:>+9.4}",
            proc.id().index(),
            proc.rate_const(),
            actual,
            expected,
            error
        );
    }

    Ok(())
}
