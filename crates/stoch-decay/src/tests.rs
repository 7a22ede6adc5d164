//! Unit tests for decay processes and systems.

#[cfg(test)]
mod construction {
    use crate::error::DecayError;
    use crate::system::DecaySystem;

    #[test]
    fn rejects_empty_and_mismatched_inputs() {
        assert!(matches!(DecaySystem::new(&[], &[]), Err(DecayError::Empty)));
        assert!(matches!(
            DecaySystem::new(&[10, 20], &[1.0]),
            Err(DecayError::LengthMismatch { populations: 2, rates: 1 })
        ));
    }

    #[test]
    fn rejects_degenerate_processes() {
        assert!(matches!(
            DecaySystem::new(&[0], &[1.0]),
            Err(DecayError::ZeroPopulation)
        ));
        assert!(matches!(
            DecaySystem::new(&[10], &[0.0]),
            Err(DecayError::InvalidRateConstant(_))
        ));
        assert!(matches!(
            DecaySystem::new(&[10], &[-2.0]),
            Err(DecayError::InvalidRateConstant(_))
        ));
    }
}

#[cfg(test)]
mod system {
    use stoch_core::{ProcId, Rate, SimTime};
    use stoch_engine::{Event, System};

    use crate::system::DecaySystem;

    const POPS: [u64; 3] = [100, 200, 300];
    const RATES: [f64; 3] = [1.0, 2.0, 3.0];

    fn assert_populations(system: &DecaySystem, expected: [u64; 3]) {
        let actual: Vec<u64> = system.iter().map(|proc| proc.population()).collect();
        assert_eq!(actual, expected);
    }

    fn assert_rates(system: &DecaySystem, expected: [f64; 3]) {
        for (proc, &rate) in system.iter().zip(&expected) {
            assert_eq!(proc.rate(), Rate::new(rate).unwrap());
        }
    }

    fn mark(system: &DecaySystem, index: u32, time: f64) -> Event {
        let proc = ProcId(index);
        Event::mark(proc, system.rate_of(proc), SimTime::new(time).unwrap())
    }

    #[test]
    fn each_event_decrements_the_fired_process() {
        let mut system = DecaySystem::new(&POPS, &RATES).unwrap();

        assert_populations(&system, [100, 200, 300]);
        assert_rates(&system, [100.0, 400.0, 900.0]);

        for (index, time) in [(0, 0.1), (1, 0.2), (1, 0.3), (2, 0.4), (2, 0.5), (2, 0.6)] {
            let event = mark(&system, index, time);
            system.update_state(event).unwrap();
        }

        assert_populations(&system, [99, 198, 297]);
        assert_rates(&system, [99.0, 396.0, 891.0]);
        assert_eq!(system.event_count(), 6);
    }

    #[test]
    fn expected_population_follows_the_closed_form() {
        let system = DecaySystem::new(&POPS, &RATES).unwrap();
        let proc = system.proc(ProcId(0));

        assert_eq!(proc.expected_population(SimTime::ZERO), 100);
        // 100 * exp(-1.0 * 0.5) = 60.65 → 61
        assert_eq!(proc.expected_population(SimTime::new(0.5).unwrap()), 61);
    }

    #[test]
    fn exhausted_population_fails_the_update() {
        let mut system = DecaySystem::new(&[1], &[1.0]).unwrap();

        let event = mark(&system, 0, 0.1);
        system.update_state(event).unwrap();
        assert_eq!(system.proc(ProcId(0)).population(), 0);
        assert_eq!(system.rate_of(ProcId(0)), Rate::ZERO);

        let forged = Event::mark(ProcId(0), Rate::ZERO, SimTime::new(0.2).unwrap());
        assert!(system.update_state(forged).is_err());
    }
}
