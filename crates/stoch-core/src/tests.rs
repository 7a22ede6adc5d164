//! Unit tests for stoch-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ProcId};

    #[test]
    fn index_roundtrip() {
        let id = ProcId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(ProcId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(ProcId(0) < ProcId(1));
        assert!(AgentId(100) > AgentId(99));
    }

    #[test]
    fn display() {
        assert_eq!(ProcId(7).to_string(), "ProcId(7)");
        assert_eq!(AgentId(3).to_string(), "AgentId(3)");
    }
}

#[cfg(test)]
mod rate {
    use crate::{Rate, SimTime, StochRng};

    #[test]
    fn rejects_negative_and_nan() {
        assert!(Rate::new(-1.0).is_err());
        assert!(Rate::new(f64::NAN).is_err());
        assert!(Rate::new(0.0).is_ok());
        assert!(Rate::new(2.5).is_ok());
    }

    #[test]
    fn tiny_values_collapse_to_zero() {
        let rate = Rate::new(1e-15).unwrap();
        assert!(rate.is_zero());
        assert_eq!(rate, Rate::ZERO);
    }

    #[test]
    fn ordering() {
        let mut rates = vec![
            Rate::new(3.0).unwrap(),
            Rate::new(4.0).unwrap(),
            Rate::new(1.0).unwrap(),
            Rate::new(2.0).unwrap(),
        ];
        rates.sort();
        let values: Vec<f64> = rates.iter().map(|r| r.value()).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn total() {
        let rates = [1.0, 2.0, 3.0, 4.0].map(|v| Rate::new(v).unwrap());
        assert_eq!(Rate::total(rates).value(), 10.0);
    }

    #[test]
    fn zero_rate_samples_infinity_without_a_draw() {
        let mut rng = StochRng::new(7);
        let before: f64 = {
            let mut probe = StochRng::new(7);
            probe.next_f64()
        };

        assert_eq!(Rate::ZERO.sample_interval(&mut rng), f64::INFINITY);
        assert_eq!(
            Rate::ZERO.sample_time(SimTime::ZERO, &mut rng),
            SimTime::INFINITY
        );

        // The generator is untouched: the next draw matches a fresh clone.
        assert_eq!(rng.next_f64(), before);
    }

    #[test]
    fn sample_interval_moments() {
        // Exp(rate = 2): mean 1/2, median ln(2)/2.
        let rate = Rate::new(2.0).unwrap();
        let mut rng = StochRng::new(20201111);

        let count = 10_000;
        let mut samples: Vec<f64> = (0..count).map(|_| rate.sample_interval(&mut rng)).collect();

        let mean = samples.iter().sum::<f64>() / count as f64;
        samples.sort_by(f64::total_cmp);
        let median = samples[count / 2];

        assert!((mean - 0.5).abs() < 0.015, "mean {mean}");
        assert!((median - 0.5 * 2f64.ln()).abs() < 0.015, "median {median}");
    }

    #[test]
    fn sample_time_advances_from_previous() {
        let rate = Rate::new(1.0).unwrap();
        let mut rng = StochRng::new(1);
        let prev = SimTime::new(5.0).unwrap();
        let next = rate.sample_time(prev, &mut rng);
        assert!(next > prev);
        assert!(next.is_finite());
    }
}

#[cfg(test)]
mod time {
    use crate::SimTime;

    #[test]
    fn rejects_negative_and_nan() {
        assert!(SimTime::new(-0.1).is_err());
        assert!(SimTime::new(f64::NAN).is_err());
        assert!(SimTime::new(0.0).is_ok());
    }

    #[test]
    fn infinity_is_valid_and_greatest() {
        assert!(SimTime::INFINITY > SimTime::new(1e300).unwrap());
        assert!(!SimTime::INFINITY.is_finite());
        assert!(SimTime::ZERO.is_finite());
    }

    #[test]
    fn plus_interval() {
        let t = SimTime::new(1.5).unwrap();
        assert_eq!(t.plus(0.5), SimTime::new(2.0).unwrap());
        assert_eq!(t.plus(f64::INFINITY), SimTime::INFINITY);
    }

    #[test]
    fn ordering_is_strict() {
        let a = SimTime::new(1.0).unwrap();
        let b = SimTime::new(1.0 + 1e-15).unwrap();
        assert!(a < b);
    }
}

#[cfg(test)]
mod float {
    use crate::float::{approx_ge, approx_le, is_negative, is_zero};

    #[test]
    fn approx_comparisons_absorb_roundoff() {
        let total = 0.1 + 0.2; // 0.30000000000000004
        assert!(approx_ge(0.3, total));
        assert!(approx_le(total, 0.3));
        assert!(!approx_ge(0.3 - 1e-6, total));
    }

    #[test]
    fn relative_scaling() {
        // At magnitude 1e6 the tolerance grows proportionally.
        let a = 1.0e6;
        let b = 1.0e6 + 1e-7;
        assert!(approx_ge(a, b));
    }

    #[test]
    fn zero_and_sign_checks() {
        assert!(is_zero(0.0));
        assert!(is_zero(1e-13));
        assert!(!is_zero(1e-9));
        assert!(is_negative(-1e-9));
        assert!(!is_negative(-1e-13));
    }
}

#[cfg(test)]
mod rng {
    use crate::StochRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = StochRng::new(12345);
        let mut r2 = StochRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.next_f64(), r2.next_f64());
        }
    }

    #[test]
    fn uniform_range() {
        let mut rng = StochRng::new(0);
        for _ in 0..1000 {
            let u = rng.next_f64();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = StochRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: f64 = c0.next_f64();
        let b: f64 = c1.next_f64();
        assert_ne!(a, b, "child streams should diverge");
    }
}
