//! Unit tests for ct-model.

#[cfg(test)]
mod constant_tests {
    use ct_core::SimRng;

    use crate::{ConstantSize, PopulationModel};

    #[test]
    fn rate_is_pairs_over_size() {
        let m = ConstantSize::new(2.0);
        assert_eq!(m.rate(2), 0.5);
        assert_eq!(m.rate(4), 3.0);
    }

    #[test]
    fn constrained_delta_stays_in_window() {
        let m = ConstantSize::new(1.0);
        let mut rng = SimRng::new(11);
        for lineages in 2..8 {
            for _ in 0..500 {
                let d = m.constrained_delta(lineages, 5.0, 3.0, &mut rng);
                assert!((0.0..=2.0).contains(&d), "n={lineages} delta={d}");
            }
        }
    }

    #[test]
    fn unconstrained_delta_is_non_negative() {
        let m = ConstantSize::new(0.5);
        let mut rng = SimRng::new(12);
        for _ in 0..1_000 {
            assert!(m.unconstrained_delta(3, 10.0, &mut rng) >= 0.0);
        }
    }

    #[test]
    fn zero_size_is_degenerate() {
        let m = ConstantSize::new(1e-12);
        let mut rng = SimRng::new(13);
        assert!(m.unconstrained_delta(5, 4.0, &mut rng).is_infinite());
        assert_eq!(m.constrained_delta(5, 4.0, 1.5, &mut rng), 2.5);
    }

    #[test]
    fn huge_size_never_fires_unconstrained() {
        let m = ConstantSize::new(1e15);
        let mut rng = SimRng::new(14);
        assert!(m.unconstrained_delta(2, 1.0, &mut rng).is_infinite());
    }
}

#[cfg(test)]
mod growth_tests {
    use ct_core::SimRng;

    use crate::{ConstantSize, ExponentialGrowth, PopulationModel};

    #[test]
    fn inverse_hazard_inverts_cumulative_hazard() {
        for &r in &[-0.3, 0.2, 1.5] {
            let m = ExponentialGrowth::new(4.0, r);
            for &s in &[0.0, 0.1, 1.0, 2.5] {
                let h = m.cumulative_hazard(3, s);
                let back = m.inverse_hazard(3, h);
                assert!((back - s).abs() < 1e-9, "r={r} s={s} back={back}");
            }
        }
    }

    #[test]
    fn shrinking_population_can_fail_to_coalesce() {
        // Total hazard is k/(|r|·S0) = 1/(1·1) = 1; anything past it never fires.
        let m = ExponentialGrowth::new(1.0, -1.0);
        assert!(m.inverse_hazard(2, 2.0).is_infinite());
        assert!(m.unconstrained_from_uniform(2, 0.95).is_infinite());
        assert!(m.unconstrained_from_uniform(2, 0.1).is_finite());
    }

    #[test]
    fn constrained_draws_stay_in_window() {
        let mut rng = SimRng::new(21);
        for &r in &[-2.0, -0.1, 0.1, 3.0] {
            let m = ExponentialGrowth::new(2.0, r);
            for _ in 0..500 {
                let d = m.constrained_delta(4, 10.0, 7.0, &mut rng);
                assert!((0.0..=3.0).contains(&d), "r={r} delta={d}");
            }
        }
    }

    #[test]
    fn constrained_extremes() {
        let m = ExponentialGrowth::new(1.0, 0.5);
        assert_eq!(m.constrained_from_uniform(3, 0.0, 2.0), 0.0);
        let top = m.constrained_from_uniform(3, 1.0 - 1e-15, 2.0);
        assert!(top <= 2.0 && top > 1.9, "top={top}");
    }

    #[test]
    fn zero_initial_size_coalesces_instantly() {
        let m = ExponentialGrowth::new(0.0, 0.7);
        let mut rng = SimRng::new(1);
        assert_eq!(m.unconstrained_delta(3, 5.0, &mut rng), 0.0);
        assert_eq!(m.constrained_delta(3, 5.0, 1.0, &mut rng), 0.0);
    }

    #[test]
    fn zero_growth_matches_constant_size() {
        let growth = ExponentialGrowth::new(2.0, 0.0);
        let constant = ConstantSize::new(2.0);

        let mut a = SimRng::new(77);
        let mut b = SimRng::new(77);
        for _ in 0..20 {
            assert_eq!(
                growth.unconstrained_delta(3, 9.0, &mut a),
                constant.unconstrained_delta(3, 9.0, &mut b),
            );
            assert_eq!(
                growth.constrained_delta(3, 9.0, 4.0, &mut a),
                constant.constrained_delta(3, 9.0, 4.0, &mut b),
            );
        }
    }

    #[test]
    fn growth_speeds_up_coalescence_backward() {
        // Positive r: population is smaller in the past, so the median
        // waiting time is shorter than under constant size.
        let growth = ExponentialGrowth::new(1.0, 2.0);
        let constant = ConstantSize::new(1.0);
        let u = 0.5;
        let constant_median = -(1.0_f64 - u).ln() / constant.rate(2);
        assert!(growth.unconstrained_from_uniform(2, u) < constant_median);
    }
}

#[cfg(test)]
mod bound_tests {
    use ct_core::SimRng;

    use crate::{InfectionBound, PopulationModel, TransmissionBound};

    #[test]
    fn transmission_bound_waits_for_deadline() {
        let mut rng = SimRng::new(0);
        assert!(TransmissionBound.unconstrained_delta(4, 3.0, &mut rng).is_infinite());
        assert_eq!(TransmissionBound.constrained_delta(4, 3.0, 1.0, &mut rng), 2.0);
    }

    #[test]
    fn infection_bound_fires_immediately() {
        let mut rng = SimRng::new(0);
        assert_eq!(InfectionBound.unconstrained_delta(4, 3.0, &mut rng), 0.0);
        assert_eq!(InfectionBound.constrained_delta(2, 3.0, 1.0, &mut rng), 2.0);
    }

    #[test]
    fn bound_models_consume_no_randomness() {
        let mut used = SimRng::new(5);
        let mut fresh = SimRng::new(5);
        TransmissionBound.unconstrained_delta(2, 1.0, &mut used);
        InfectionBound.constrained_delta(2, 1.0, 0.0, &mut used);
        assert_eq!(used.uniform(), fresh.uniform());
    }
}

#[cfg(test)]
mod config_tests {
    use ct_core::SimRng;

    use crate::{ModelConfig, ModelError};

    #[test]
    fn negative_size_rejected() {
        let err = ModelConfig::Constant { size: -1.0 }.validate().unwrap_err();
        assert!(matches!(err, ModelError::InvalidParameter { .. }));
    }

    #[test]
    fn non_finite_growth_rejected() {
        let cfg = ModelConfig::ExpGrowth { initial_size: 1.0, growth_rate: f64::NAN };
        assert!(cfg.build().is_err());
    }

    #[test]
    fn builds_each_variant() {
        let mut rng = SimRng::new(8);
        for cfg in [
            ModelConfig::Constant { size: 1.0 },
            ModelConfig::ExpGrowth { initial_size: 1.0, growth_rate: 0.5 },
            ModelConfig::TransmissionBound,
            ModelConfig::InfectionBound,
        ] {
            let model = cfg.build().unwrap();
            assert_eq!(model.name(), cfg.describe());
            let d = model.constrained_delta(3, 2.0, 1.0, &mut rng);
            assert!((0.0..=1.0).contains(&d));
        }
    }
}
