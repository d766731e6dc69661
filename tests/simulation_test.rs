// tests/simulation_test.rs
use gbm_sim::{simulate, SimConfig, SimError};

#[test]
fn test_determinism_under_fixed_seed() {
    let cfg = SimConfig {
        drift: 0.07,
        volatility: 0.25,
        horizon: 1.0,
        steps: 64,
        paths: 16,
        initial_price: 100.0,
        seed: 99,
    };

    let first = simulate(&cfg).expect("Valid configuration");
    let second = simulate(&cfg).expect("Valid configuration");
    assert_eq!(first, second, "same seed must reproduce bit-identical paths");

    let reseeded = simulate(&SimConfig { seed: 100, ..cfg }).expect("Valid configuration");
    assert_ne!(first, reseeded, "a different seed should move the paths");
}

#[test]
fn test_initial_condition() {
    let cfg = SimConfig {
        paths: 12,
        steps: 20,
        initial_price: 87.25,
        ..Default::default()
    };
    let result = simulate(&cfg).expect("Valid configuration");

    for path in 0..result.num_paths() {
        assert_eq!(
            result.path(path)[0],
            87.25,
            "path {} does not start at the initial price",
            path
        );
    }
}

#[test]
fn test_paths_stay_positive_and_finite_across_seeds() {
    for seed in 0..25 {
        let cfg = SimConfig {
            drift: 0.1,
            volatility: 0.4,
            horizon: 2.0,
            steps: 128,
            paths: 8,
            initial_price: 50.0,
            seed,
        };
        let result = simulate(&cfg).expect("Valid configuration");

        for &price in result.matrix().iter() {
            assert!(
                price.is_finite() && price > 0.0,
                "seed {} produced a non-positive or non-finite price: {}",
                seed,
                price
            );
        }
    }
}

#[test]
fn test_zero_volatility_follows_drift_curve() {
    let cfg = SimConfig {
        drift: 0.08,
        volatility: 0.0,
        horizon: 2.0,
        steps: 50,
        paths: 3,
        initial_price: 100.0,
        seed: 7,
    };
    let result = simulate(&cfg).expect("Valid configuration");
    let dt = cfg.dt();

    for path in 0..result.num_paths() {
        for (step, &price) in result.path(path).iter().enumerate() {
            let expected = 100.0 * (0.08 * step as f64 * dt).exp();
            let rel_error = (price - expected).abs() / expected;
            assert!(
                rel_error < 1e-10,
                "path {} step {}: got {}, expected {}",
                path,
                step,
                price,
                expected
            );
        }
    }
}

#[test]
fn test_shape_invariant() {
    for (paths, steps) in [(1, 1), (1, 5), (7, 1), (5, 13)] {
        let cfg = SimConfig {
            paths,
            steps,
            ..Default::default()
        };
        let result = simulate(&cfg).expect("Valid configuration");
        assert_eq!(result.num_paths(), paths);
        assert_eq!(result.num_steps(), steps);
        assert_eq!(result.matrix().dim(), (paths, steps));
    }
}

#[test]
fn test_flat_scenario() {
    // mu = 0 and sigma = 0: the exponent vanishes, so every cell of the
    // 3 x 10 matrix is exactly the initial price.
    let cfg = SimConfig {
        drift: 0.0,
        volatility: 0.0,
        horizon: 10.0,
        steps: 10,
        paths: 3,
        initial_price: 100.0,
        seed: 1,
    };
    let result = simulate(&cfg).expect("Valid configuration");

    assert_eq!(result.matrix().dim(), (3, 10));
    for &price in result.matrix().iter() {
        assert_eq!(price, 100.0);
    }
}

#[test]
fn test_pure_drift_scenario() {
    // dt = 0.5, so the second point is 100 * exp(0.05 * 0.5) = 102.532...
    let cfg = SimConfig {
        drift: 0.05,
        volatility: 0.0,
        horizon: 1.0,
        steps: 2,
        paths: 1,
        initial_price: 100.0,
        seed: 1,
    };
    let result = simulate(&cfg).expect("Valid configuration");

    let row = result.path(0);
    assert_eq!(row[0], 100.0);
    let expected = 100.0 * (0.05_f64 * 0.5).exp();
    assert!(
        (row[1] - expected).abs() < 1e-12,
        "got {}, expected {}",
        row[1],
        expected
    );
    assert!((row[1] - 102.5315).abs() < 1e-3);
}

#[test]
fn test_invalid_configurations_are_rejected() {
    let zero_steps = SimConfig {
        steps: 0,
        ..Default::default()
    };
    assert!(matches!(
        simulate(&zero_steps),
        Err(SimError::InvalidConfiguration { .. })
    ));

    let zero_paths = SimConfig {
        paths: 0,
        ..Default::default()
    };
    assert!(matches!(
        simulate(&zero_paths),
        Err(SimError::InvalidConfiguration { .. })
    ));

    let bad_horizon = SimConfig {
        horizon: -1.0,
        ..Default::default()
    };
    assert!(matches!(
        simulate(&bad_horizon),
        Err(SimError::InvalidParameters { .. })
    ));

    let bad_price = SimConfig {
        initial_price: f64::NAN,
        ..Default::default()
    };
    assert!(simulate(&bad_price).is_err());
}

#[test]
fn test_time_grid_and_series_line_up() {
    let cfg = SimConfig {
        horizon: 5.0,
        steps: 11,
        paths: 2,
        ..Default::default()
    };
    let result = simulate(&cfg).expect("Valid configuration");

    let grid = result.time_grid();
    assert_eq!(grid.len(), 11);
    assert_eq!(grid[0], 0.0);
    assert!((grid[10] - 5.0).abs() < 1e-12);

    let series = result.series();
    assert_eq!(series.len(), 2);
    for (path, points) in series.iter().enumerate() {
        assert_eq!(points.len(), 11);
        assert_eq!(points[0], (0.0, result.path(path)[0]));
    }
}
