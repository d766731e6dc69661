// src/sim.rs
//! Batch simulation of GBM price paths.
//!
//! # Algorithm
//!
//! Allocate a dense `paths × steps` matrix, then fill it row by row: column 0
//! of every row is the initial price, and each subsequent cell applies the
//! exact GBM update
//! ```text
//! S_{s} = S_{s-1} * exp((μ - σ²/2)dt + σ√dt * Z)
//! ```
//! with `dt = horizon / steps` and one fresh N(0,1) draw per cell.
//!
//! # Reproducibility and Parallelism
//!
//! Rows fill in parallel across the path dimension. Each path draws from its
//! own stream (`rng::path_stream(seed, path)`), consumed in step order, so a
//! fixed seed yields a bit-identical matrix for any thread count. Steps
//! within a path are sequential; each cell depends on the previous one.
//!
//! The simulator holds no state between calls: the configuration is read-only
//! during a run and the caller owns the returned matrix exclusively.

use crate::error::{validation::*, SimResult};
use crate::gbm::Gbm;
use crate::paths::PricePaths;
use crate::rng;
use ndarray::parallel::prelude::*;
use ndarray::{Array2, Axis};

/// Parameters for one batch of simulated price paths.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Drift μ, per unit of `horizon` time
    pub drift: f64,
    /// Volatility σ, per square root unit of `horizon` time
    pub volatility: f64,
    /// Total simulated time T
    pub horizon: f64,
    /// Discrete time points per path (including the initial one)
    pub steps: usize,
    /// Independent trajectories to generate
    pub paths: usize,
    /// Starting value of every path
    pub initial_price: f64,
    /// Seed for the per-path random streams
    pub seed: u64,
}

impl SimConfig {
    /// Validate the simulation configuration.
    ///
    /// The recurrence would happily propagate NaN or negative prices without
    /// complaint, so non-finite parameters and non-positive initial prices
    /// are rejected up front rather than surfacing as a garbage matrix.
    pub fn validate(&self) -> SimResult<()> {
        validate_paths(self.paths)?;
        validate_steps(self.steps)?;
        validate_finite("drift", self.drift)?;
        validate_finite("volatility", self.volatility)?;
        validate_non_negative("volatility", self.volatility)?;
        validate_finite("horizon", self.horizon)?;
        validate_positive("horizon", self.horizon)?;
        validate_finite("initial_price", self.initial_price)?;
        validate_positive("initial_price", self.initial_price)?;
        Ok(())
    }

    /// Step size `dt = horizon / steps`.
    pub fn dt(&self) -> f64 {
        self.horizon / self.steps as f64
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            drift: 0.0,
            volatility: 0.2,
            horizon: 1.0,
            steps: 252,
            paths: 30,
            initial_price: 100.0,
            seed: 12345,
        }
    }
}

/// Simulate a batch of independent GBM price paths.
///
/// # Returns
///
/// A [`PricePaths`] matrix with `cfg.paths` rows and `cfg.steps` columns;
/// column 0 of every row equals `cfg.initial_price`.
///
/// # Errors
///
/// Returns `SimError` only for an invalid configuration. Once validated the
/// computation is pure and bounded: `O(paths · steps)`, no I/O.
pub fn simulate(cfg: &SimConfig) -> SimResult<PricePaths> {
    cfg.validate()?;

    let model = Gbm::new(cfg.drift, cfg.volatility);
    let dt = cfg.dt();

    let mut grid = Array2::<f64>::zeros((cfg.paths, cfg.steps));
    grid.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(path, mut row)| {
            let mut stream = rng::path_stream(cfg.seed, path as u64);
            let mut price = cfg.initial_price;
            row[0] = price;
            for step in 1..row.len() {
                let z = rng::standard_normal(&mut stream);
                price = model.exact_step(price, dt, z);
                row[step] = price;
            }
        });

    Ok(PricePaths::new(grid, cfg.horizon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_bad_counts() {
        let cfg = SimConfig {
            paths: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = SimConfig {
            steps: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        for cfg in [
            SimConfig {
                horizon: 0.0,
                ..Default::default()
            },
            SimConfig {
                horizon: -1.0,
                ..Default::default()
            },
            SimConfig {
                horizon: f64::INFINITY,
                ..Default::default()
            },
            SimConfig {
                drift: f64::NAN,
                ..Default::default()
            },
            SimConfig {
                volatility: -0.2,
                ..Default::default()
            },
            SimConfig {
                initial_price: 0.0,
                ..Default::default()
            },
            SimConfig {
                initial_price: -5.0,
                ..Default::default()
            },
        ] {
            assert!(cfg.validate().is_err(), "expected rejection: {:?}", cfg);
        }
    }

    #[test]
    fn test_dt() {
        let cfg = SimConfig {
            horizon: 10.0,
            steps: 40,
            ..Default::default()
        };
        assert_eq!(cfg.dt(), 0.25);
    }

    #[test]
    fn test_single_step_path_is_just_the_initial_price() {
        let cfg = SimConfig {
            steps: 1,
            paths: 4,
            ..Default::default()
        };
        let result = simulate(&cfg).unwrap();
        assert_eq!(result.num_steps(), 1);
        for p in 0..4 {
            assert_eq!(result.path(p)[0], cfg.initial_price);
        }
    }
}
