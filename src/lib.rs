//! # gbm-sim: Equity Price-Path Simulation
//!
//! A Rust library for simulating synthetic equity price trajectories under
//! Geometric Brownian Motion, with the surrounding market-data bookkeeping:
//! drift/volatility estimation from historical closes, earnings-window
//! derivation, and plot-ready series export.
//!
//! ## Key Features
//!
//! - **Exact GBM stepping**: closed-form log-space update, stable and
//!   unbiased for any step size (no Euler discretization error)
//! - **Reproducible batches**: per-path seeded random streams, bit-identical
//!   results for a fixed seed at any thread count
//! - **Parallel fill**: paths simulate concurrently with Rayon
//! - **Parameter estimation**: log-return based μ/σ fitting with a
//!   Jarque-Bera normality diagnostic
//! - **Earnings bookkeeping**: past-announcement filtering and
//!   inter-announcement windows over provider-supplied dates
//!
//! ## Quick Start
//!
//! ```rust
//! use gbm_sim::{simulate, SimConfig};
//!
//! let cfg = SimConfig {
//!     drift: 0.05,      // mu
//!     volatility: 0.2,  // sigma
//!     horizon: 1.0,     // one year
//!     steps: 252,       // daily resolution
//!     paths: 100,
//!     initial_price: 100.0,
//!     seed: 42,
//! };
//!
//! let paths = simulate(&cfg).expect("Valid configuration");
//! assert_eq!((paths.num_paths(), paths.num_steps()), (100, 252));
//!
//! // One (t, price) series per path, for whatever does the plotting.
//! let series = paths.series();
//! assert_eq!(series.len(), 100);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Each path applies the exact solution of the GBM SDE
//! `dS_t = μ S_t dt + σ S_t dW_t` step by step:
//! ```text
//! S_{t+dt} = S_t * exp((μ - σ²/2)dt + σ√dt * Z),  Z ~ N(0,1)
//! ```
//! Estimation inverts the same relationship on observed log returns.

// Module declarations
pub mod error;
pub mod rng;
pub mod gbm;
pub mod sim;
pub mod paths;
pub mod estimate;
pub mod history;
pub mod earnings;
pub mod output;

// Re-export commonly used types for convenience
pub use error::{SimError, SimResult};
pub use paths::PricePaths;
pub use sim::{simulate, SimConfig};
