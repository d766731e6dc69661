// src/gbm.rs
//! Geometric Brownian Motion model.
//!
//! # Mathematical Framework
//!
//! The GBM SDE for an asset price S_t:
//! ```text
//! dS_t = μ S_t dt + σ S_t dW_t
//! ```
//!
//! has the exact solution:
//! ```text
//! S_{t+Δt} = S_t * exp((μ - σ²/2)Δt + σ√Δt * Z)
//! ```
//! where Z ~ N(0,1). Stepping with this closed form (rather than an
//! Euler-Maruyama discretization) is unconditionally stable and unbiased in
//! log space for any step size.

/// Geometric Brownian Motion with constant drift and volatility.
#[derive(Debug, Clone, Copy)]
pub struct Gbm {
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Gbm { mu, sigma }
    }

    /// Advance a price by one step of the exact solution.
    ///
    /// `z` is a standard-normal draw; the caller owns the random stream.
    pub fn exact_step(&self, s_t: f64, dt: f64, z: f64) -> f64 {
        s_t * ((self.mu - 0.5 * self.sigma * self.sigma) * dt + self.sigma * dt.sqrt() * z).exp()
    }

    /// Expected price at time `t`: `E[S_t] = S_0 * exp(μt)`.
    ///
    /// For σ = 0 this is also the realized path value at `t`.
    pub fn expected_price(&self, s0: f64, t: f64) -> f64 {
        s0 * (self.mu * t).exp()
    }
}
