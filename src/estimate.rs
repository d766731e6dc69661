// src/estimate.rs
//! Drift and volatility estimation from a historical close series.
//!
//! # Mathematical Framework
//!
//! Under GBM the log returns of a close series sampled at spacing `dt`,
//! ```text
//! r_i = ln(S_i / S_{i-1})
//! ```
//! are i.i.d. normal with mean `(μ - σ²/2)dt` and variance `σ²dt`. Inverting
//! with the sample mean `m` and sample standard deviation `s`:
//! ```text
//! σ̂ = s / √dt
//! μ̂ = m / dt + σ̂²/2
//! ```
//!
//! The model assumes the returns are normal; [`return_normality`] reports a
//! Jarque-Bera check of that assumption so callers can tell when an estimate
//! is being fit to data the model does not describe (earnings jumps, gaps).

use crate::error::{validation::*, SimError, SimResult};
use statrs::distribution::{ChiSquared, ContinuousCDF};
use statrs::statistics::Statistics;

/// GBM parameters fitted to a close series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GbmEstimate {
    /// Estimated drift μ̂, per unit of `dt` time
    pub mu: f64,
    /// Estimated volatility σ̂, per square root unit of `dt` time
    pub sigma: f64,
    /// Number of log returns behind the fit
    pub n_returns: usize,
}

/// Jarque-Bera normality diagnostic on log returns.
#[derive(Debug, Clone, Copy)]
pub struct ReturnNormality {
    pub jarque_bera: f64,
    /// Probability of a JB statistic at least this large under normality
    pub p_value: f64,
    pub skewness: f64,
    pub excess_kurtosis: f64,
}

/// Log returns `ln(S_i / S_{i-1})` of a close series.
///
/// # Errors
///
/// Requires at least 2 observations, all strictly positive and finite.
pub fn log_returns(closes: &[f64]) -> SimResult<Vec<f64>> {
    if closes.len() < 2 {
        return Err(SimError::InvalidConfiguration {
            field: "closes".to_string(),
            reason: "need at least 2 observations to form a return".to_string(),
        });
    }
    for &close in closes {
        validate_finite("close", close)?;
        validate_positive("close", close)?;
    }
    Ok(closes.windows(2).map(|w| (w[1] / w[0]).ln()).collect())
}

/// Fit GBM drift and volatility to a close series sampled at spacing `dt`.
///
/// # Errors
///
/// Requires at least 3 observations (2 returns, for the n-1 variance) and a
/// positive finite `dt`, on top of the [`log_returns`] input checks.
pub fn estimate_gbm(closes: &[f64], dt: f64) -> SimResult<GbmEstimate> {
    validate_finite("dt", dt)?;
    validate_positive("dt", dt)?;

    let returns = log_returns(closes)?;
    if returns.len() < 2 {
        return Err(SimError::InvalidConfiguration {
            field: "closes".to_string(),
            reason: "need at least 3 observations to estimate a variance".to_string(),
        });
    }

    let mean = returns.iter().mean();
    let std_dev = returns.iter().std_dev();

    let sigma = std_dev / dt.sqrt();
    let mu = mean / dt + 0.5 * sigma * sigma;

    Ok(GbmEstimate {
        mu,
        sigma,
        n_returns: returns.len(),
    })
}

/// Jarque-Bera test of log-return normality.
///
/// ```text
/// JB = n/6 * (S² + K²/4)
/// ```
/// with sample skewness S and excess kurtosis K; JB ~ χ²(2) under the null.
///
/// # Errors
///
/// Requires at least 5 observations (4 returns, for the fourth moment) and
/// returns `DegenerateData` when the returns have no spread at all.
pub fn return_normality(closes: &[f64]) -> SimResult<ReturnNormality> {
    let returns = log_returns(closes)?;
    if returns.len() < 4 {
        return Err(SimError::InvalidConfiguration {
            field: "closes".to_string(),
            reason: "need at least 5 observations for a normality check".to_string(),
        });
    }

    let n = returns.len() as f64;
    let mean = returns.iter().mean();
    let m2 = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    let m3 = returns.iter().map(|r| (r - mean).powi(3)).sum::<f64>() / n;
    let m4 = returns.iter().map(|r| (r - mean).powi(4)).sum::<f64>() / n;

    if m2 <= 0.0 {
        return Err(SimError::DegenerateData {
            reason: "log returns have zero variance".to_string(),
        });
    }

    let skewness = m3 / m2.powf(1.5);
    let excess_kurtosis = m4 / (m2 * m2) - 3.0;
    let jarque_bera = n / 6.0 * (skewness.powi(2) + 0.25 * excess_kurtosis.powi(2));

    let chi2 = ChiSquared::new(2.0).map_err(|e| SimError::NumericalInstability {
        method: "jarque_bera".to_string(),
        reason: e.to_string(),
    })?;
    let p_value = 1.0 - chi2.cdf(jarque_bera);

    Ok(ReturnNormality {
        jarque_bera,
        p_value,
        skewness,
        excess_kurtosis,
    })
}
