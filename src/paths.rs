// src/paths.rs
//! Owned result of a simulation run: the path matrix plus the time horizon
//! it was generated over.

use ndarray::{Array2, ArrayView1, Axis};

/// Dense matrix of simulated prices, one row per path, one column per step.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePaths {
    grid: Array2<f64>,
    horizon: f64,
}

impl PricePaths {
    pub(crate) fn new(grid: Array2<f64>, horizon: f64) -> Self {
        PricePaths { grid, horizon }
    }

    pub fn num_paths(&self) -> usize {
        self.grid.nrows()
    }

    pub fn num_steps(&self) -> usize {
        self.grid.ncols()
    }

    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    pub fn matrix(&self) -> &Array2<f64> {
        &self.grid
    }

    /// One path's trajectory. Panics if `path >= num_paths()`.
    pub fn path(&self, path: usize) -> ArrayView1<'_, f64> {
        self.grid.row(path)
    }

    /// Final price of every path (the last column).
    pub fn terminal_prices(&self) -> ArrayView1<'_, f64> {
        self.grid.column(self.num_steps() - 1)
    }

    /// `num_steps()` evenly spaced time points spanning `[0, horizon]`.
    ///
    /// This is the x-axis a plotting collaborator pairs with each row; a
    /// single-step grid degenerates to `[0.0]`.
    pub fn time_grid(&self) -> Vec<f64> {
        let n = self.num_steps();
        if n == 1 {
            return vec![0.0];
        }
        let spacing = self.horizon / (n - 1) as f64;
        (0..n).map(|i| i as f64 * spacing).collect()
    }

    /// One `(t, price)` series per path, ready for a line plot.
    pub fn series(&self) -> Vec<Vec<(f64, f64)>> {
        let time_grid = self.time_grid();
        self.grid
            .axis_iter(Axis(0))
            .map(|row| {
                time_grid
                    .iter()
                    .copied()
                    .zip(row.iter().copied())
                    .collect()
            })
            .collect()
    }
}
