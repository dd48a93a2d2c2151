use rand::Rng;

use crate::{Error, Percolation, Result};

////////////////////////////////////////////////////////////////////////////////

const CONFIDENCE_95: f64 = 1.96;

/// Estimates the percolation threshold by running independent trials on
/// fresh `n`-by-`n` grids.
///
/// Each trial opens uniformly random sites (already open sites may be drawn
/// again) until the grid percolates and records the fraction of open sites.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Runs `trials` experiments on `n`-by-`n` grids.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `n` or `trials` is zero.
    pub fn new(n: usize, trials: usize, rng: &mut impl Rng) -> Result<Self> {
        if n == 0 {
            return Err(Error::invalid_argument("grid size must be positive"));
        }
        if trials == 0 {
            return Err(Error::invalid_argument("trial count must be positive"));
        }

        let mut thresholds = Vec::with_capacity(trials);
        for trial in 0..trials {
            let threshold = Self::run_trial(n, rng)?;
            log::debug!("trial #{trial}: threshold {threshold:.6}");
            thresholds.push(threshold);
        }

        let stats = Self { thresholds };
        log::info!(
            "{trials} trials on {n}x{n} grid: mean {:.6}, stddev {:.6}",
            stats.mean(),
            stats.stddev()
        );
        Ok(stats)
    }

    /// Opens random sites of a fresh `n`-by-`n` grid until it percolates and
    /// returns the fraction of sites that ended up open.
    pub fn run_trial(n: usize, rng: &mut impl Rng) -> Result<f64> {
        let mut grid = Percolation::new(n)?;
        while !grid.percolates() {
            grid.open(rng.gen_range(0..n), rng.gen_range(0..n))?;
        }
        Ok(grid.number_of_open_sites() as f64 / (n * n) as f64)
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.trials() as f64
    }

    /// Sample standard deviation of the percolation threshold.
    /// `NaN` for a single trial.
    pub fn stddev(&self) -> f64 {
        let mean = self.mean();
        let squares = self
            .thresholds
            .iter()
            .map(|x| (x - mean) * (x - mean))
            .sum::<f64>();
        (squares / (self.trials() as f64 - 1.0)).sqrt()
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_low(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_high(&self) -> f64 {
        self.mean() + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }
}
