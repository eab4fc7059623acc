//! Bell curve sampling for steam density.
//!
//! The curve is computed once at startup: `n` evenly spaced x positions across
//! a fixed band around the canvas center, and the normal probability density
//! at each of them. Particles look their density up by index, so a particle
//! near the middle of the band rises faster than one at the edges.

use std::f64::consts::PI;

use crate::config::SteamConfig;

/// Sampled x positions and the normal density at each of them.
#[derive(Debug, Clone, PartialEq)]
pub struct BellCurve {
    x_values: Vec<f32>,
    y_values: Vec<f32>,
}

impl BellCurve {
    /// Sample `count` points across the configured band.
    ///
    /// The mean is `mean(x) + mean_offset` and the standard deviation is
    /// `std(x) / std_divisor`, using the population standard deviation.
    pub fn generate(count: usize, config: &SteamConfig) -> Self {
        let center = f64::from(config.center_x());
        let half = f64::from(config.band_half_width);
        let xs = linspace(center - half, center + half, count);

        let mean = mean(&xs) + f64::from(config.mean_offset);
        let std_dev = population_std(&xs) / f64::from(config.std_divisor);
        let ys: Vec<f64> = xs.iter().map(|&x| normal_pdf(x, mean, std_dev)).collect();

        log::info!("generated bell curve with {} samples", xs.len());

        Self {
            x_values: xs.into_iter().map(|x| x as f32).collect(),
            y_values: ys.into_iter().map(|y| y as f32).collect(),
        }
    }

    /// Build a curve from precomputed arrays.
    ///
    /// # Panics
    ///
    /// Panics if the arrays differ in length.
    pub fn from_values(x_values: Vec<f32>, y_values: Vec<f32>) -> Self {
        assert_eq!(
            x_values.len(),
            y_values.len(),
            "curve arrays must have the same length"
        );
        Self { x_values, y_values }
    }

    /// Horizontal sample positions, in ascending order.
    #[inline]
    pub fn x_values(&self) -> &[f32] {
        &self.x_values
    }

    /// Density at each sample position.
    #[inline]
    pub fn y_values(&self) -> &[f32] {
        &self.y_values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    /// Density for the particle at `index`, wrapping past the end of the table.
    ///
    /// An empty curve has zero density everywhere.
    #[inline]
    pub fn density(&self, index: usize) -> f32 {
        if self.y_values.is_empty() {
            0.0
        } else {
            self.y_values[index % self.y_values.len()]
        }
    }

    /// Tallest density in the table.
    pub fn peak(&self) -> f32 {
        self.y_values.iter().copied().fold(0.0, f32::max)
    }
}

fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            // Pin the endpoint so the band width is exact.
            values[count - 1] = stop;
            values
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Normal probability density. A non-positive deviation has no spread and
/// yields zero rather than a division by zero.
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev <= 0.0 || !std_dev.is_finite() {
        return 0.0;
    }
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp() / (std_dev * (2.0 * PI).sqrt())
}
