//! Flux normalization and noise-level estimation.

use super::error::AnalysisError;

/// A flux series normalized around 1.0, with its noise level.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCurve {
    /// Flux values divided by the raw mean, centered near 1.0.
    pub flux: Vec<f64>,
    /// Arithmetic mean of the raw flux values.
    pub mean: f64,
    /// Standard deviation of the normalized series around 1.0,
    /// used as the noise estimate for event thresholding.
    pub std_dev: f64,
}

/// Normalize a raw flux series by its arithmetic mean.
///
/// `normalized[i] = flux[i] / mean`, and the noise level is
/// `sqrt(mean((normalized[i] - 1)^2))`. Dividing by the mean makes the
/// downstream dip detection invariant under uniform amplitude scaling.
///
/// # Errors
/// [`AnalysisError::ZeroMeanFlux`] if the mean is zero (division would not
/// be defined); empty input is rejected upstream by `LightCurve`.
pub fn normalize(flux: &[f64]) -> Result<NormalizedCurve, AnalysisError> {
    if flux.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let mean = flux.iter().sum::<f64>() / flux.len() as f64;
    if mean.abs() < f64::EPSILON {
        return Err(AnalysisError::ZeroMeanFlux);
    }

    let normalized: Vec<f64> = flux.iter().map(|v| v / mean).collect();
    let variance =
        normalized.iter().map(|v| (v - 1.0) * (v - 1.0)).sum::<f64>() / normalized.len() as f64;

    Ok(NormalizedCurve {
        flux: normalized,
        mean,
        std_dev: variance.sqrt(),
    })
}
