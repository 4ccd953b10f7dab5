//! Validated light-curve input type.

use super::error::AnalysisError;

/// A validated time series of stellar brightness measurements.
///
/// Construction guarantees the two columns are non-empty, equal in length,
/// and free of NaN/infinite values, so the detection pipeline can operate
/// without re-checking. Time is expected to be in days and monotonically
/// increasing for period estimates to be meaningful; the constructor does
/// not enforce monotonicity.
#[derive(Debug, Clone, PartialEq)]
pub struct LightCurve {
    time: Vec<f64>,
    flux: Vec<f64>,
}

impl LightCurve {
    /// Build a light curve from parallel time and flux columns.
    ///
    /// # Errors
    /// * [`AnalysisError::EmptyInput`] if either column is empty
    /// * [`AnalysisError::LengthMismatch`] if the columns differ in length
    /// * [`AnalysisError::NonFiniteValue`] if any value is NaN or infinite
    pub fn new(time: Vec<f64>, flux: Vec<f64>) -> Result<Self, AnalysisError> {
        if time.is_empty() || flux.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        if time.len() != flux.len() {
            return Err(AnalysisError::LengthMismatch {
                time_len: time.len(),
                flux_len: flux.len(),
            });
        }
        if let Some(index) = time.iter().position(|v| !v.is_finite()) {
            return Err(AnalysisError::NonFiniteValue {
                column: "time",
                index,
            });
        }
        if let Some(index) = flux.iter().position(|v| !v.is_finite()) {
            return Err(AnalysisError::NonFiniteValue {
                column: "flux",
                index,
            });
        }
        Ok(Self { time, flux })
    }

    /// Build a light curve from borrowed slices, copying the samples.
    pub fn from_slices(time: &[f64], flux: &[f64]) -> Result<Self, AnalysisError> {
        Self::new(time.to_vec(), flux.to_vec())
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn flux(&self) -> &[f64] {
        &self.flux
    }

    /// Number of (time, flux) samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Always false for a constructed curve; kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}
