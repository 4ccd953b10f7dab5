//! Error types for the transit-detection core.

use thiserror::Error;

/// Errors raised when a light curve cannot be analyzed at all.
///
/// These are hard input errors: the caller must surface them as a failed
/// analysis. Low-signal outcomes (too few events, no valid period gaps) are
/// not errors; they are returned as valid low-confidence results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Time or flux array is empty.
    #[error("empty light curve: at least one (time, flux) sample is required")]
    EmptyInput,

    /// Time and flux arrays have different lengths.
    #[error("misaligned light curve: {time_len} time samples but {flux_len} flux samples")]
    LengthMismatch { time_len: usize, flux_len: usize },

    /// A NaN or infinite value was found in the input.
    #[error("non-finite {column} value at sample {index}")]
    NonFiniteValue {
        /// Which input column held the bad value ("time" or "flux").
        column: &'static str,
        index: usize,
    },

    /// Mean flux is zero, so the series cannot be normalized.
    #[error("mean flux is zero: cannot normalize light curve")]
    ZeroMeanFlux,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_descriptive() {
        assert_eq!(
            AnalysisError::EmptyInput.to_string(),
            "empty light curve: at least one (time, flux) sample is required"
        );
        assert_eq!(
            AnalysisError::LengthMismatch {
                time_len: 3,
                flux_len: 2
            }
            .to_string(),
            "misaligned light curve: 3 time samples but 2 flux samples"
        );
        assert_eq!(
            AnalysisError::NonFiniteValue {
                column: "flux",
                index: 7
            }
            .to_string(),
            "non-finite flux value at sample 7"
        );
        assert_eq!(
            AnalysisError::ZeroMeanFlux.to_string(),
            "mean flux is zero: cannot normalize light curve"
        );
    }
}
