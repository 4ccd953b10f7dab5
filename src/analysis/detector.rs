//! Transit-detection pipeline orchestration.

use serde::{Deserialize, Serialize};

use super::error::AnalysisError;
use super::light_curve::LightCurve;
use super::metrics::{aggregate, transit_duration};
use super::normalize::normalize;
use super::period::{estimate_period, valid_gaps};
use super::score::score;
use super::{detect_events, PeriodEstimate, TransitEvent};
use crate::api::AnalysisResult;

/// Confidence reported when events exist but no valid period gaps survive.
const IRREGULAR_SPACING_CONFIDENCE: u8 = 10;

/// Tunable thresholds for the detection pipeline.
///
/// Defaults match the calibrated values the scoring model assumes; override
/// them only for experimentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Dip threshold in units of the noise level (`1 - dip_sigma * std_dev`).
    pub dip_sigma: f64,
    /// Minimum event spacing in days; smaller gaps are treated as duplicate
    /// detections of one transit.
    pub min_gap_days: f64,
    /// Relative tolerance for gap clustering.
    pub period_tolerance: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            dip_sigma: 3.0,
            min_gap_days: 0.1,
            period_tolerance: 0.1,
        }
    }
}

/// Deterministic transit detector over in-memory light curves.
///
/// The detector is pure: it sources no entropy, performs no I/O, and never
/// mutates its input, so identical inputs always produce identical results.
#[derive(Debug, Clone, Default)]
pub struct TransitDetector {
    config: DetectionConfig,
}

impl TransitDetector {
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Run the full pipeline over a validated light curve.
    ///
    /// # Errors
    /// [`AnalysisError::ZeroMeanFlux`] if the flux cannot be normalized.
    /// Low-signal inputs are not errors; they return non-detection results.
    pub fn analyze(&self, curve: &LightCurve) -> Result<AnalysisResult, AnalysisError> {
        let normalized = normalize(curve.flux())?;
        let events = detect_events(&normalized, curve.time(), self.config.dip_sigma);

        if events.len() < 2 {
            return Ok(AnalysisResult::non_detection(
                0,
                format!(
                    "Insufficient transit events detected ({}); at least 2 are required to \
                     estimate an orbital period.",
                    events.len()
                ),
            ));
        }

        let gaps = valid_gaps(&events, self.config.min_gap_days);
        let metrics = aggregate(&events, normalized.std_dev);

        let Some(period) = estimate_period(&gaps, self.config.period_tolerance) else {
            // Events are real but spaced too closely to define a period;
            // report the depth-derived metrics without period estimates.
            return Ok(AnalysisResult {
                detection: false,
                orbital_period: None,
                transit_depth: Some(metrics.avg_depth),
                planet_radius_ratio: Some(metrics.planet_radius_ratio),
                confidence_score: IRREGULAR_SPACING_CONFIDENCE,
                transit_duration: None,
                signal_to_noise: Some(metrics.signal_to_noise),
                analysis_notes: format!(
                    "Found {} transit events, but they are too close together or too \
                     irregularly spaced to estimate an orbital period.",
                    events.len()
                ),
            });
        };

        let verdict = score(&period, &metrics, events.len());

        Ok(AnalysisResult {
            detection: verdict.detection,
            orbital_period: Some(period.period),
            transit_depth: Some(metrics.avg_depth),
            planet_radius_ratio: Some(metrics.planet_radius_ratio),
            confidence_score: verdict.confidence,
            transit_duration: Some(transit_duration(period.period)),
            signal_to_noise: Some(metrics.signal_to_noise),
            analysis_notes: verdict.notes,
        })
    }

    /// Detected events for a curve, exposed for diagnostics and tests.
    pub fn events(&self, curve: &LightCurve) -> Result<Vec<TransitEvent>, AnalysisError> {
        let normalized = normalize(curve.flux())?;
        Ok(detect_events(&normalized, curve.time(), self.config.dip_sigma))
    }

    /// Period estimate for a curve, if one can be formed.
    pub fn period_estimate(
        &self,
        curve: &LightCurve,
    ) -> Result<Option<PeriodEstimate>, AnalysisError> {
        let events = self.events(curve)?;
        let gaps = valid_gaps(&events, self.config.min_gap_days);
        Ok(estimate_period(&gaps, self.config.period_tolerance))
    }
}

/// Analyze raw time/flux columns with the default configuration.
///
/// Convenience entry point over [`TransitDetector::analyze`]; validates the
/// input and runs the full pipeline.
pub fn analyze_light_curve(time: &[f64], flux: &[f64]) -> Result<AnalysisResult, AnalysisError> {
    let curve = LightCurve::from_slices(time, flux)?;
    TransitDetector::default().analyze(&curve)
}
