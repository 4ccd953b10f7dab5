//! Crate-level data model for analysis results and stored records.
//!
//! These types form the contract between the detection core, the persistence
//! layer, and the HTTP API. [`AnalysisResult`] is the serializable output of
//! one detection run; [`AnalysisRecord`] is the persisted envelope around it,
//! tracking the `processing` → `completed`/`failed` lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for a stored analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnalysisId(pub i64);

impl AnalysisId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a stored analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Processing,
    Completed,
    Failed,
}

/// Outcome of one transit-detection run.
///
/// Optional metric fields are populated only when at least two transit events
/// were found; otherwise they are omitted from the JSON serialization
/// entirely rather than serialized as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Whether a periodic transit signal was accepted.
    pub detection: bool,
    /// Estimated orbital period in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbital_period: Option<f64>,
    /// Average fractional brightness decrease during transit (0-1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_depth: Option<f64>,
    /// Planet-to-star radius ratio, `sqrt(transit_depth)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planet_radius_ratio: Option<f64>,
    /// Composite confidence score, 0-100.
    pub confidence_score: u8,
    /// Estimated transit duration in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_duration: Option<f64>,
    /// Ratio of average transit depth to the noise level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_to_noise: Option<f64>,
    /// Human-readable explanation of the outcome. Never empty.
    pub analysis_notes: String,
}

impl AnalysisResult {
    /// A non-detection with no estimated metrics.
    pub fn non_detection(confidence_score: u8, analysis_notes: impl Into<String>) -> Self {
        Self {
            detection: false,
            orbital_period: None,
            transit_depth: None,
            planet_radius_ratio: None,
            confidence_score,
            transit_duration: None,
            signal_to_noise: None,
            analysis_notes: analysis_notes.into(),
        }
    }
}

/// Persisted envelope around an analysis request and its result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub analysis_id: AnalysisId,
    /// User-supplied name for the upload (file name, target star, ...).
    pub name: String,
    /// SHA-256 fingerprint of the raw samples, for deduplication.
    pub checksum: String,
    /// Number of (time, flux) samples submitted.
    pub sample_count: usize,
    pub status: AnalysisStatus,
    /// Present once the analysis completed successfully.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
    /// Present once the analysis failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Lightweight listing entry for stored analyses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInfo {
    pub analysis_id: AnalysisId,
    pub name: String,
    pub status: AnalysisStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_metrics_are_omitted_from_json() {
        let result = AnalysisResult::non_detection(0, "No transit events found");
        let json = serde_json::to_value(&result).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj["detection"], serde_json::json!(false));
        assert_eq!(obj["confidence_score"], serde_json::json!(0));
        assert!(!obj.contains_key("orbital_period"));
        assert!(!obj.contains_key("transit_depth"));
        assert!(!obj.contains_key("planet_radius_ratio"));
        assert!(!obj.contains_key("transit_duration"));
        assert!(!obj.contains_key("signal_to_noise"));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AnalysisStatus::Processing).unwrap(),
            "\"processing\""
        );
        assert_eq!(
            serde_json::to_string(&AnalysisStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(
            serde_json::to_string(&AnalysisStatus::Failed).unwrap(),
            "\"failed\""
        );
    }
}
