//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::api::{AnalysisInfo, AnalysisRecord};
use crate::services::job_tracker::LogEntry;

/// Request body for submitting a light curve for analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAnalysisRequest {
    /// Name for the upload (file name, target designation, ...).
    pub name: String,
    /// Observation times, in days.
    pub time: Vec<f64>,
    /// Brightness measurements, parallel to `time`.
    pub flux: Vec<f64>,
}

/// Response for analysis submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAnalysisResponse {
    /// Job ID for tracking the async processing.
    pub job_id: String,
    /// Message about the operation.
    pub message: String,
}

/// Job status response for async processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusResponse {
    pub job_id: String,
    pub status: String,
    pub logs: Vec<LogEntry>,
    /// Result if completed (analysis id and summary).
    pub result: Option<serde_json::Value>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository backend status
    pub database: String,
}

/// Analysis list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisListResponse {
    pub analyses: Vec<AnalysisInfo>,
    pub total: usize,
}

/// Full analysis record response.
///
/// `AnalysisRecord` already serializes with the wire field names, so the
/// handler returns it directly; this alias keeps the handler signatures
/// uniform with the other endpoints.
pub type AnalysisResponse = AnalysisRecord;
