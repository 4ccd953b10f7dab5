//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic. Analysis submission is asynchronous:
//! the handler returns a job id immediately and the detection pipeline runs
//! in a spawned background task.

use axum::{
    extract::{Path, State},
    response::sse::{Event, Sse},
    Json,
};
use futures::stream::Stream;
use std::convert::Infallible;
use std::time::Duration;

use super::dto::{
    AnalysisListResponse, AnalysisResponse, CreateAnalysisRequest, CreateAnalysisResponse,
    HealthResponse, JobStatusResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::AnalysisId;
use crate::db::services as db_services;
use crate::services::job_tracker::JobStatus;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Verify the service is running and the repository is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Analysis CRUD
// =============================================================================

/// GET /v1/analyses
///
/// List all stored analyses, newest first.
pub async fn list_analyses(State(state): State<AppState>) -> HandlerResult<AnalysisListResponse> {
    let analyses = db_services::list_analyses(state.repository.as_ref()).await?;
    let total = analyses.len();

    Ok(Json(AnalysisListResponse { analyses, total }))
}

/// POST /v1/analyses
///
/// Submit a light curve for analysis. Returns a job ID for tracking
/// progress; malformed samples surface as a failed job, never a 500.
pub async fn create_analysis(
    State(state): State<AppState>,
    Json(request): Json<CreateAnalysisRequest>,
) -> Result<(axum::http::StatusCode, Json<CreateAnalysisResponse>), AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::BadRequest("Analysis name must not be empty".to_string()));
    }

    let job_id = state.job_tracker.create_job();
    let response_job_id = job_id.clone();

    let tracker = state.job_tracker.clone();
    let repo = state.repository.clone();
    let detection = state.detection;
    tokio::spawn(async move {
        let _ = crate::services::analysis_runner::process_analysis_async(
            job_id,
            tracker,
            repo,
            request.name,
            request.time,
            request.flux,
            detection,
        )
        .await;
    });

    Ok((
        axum::http::StatusCode::ACCEPTED,
        Json(CreateAnalysisResponse {
            job_id: response_job_id.clone(),
            message: format!(
                "Analysis started. Track progress at /v1/jobs/{}/logs",
                response_job_id
            ),
        }),
    ))
}

/// GET /v1/analyses/{analysis_id}
///
/// Fetch one analysis record, including its result once completed.
pub async fn get_analysis(
    State(state): State<AppState>,
    Path(analysis_id): Path<i64>,
) -> HandlerResult<AnalysisResponse> {
    let record =
        db_services::get_analysis(state.repository.as_ref(), AnalysisId::new(analysis_id)).await?;
    Ok(Json(record))
}

/// DELETE /v1/analyses/{analysis_id}
///
/// Remove a stored analysis record.
pub async fn delete_analysis(
    State(state): State<AppState>,
    Path(analysis_id): Path<i64>,
) -> Result<axum::http::StatusCode, AppError> {
    let deleted =
        db_services::delete_analysis(state.repository.as_ref(), AnalysisId::new(analysis_id))
            .await?;
    if deleted == 0 {
        return Err(AppError::NotFound(format!(
            "Analysis {} not found",
            analysis_id
        )));
    }
    Ok(axum::http::StatusCode::NO_CONTENT)
}

// =============================================================================
// Async Job Management
// =============================================================================

/// GET /v1/jobs/{job_id}
///
/// Get the current status and logs of a background job.
pub async fn get_job_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> HandlerResult<JobStatusResponse> {
    let job = state
        .job_tracker
        .get_job(&job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", job_id)))?;

    Ok(Json(JobStatusResponse {
        job_id: job.job_id,
        status: format!("{:?}", job.status).to_lowercase(),
        logs: job.logs,
        result: job.result,
    }))
}

/// GET /v1/jobs/{job_id}/logs
///
/// Stream job logs via Server-Sent Events (SSE).
pub async fn stream_job_logs(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    if state.job_tracker.get_job(&job_id).is_none() {
        return Err(AppError::NotFound(format!("Job {} not found", job_id)));
    }

    let tracker = state.job_tracker.clone();
    let stream = async_stream::stream! {
        let mut last_log_count = 0;
        loop {
            let logs = tracker.get_logs(&job_id);

            // Send new logs since last check
            for log in logs.iter().skip(last_log_count) {
                let event_data = serde_json::to_string(log).unwrap_or_default();
                yield Ok(Event::default().data(event_data));
            }
            last_log_count = logs.len();

            // Once the job leaves Running, emit a final status event.
            // Serde serialization keeps the status values lowercase
            // ("completed", "failed") on the wire.
            if let Some(job) = tracker.get_job(&job_id) {
                if job.status != JobStatus::Running {
                    let final_event = serde_json::json!({
                        "status": job.status,
                        "result": job.result,
                    });
                    yield Ok(Event::default()
                        .event("complete")
                        .data(serde_json::to_string(&final_event).unwrap_or_default()));
                    break;
                }
            } else {
                break;
            }

            tokio::time::sleep(Duration::from_millis(200)).await;
        }
    };

    Ok(Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(1))
            .text("keep-alive"),
    ))
}
