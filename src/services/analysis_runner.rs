//! Async analysis processing service.
//!
//! Runs the detection pipeline for one upload in the background: create the
//! record in `processing` state, validate and analyze the samples off the
//! async runtime, then transition the record to `completed` or `failed`,
//! emitting progress logs along the way.

use std::sync::Arc;

use crate::analysis::{DetectionConfig, LightCurve, TransitDetector};
use crate::api::AnalysisId;
use crate::db::repository::AnalysisRepository;
use crate::db::services as db_services;
use crate::services::job_tracker::{JobTracker, LogLevel};

/// Process an uploaded light curve asynchronously.
///
/// Designed to be spawned as a background task. Input errors from the core
/// are deterministic, so the job is failed without retry and the record is
/// marked `failed` with the error text.
pub async fn process_analysis_async(
    job_id: String,
    tracker: JobTracker,
    repo: Arc<dyn AnalysisRepository>,
    name: String,
    time: Vec<f64>,
    flux: Vec<f64>,
    config: DetectionConfig,
) -> Result<AnalysisId, String> {
    tracker.log(
        &job_id,
        LogLevel::Info,
        format!("Starting analysis of '{}' ({} samples)...", name, time.len()),
    );

    // Step 1: store a processing record so the upload is visible immediately.
    let analysis_id = match db_services::create_analysis(repo.as_ref(), &name, &time, &flux).await {
        Ok(id) => {
            tracker.log(
                &job_id,
                LogLevel::Success,
                format!("Created analysis record (ID: {})", id),
            );
            id
        }
        Err(e) => {
            let msg = format!("Failed to store analysis record: {}", e);
            tracker.fail_job(&job_id, &msg);
            return Err(msg);
        }
    };

    // Step 2: validate and run the detector off the async runtime.
    tracker.log(&job_id, LogLevel::Info, "Running transit detection...");
    let outcome = tokio::task::spawn_blocking(move || {
        let curve = LightCurve::new(time, flux)?;
        TransitDetector::new(config).analyze(&curve)
    })
    .await;

    let result = match outcome {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            let msg = format!("Analysis failed: {}", e);
            if let Err(store_err) =
                db_services::fail_analysis(repo.as_ref(), analysis_id, &msg).await
            {
                tracker.log(
                    &job_id,
                    LogLevel::Warning,
                    format!("Could not record failure: {}", store_err),
                );
            }
            tracker.fail_job(&job_id, &msg);
            return Err(msg);
        }
        Err(e) => {
            let msg = format!("Detection task panic: {}", e);
            let _ = db_services::fail_analysis(repo.as_ref(), analysis_id, &msg).await;
            tracker.fail_job(&job_id, &msg);
            return Err(msg);
        }
    };

    tracker.log(
        &job_id,
        LogLevel::Success,
        format!(
            "Detection finished: confidence {}, detection={}",
            result.confidence_score, result.detection
        ),
    );

    // Step 3: persist the result.
    let summary = serde_json::json!({
        "analysis_id": analysis_id.value(),
        "detection": result.detection,
        "confidence_score": result.confidence_score,
    });
    if let Err(e) = db_services::complete_analysis(repo.as_ref(), analysis_id, result).await {
        let msg = format!("Failed to store analysis result: {}", e);
        tracker.fail_job(&job_id, &msg);
        return Err(msg);
    }

    tracker.log(
        &job_id,
        LogLevel::Success,
        format!("Analysis complete (ID: {})", analysis_id),
    );
    tracker.complete_job(&job_id, Some(summary));

    Ok(analysis_id)
}
