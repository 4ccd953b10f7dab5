//! End-to-end tests of the background analysis runner: repository record
//! lifecycle plus job tracker state for success and failure paths.

use std::sync::Arc;

use stellar_spectre::analysis::DetectionConfig;
use stellar_spectre::api::AnalysisStatus;
use stellar_spectre::db::repositories::LocalRepository;
use stellar_spectre::db::repository::AnalysisRepository;
use stellar_spectre::services::job_tracker::{JobStatus, JobTracker};
use stellar_spectre::services::process_analysis_async;

fn repo_and_tracker() -> (Arc<dyn AnalysisRepository>, JobTracker) {
    (Arc::new(LocalRepository::new()), JobTracker::new())
}

#[tokio::test]
async fn test_successful_analysis_completes_record_and_job() {
    let (repo, tracker) = repo_and_tracker();
    let job_id = tracker.create_job();

    // Two identical dips 500 days apart: a clean detection.
    let time: Vec<f64> = (0..1001).map(|i| i as f64).collect();
    let mut flux = vec![1.0; 1001];
    flux[250] = 0.99;
    flux[750] = 0.99;

    let analysis_id = process_analysis_async(
        job_id.clone(),
        tracker.clone(),
        repo.clone(),
        "hot-jupiter".to_string(),
        time,
        flux,
        DetectionConfig::default(),
    )
    .await
    .unwrap();

    let record = repo.get_analysis(analysis_id).await.unwrap();
    assert_eq!(record.status, AnalysisStatus::Completed);
    assert_eq!(record.name, "hot-jupiter");
    assert_eq!(record.sample_count, 1001);
    let result = record.result.unwrap();
    assert!(result.detection);
    assert_eq!(result.confidence_score, 88);

    let job = tracker.get_job(&job_id).unwrap();
    assert_eq!(job.status, JobStatus::Completed);
    let summary = job.result.unwrap();
    assert_eq!(summary["analysis_id"], analysis_id.value());
    assert_eq!(summary["detection"], true);
    assert!(!job.logs.is_empty());
}

#[tokio::test]
async fn test_non_detection_still_completes() {
    let (repo, tracker) = repo_and_tracker();
    let job_id = tracker.create_job();

    let time: Vec<f64> = (0..50).map(|i| i as f64).collect();
    let flux = vec![1.0; 50];

    let analysis_id = process_analysis_async(
        job_id.clone(),
        tracker.clone(),
        repo.clone(),
        "quiet-star".to_string(),
        time,
        flux,
        DetectionConfig::default(),
    )
    .await
    .unwrap();

    // A non-detection is a completed analysis, not a failure.
    let record = repo.get_analysis(analysis_id).await.unwrap();
    assert_eq!(record.status, AnalysisStatus::Completed);
    let result = record.result.unwrap();
    assert!(!result.detection);
    assert_eq!(result.confidence_score, 0);
    assert_eq!(
        tracker.get_job(&job_id).unwrap().status,
        JobStatus::Completed
    );
}

#[tokio::test]
async fn test_malformed_input_fails_record_and_job() {
    let (repo, tracker) = repo_and_tracker();
    let job_id = tracker.create_job();

    // Misaligned columns: a hard input error, surfaced as a failed analysis.
    let err = process_analysis_async(
        job_id.clone(),
        tracker.clone(),
        repo.clone(),
        "broken-upload".to_string(),
        vec![0.0, 1.0, 2.0],
        vec![1.0, 1.0],
        DetectionConfig::default(),
    )
    .await
    .unwrap_err();
    assert!(err.contains("misaligned light curve"));

    let job = tracker.get_job(&job_id).unwrap();
    assert_eq!(job.status, JobStatus::Failed);

    // The record was created before validation and must now be failed.
    let infos = repo.list_analyses().await.unwrap();
    assert_eq!(infos.len(), 1);
    let record = repo.get_analysis(infos[0].analysis_id).await.unwrap();
    assert_eq!(record.status, AnalysisStatus::Failed);
    assert!(record
        .error_message
        .unwrap()
        .contains("misaligned light curve"));
}

#[tokio::test]
async fn test_non_finite_input_fails_with_diagnostic() {
    let (repo, tracker) = repo_and_tracker();
    let job_id = tracker.create_job();

    let err = process_analysis_async(
        job_id.clone(),
        tracker.clone(),
        repo,
        "nan-upload".to_string(),
        vec![0.0, 1.0, 2.0],
        vec![1.0, f64::NAN, 1.0],
        DetectionConfig::default(),
    )
    .await
    .unwrap_err();
    assert!(err.contains("non-finite flux value at sample 1"));
    assert_eq!(tracker.get_job(&job_id).unwrap().status, JobStatus::Failed);
}
