//! High-level persistence operations over any repository implementation.
//!
//! These functions are the recommended entry points for application code:
//! they add cross-cutting concerns (checksums, logging) on top of the raw
//! repository trait.

use crate::api::{AnalysisId, AnalysisInfo, AnalysisRecord, AnalysisResult};
use crate::db::checksum::light_curve_checksum;
use crate::db::repository::{AnalysisRepository, RepositoryResult};

/// Check that the repository backend is reachable.
pub async fn health_check(repo: &dyn AnalysisRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Create a `processing` record for an upload, fingerprinting its samples.
pub async fn create_analysis(
    repo: &dyn AnalysisRepository,
    name: &str,
    time: &[f64],
    flux: &[f64],
) -> RepositoryResult<AnalysisId> {
    let checksum = light_curve_checksum(time, flux);
    if let Some(existing) = repo.find_by_checksum(&checksum).await? {
        log::debug!(
            "light curve {} duplicates analysis {}",
            name,
            existing.analysis_id
        );
    }
    repo.create_analysis(name, &checksum, time.len()).await
}

/// Mark an analysis as completed with its result.
pub async fn complete_analysis(
    repo: &dyn AnalysisRepository,
    analysis_id: AnalysisId,
    result: AnalysisResult,
) -> RepositoryResult<()> {
    repo.complete_analysis(analysis_id, result).await
}

/// Mark an analysis as failed with a diagnostic message.
pub async fn fail_analysis(
    repo: &dyn AnalysisRepository,
    analysis_id: AnalysisId,
    error_message: &str,
) -> RepositoryResult<()> {
    repo.fail_analysis(analysis_id, error_message).await
}

/// Fetch one analysis record.
pub async fn get_analysis(
    repo: &dyn AnalysisRepository,
    analysis_id: AnalysisId,
) -> RepositoryResult<AnalysisRecord> {
    repo.get_analysis(analysis_id).await
}

/// List all stored analyses, newest first.
pub async fn list_analyses(repo: &dyn AnalysisRepository) -> RepositoryResult<Vec<AnalysisInfo>> {
    repo.list_analyses().await
}

/// Delete one analysis record; returns how many records were removed.
pub async fn delete_analysis(
    repo: &dyn AnalysisRepository,
    analysis_id: AnalysisId,
) -> RepositoryResult<usize> {
    repo.delete_analysis(analysis_id).await
}

/// Find a previously stored analysis of the same samples, if any.
pub async fn find_duplicate(
    repo: &dyn AnalysisRepository,
    time: &[f64],
    flux: &[f64],
) -> RepositoryResult<Option<AnalysisRecord>> {
    let checksum = light_curve_checksum(time, flux);
    repo.find_by_checksum(&checksum).await
}
