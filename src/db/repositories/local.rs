//! In-memory local repository implementation.
//!
//! Stores all analysis records in a HashMap behind an RwLock, giving fast,
//! deterministic, and isolated execution for tests and local development.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::api::{AnalysisId, AnalysisInfo, AnalysisRecord, AnalysisResult, AnalysisStatus};
use crate::db::repository::{
    AnalysisRepository, ErrorContext, RepositoryError, RepositoryResult,
};

/// In-memory analysis repository.
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    records: HashMap<AnalysisId, AnalysisRecord>,
    next_id: i64,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            next_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all records, keeping the health setting.
    pub fn clear(&self) {
        let mut data = self.data.write();
        let healthy = data.is_healthy;
        *data = LocalData {
            is_healthy: healthy,
            ..Default::default()
        };
    }

    /// Number of stored records.
    pub fn record_count(&self) -> usize {
        self.data.read().records.len()
    }

    fn check_health(&self) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection("Repository is not healthy"));
        }
        Ok(())
    }

    fn update_record(
        &self,
        analysis_id: AnalysisId,
        operation: &str,
        apply: impl FnOnce(&mut AnalysisRecord),
    ) -> RepositoryResult<()> {
        let mut data = self.data.write();
        match data.records.get_mut(&analysis_id) {
            Some(record) => {
                apply(record);
                Ok(())
            }
            None => Err(RepositoryError::not_found_with_context(
                format!("Analysis {} not found", analysis_id),
                ErrorContext::new(operation).with_entity_id(analysis_id),
            )),
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn create_analysis(
        &self,
        name: &str,
        checksum: &str,
        sample_count: usize,
    ) -> RepositoryResult<AnalysisId> {
        self.check_health()?;
        let mut data = self.data.write();
        let analysis_id = AnalysisId::new(data.next_id);
        data.next_id += 1;

        data.records.insert(
            analysis_id,
            AnalysisRecord {
                analysis_id,
                name: name.to_string(),
                checksum: checksum.to_string(),
                sample_count,
                status: AnalysisStatus::Processing,
                result: None,
                error_message: None,
                created_at: Utc::now(),
                completed_at: None,
            },
        );
        Ok(analysis_id)
    }

    async fn complete_analysis(
        &self,
        analysis_id: AnalysisId,
        result: AnalysisResult,
    ) -> RepositoryResult<()> {
        self.check_health()?;
        self.update_record(analysis_id, "complete_analysis", |record| {
            record.status = AnalysisStatus::Completed;
            record.result = Some(result);
            record.completed_at = Some(Utc::now());
        })
    }

    async fn fail_analysis(
        &self,
        analysis_id: AnalysisId,
        error_message: &str,
    ) -> RepositoryResult<()> {
        self.check_health()?;
        self.update_record(analysis_id, "fail_analysis", |record| {
            record.status = AnalysisStatus::Failed;
            record.error_message = Some(error_message.to_string());
            record.completed_at = Some(Utc::now());
        })
    }

    async fn get_analysis(&self, analysis_id: AnalysisId) -> RepositoryResult<AnalysisRecord> {
        self.check_health()?;
        let data = self.data.read();
        data.records.get(&analysis_id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Analysis {} not found", analysis_id),
                ErrorContext::new("get_analysis").with_entity_id(analysis_id),
            )
        })
    }

    async fn list_analyses(&self) -> RepositoryResult<Vec<AnalysisInfo>> {
        self.check_health()?;
        let data = self.data.read();
        let mut infos: Vec<AnalysisInfo> = data
            .records
            .values()
            .map(|record| AnalysisInfo {
                analysis_id: record.analysis_id,
                name: record.name.clone(),
                status: record.status,
                created_at: record.created_at,
            })
            .collect();
        // Newest first; ids are monotonic so they double as creation order.
        infos.sort_by(|a, b| b.analysis_id.cmp(&a.analysis_id));
        Ok(infos)
    }

    async fn delete_analysis(&self, analysis_id: AnalysisId) -> RepositoryResult<usize> {
        self.check_health()?;
        let mut data = self.data.write();
        Ok(data.records.remove(&analysis_id).map_or(0, |_| 1))
    }

    async fn find_by_checksum(&self, checksum: &str) -> RepositoryResult<Option<AnalysisRecord>> {
        self.check_health()?;
        let data = self.data.read();
        Ok(data
            .records
            .values()
            .find(|record| record.checksum == checksum)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_starts_in_processing() {
        let repo = LocalRepository::new();
        let id = repo.create_analysis("kepler-7b", "abc123", 100).await.unwrap();
        let record = repo.get_analysis(id).await.unwrap();
        assert_eq!(record.status, AnalysisStatus::Processing);
        assert!(record.result.is_none());
        assert!(record.completed_at.is_none());
    }

    #[tokio::test]
    async fn test_unhealthy_repository_rejects_operations() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);
        assert!(!repo.health_check().await.unwrap());
        let err = repo.create_analysis("x", "y", 1).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ConnectionError { .. }));
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() {
        let repo = LocalRepository::new();
        let a = repo.create_analysis("a", "c1", 1).await.unwrap();
        let b = repo.create_analysis("b", "c2", 1).await.unwrap();
        assert!(b.value() > a.value());
    }
}
