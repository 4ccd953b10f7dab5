//! Application state for the HTTP server.

use std::sync::Arc;

use crate::analysis::DetectionConfig;
use crate::db::repository::AnalysisRepository;
use crate::services::job_tracker::JobTracker;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for analysis record storage.
    pub repository: Arc<dyn AnalysisRepository>,
    /// Tracker for background analysis jobs.
    pub job_tracker: JobTracker,
    /// Detection parameters applied to every uploaded light curve.
    pub detection: DetectionConfig,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn AnalysisRepository>) -> Self {
        Self::with_detection(repository, DetectionConfig::default())
    }

    /// Create application state with explicit detection parameters.
    pub fn with_detection(
        repository: Arc<dyn AnalysisRepository>,
        detection: DetectionConfig,
    ) -> Self {
        Self {
            repository,
            job_tracker: JobTracker::new(),
            detection,
        }
    }
}
