//! Persistence for analysis records via the repository pattern.
//!
//! Records move through `processing` → `completed`/`failed`; the detection
//! core itself knows nothing about storage and only ever returns a value or
//! a structured error.
//!
//! The module layers:
//! - `services`: high-level functions application code should call
//! - `repository`: the abstract [`AnalysisRepository`] trait and errors
//! - `repositories::local`: in-memory implementation (feature `local-repo`)
//! - `checksum`: light-curve fingerprinting for deduplication

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod checksum;
pub mod repositories;
pub mod repository;
pub mod services;

pub use checksum::light_curve_checksum;
pub use repositories::LocalRepository;
pub use repository::{AnalysisRepository, ErrorContext, RepositoryError, RepositoryResult};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn AnalysisRepository>> = OnceLock::new();

/// Initialize the global repository singleton.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }
    let repo: Arc<dyn AnalysisRepository> = Arc::new(LocalRepository::new());
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn AnalysisRepository>> {
    if REPOSITORY.get().is_none() {
        let _ = init_repository();
    }

    REPOSITORY
        .get()
        .context("Repository not initialized. Call init_repository() first.")
}
