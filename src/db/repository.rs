//! Repository trait and error types for analysis persistence.
//!
//! The trait abstracts where analysis records live so storage backends can
//! be swapped without touching the service or HTTP layers. Only the
//! in-memory backend ships today; the trait is the seam for anything else.

use async_trait::async_trait;
use std::fmt;

use crate::api::{AnalysisId, AnalysisInfo, AnalysisRecord, AnalysisResult};

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Structured context for repository errors.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g. "create_analysis").
    pub operation: Option<String>,
    /// The entity ID if applicable.
    pub entity_id: Option<String>,
    /// Additional details about the error.
    pub details: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref id) = self.entity_id {
            parts.push(format!("id={}", id));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Storage backend connection errors.
    #[error("Connection error: {message} {context}")]
    ConnectionError {
        message: String,
        context: ErrorContext,
    },

    /// Requested record was not found.
    #[error("Not found: {message} {context}")]
    NotFound {
        message: String,
        context: ErrorContext,
    },

    /// Data validation failed before or after a storage operation.
    #[error("Data validation error: {message} {context}")]
    ValidationError {
        message: String,
        context: ErrorContext,
    },

    /// Configuration or initialization error.
    #[error("Configuration error: {message} {context}")]
    ConfigurationError {
        message: String,
        context: ErrorContext,
    },

    /// Internal/unexpected errors.
    #[error("Internal error: {message} {context}")]
    InternalError {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::ConnectionError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn not_found_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::NotFound {
            message: message.into(),
            context,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Whether this error maps to a missing-record condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Repository trait for analysis record persistence.
///
/// Records follow a `processing` → `completed`/`failed` lifecycle; the
/// transition methods are one-way and idempotent failures are reported as
/// `NotFound` rather than panicking.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Check that the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Create a new record in `processing` state and return its ID.
    async fn create_analysis(
        &self,
        name: &str,
        checksum: &str,
        sample_count: usize,
    ) -> RepositoryResult<AnalysisId>;

    /// Transition a record to `completed`, attaching its result.
    async fn complete_analysis(
        &self,
        analysis_id: AnalysisId,
        result: AnalysisResult,
    ) -> RepositoryResult<()>;

    /// Transition a record to `failed`, attaching the error message.
    async fn fail_analysis(
        &self,
        analysis_id: AnalysisId,
        error_message: &str,
    ) -> RepositoryResult<()>;

    /// Fetch a full record by ID.
    async fn get_analysis(&self, analysis_id: AnalysisId) -> RepositoryResult<AnalysisRecord>;

    /// List lightweight entries for all stored analyses, newest first.
    async fn list_analyses(&self) -> RepositoryResult<Vec<AnalysisInfo>>;

    /// Delete a record. Returns the number of records removed (0 or 1).
    async fn delete_analysis(&self, analysis_id: AnalysisId) -> RepositoryResult<usize>;

    /// Find a record whose input fingerprint matches `checksum`.
    async fn find_by_checksum(&self, checksum: &str) -> RepositoryResult<Option<AnalysisRecord>>;
}
