//! High-level business logic built on the detection core and persistence.

pub mod analysis_runner;
pub mod job_tracker;

pub use analysis_runner::process_analysis_async;
pub use job_tracker::{Job, JobStatus, JobTracker, LogEntry, LogLevel};
