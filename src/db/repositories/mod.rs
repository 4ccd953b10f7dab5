//! Repository implementations.
//!
//! Only the in-memory `local` backend ships today; the
//! [`AnalysisRepository`](crate::db::repository::AnalysisRepository) trait
//! is the seam for adding a persistent one.

pub mod local;

pub use local::LocalRepository;
