//! # Stellar Spectre Backend
//!
//! Exoplanet transit detection from stellar light curves.
//!
//! Given a time series of brightness measurements for a star, the engine
//! decides whether it contains a periodic dimming signal consistent with an
//! orbiting planet, estimating orbital period, transit depth,
//! planet-to-star radius ratio, duration, signal-to-noise ratio, and a
//! composite 0-100 confidence score. A REST API (axum) exposes upload,
//! result retrieval, and background-job tracking for the React frontend.
//!
//! ## Architecture
//!
//! - [`analysis`]: the deterministic detection pipeline (pure computation)
//! - [`api`]: result and record types shared across layers
//! - [`db`]: repository pattern for analysis record persistence
//! - [`services`]: background job execution and progress tracking
//! - [`http`]: axum-based HTTP server and request handlers
//! - [`config`]: TOML-backed server and detection settings
//!
//! The detection core is strictly deterministic: identical inputs always
//! produce identical results, and low-signal inputs produce well-defined
//! low-confidence non-detections rather than errors.

pub mod analysis;
pub mod api;
pub mod config;
pub mod db;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
