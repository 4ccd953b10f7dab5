//! Deterministic transit-detection core.
//!
//! Given parallel `time`/`flux` columns, the pipeline normalizes the flux
//! around 1.0, scans for statistically significant dips, clusters the
//! spacing between dips into a dominant orbital period, and combines the
//! resulting statistics into a 0-100 confidence score with an accept/reject
//! decision.
//!
//! Stage order: normalization → event detection → period clustering →
//! metric aggregation → scoring. The whole pipeline is a pure synchronous
//! computation: no I/O, no shared state, no randomness.
//!
//! ```
//! use stellar_spectre::analysis::analyze_light_curve;
//!
//! let time: Vec<f64> = (0..100).map(|i| i as f64).collect();
//! let flux = vec![1.0; 100];
//! let result = analyze_light_curve(&time, &flux).unwrap();
//! assert!(!result.detection);
//! ```

pub mod detector;
pub mod error;
pub mod events;
pub mod light_curve;
pub mod metrics;
pub mod normalize;
pub mod period;
pub mod score;

pub use detector::{analyze_light_curve, DetectionConfig, TransitDetector};
pub use error::AnalysisError;
pub use events::{detect_events, TransitEvent};
pub use light_curve::LightCurve;
pub use metrics::{TransitMetrics, DURATION_PHASE_FRACTION};
pub use normalize::{normalize, NormalizedCurve};
pub use period::PeriodEstimate;
pub use score::{DETECTION_CONFIDENCE_THRESHOLD, DETECTION_SNR_THRESHOLD};
