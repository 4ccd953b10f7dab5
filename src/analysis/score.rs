//! Confidence scoring and the final detection decision.
//!
//! A weighted additive model combines the periodicity, signal, and
//! consistency terms into one 0-100 integer. The weights are chosen so no
//! single weak signal alone can push the score past the detection threshold.

use super::metrics::TransitMetrics;
use super::period::PeriodEstimate;

/// Points awarded for fully consistent event spacing.
const PERIOD_CONSISTENCY_WEIGHT: f64 = 30.0;
/// Points awarded when SNR reaches saturation (SNR >= 5).
const SIGNAL_STRENGTH_WEIGHT: f64 = 25.0;
/// Points awarded at the event-count saturation (5 events).
const EVENT_COUNT_WEIGHT: f64 = 20.0;
/// Points awarded for fully consistent event depths.
const DEPTH_CONSISTENCY_WEIGHT: f64 = 15.0;
/// Flat bonus for a physically plausible orbital period.
const PLAUSIBILITY_BONUS: f64 = 10.0;

/// Inclusive plausible-period range, in days.
const MIN_PLAUSIBLE_PERIOD: f64 = 0.5;
const MAX_PLAUSIBLE_PERIOD: f64 = 1000.0;

/// SNR at which the signal-strength term saturates.
const SNR_SATURATION: f64 = 5.0;
/// Event count at which the event-count term saturates.
const EVENT_COUNT_SATURATION: f64 = 5.0;

/// Minimum confidence for a positive detection.
pub const DETECTION_CONFIDENCE_THRESHOLD: u8 = 50;
/// Minimum SNR for a positive detection.
pub const DETECTION_SNR_THRESHOLD: f64 = 2.0;
/// Confidence tier below which a "possible signal" note is emitted.
const POSSIBLE_SIGNAL_THRESHOLD: u8 = 30;

/// Scored outcome: confidence, accept/reject decision, and notes text.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub confidence: u8,
    pub detection: bool,
    pub notes: String,
}

/// Combine the pipeline signals into a confidence score and decision.
pub fn score(period: &PeriodEstimate, metrics: &TransitMetrics, event_count: usize) -> Verdict {
    let mut points = period.consistency * PERIOD_CONSISTENCY_WEIGHT;
    points += (metrics.signal_to_noise / SNR_SATURATION).min(1.0) * SIGNAL_STRENGTH_WEIGHT;
    points += (event_count as f64 / EVENT_COUNT_SATURATION).min(1.0) * EVENT_COUNT_WEIGHT;
    points += metrics.depth_consistency * DEPTH_CONSISTENCY_WEIGHT;
    if (MIN_PLAUSIBLE_PERIOD..=MAX_PLAUSIBLE_PERIOD).contains(&period.period) {
        points += PLAUSIBILITY_BONUS;
    }

    let confidence = points.clamp(0.0, 100.0).round() as u8;
    let detection = confidence >= DETECTION_CONFIDENCE_THRESHOLD
        && event_count >= 2
        && metrics.signal_to_noise >= DETECTION_SNR_THRESHOLD;

    let conclusion = if confidence >= DETECTION_CONFIDENCE_THRESHOLD {
        "Periodic transit signal detected with high confidence."
    } else if confidence >= POSSIBLE_SIGNAL_THRESHOLD {
        "Possible transit signal; requires further investigation."
    } else {
        "No clear transit signal detected."
    };

    let notes = format!(
        "Found {} transit events with {:.0}% period consistency and signal-to-noise ratio {:.1}. {}",
        event_count,
        period.consistency * 100.0,
        metrics.signal_to_noise,
        conclusion
    );

    Verdict {
        confidence,
        detection,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(snr: f64, depth_consistency: f64) -> TransitMetrics {
        TransitMetrics {
            avg_depth: 0.01,
            planet_radius_ratio: 0.1,
            signal_to_noise: snr,
            depth_consistency,
        }
    }

    fn period(value: f64, consistency: f64) -> PeriodEstimate {
        PeriodEstimate {
            period: value,
            consistency,
        }
    }

    #[test]
    fn test_strong_signal_scores_88() {
        // 30 + 25 + 8 + 15 + 10: two events 500 days apart, SNR 20.
        let verdict = score(&period(500.0, 1.0), &metrics(20.0, 1.0), 2);
        assert_eq!(verdict.confidence, 88);
        assert!(verdict.detection);
        assert!(verdict.notes.contains("high confidence"));
        assert!(verdict.notes.contains("100% period consistency"));
    }

    #[test]
    fn test_plausibility_boundaries_are_inclusive() {
        let at_min = score(&period(0.5, 1.0), &metrics(20.0, 1.0), 2);
        let at_max = score(&period(1000.0, 1.0), &metrics(20.0, 1.0), 2);
        let below = score(&period(0.49, 1.0), &metrics(20.0, 1.0), 2);
        let above = score(&period(1000.01, 1.0), &metrics(20.0, 1.0), 2);
        assert_eq!(at_min.confidence, 88);
        assert_eq!(at_max.confidence, 88);
        assert_eq!(below.confidence, 78);
        assert_eq!(above.confidence, 78);
    }

    #[test]
    fn test_snr_term_saturates() {
        let at_saturation = score(&period(3.0, 0.0), &metrics(5.0, 0.0), 0);
        let beyond = score(&period(3.0, 0.0), &metrics(50.0, 0.0), 0);
        assert_eq!(at_saturation.confidence, beyond.confidence);
    }

    #[test]
    fn test_event_count_term_saturates() {
        let at_saturation = score(&period(3.0, 0.0), &metrics(0.0, 0.0), 5);
        let beyond = score(&period(3.0, 0.0), &metrics(0.0, 0.0), 50);
        assert_eq!(at_saturation.confidence, 30); // 20 + 10 plausibility
        assert_eq!(beyond.confidence, 30);
    }

    #[test]
    fn test_low_snr_blocks_detection_despite_high_confidence() {
        // All terms except signal strength maxed: 30 + 5 + 20 + 15 + 10 = 80,
        // but SNR 1.0 is below the detection floor.
        let verdict = score(&period(3.0, 1.0), &metrics(1.0, 1.0), 5);
        assert!(verdict.confidence >= DETECTION_CONFIDENCE_THRESHOLD);
        assert!(!verdict.detection);
    }

    #[test]
    fn test_possible_signal_tier() {
        // 30 points lands in the "possible" tier: period consistency 0.5
        // (15) + plausibility (10) + one event (4) + snr 0.2 (1).
        let verdict = score(&period(3.0, 0.5), &metrics(0.2, 0.0), 1);
        assert_eq!(verdict.confidence, 30);
        assert!(!verdict.detection);
        assert!(verdict.notes.contains("requires further investigation"));
    }

    #[test]
    fn test_no_signal_tier() {
        let verdict = score(&period(0.2, 0.0), &metrics(0.0, 0.0), 0);
        assert_eq!(verdict.confidence, 0);
        assert!(!verdict.detection);
        assert!(verdict.notes.contains("No clear transit signal"));
    }
}
