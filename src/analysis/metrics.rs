//! Aggregate transit metrics: depth, radius ratio, duration, SNR.

use super::events::TransitEvent;

/// Fraction of the orbital phase a transit is assumed to occupy.
///
/// Heuristic stand-in for ingress/egress timing; kept as documented
/// approximation because the scoring thresholds are calibrated to it.
pub const DURATION_PHASE_FRACTION: f64 = 0.1;

/// Aggregated per-event statistics for a detected event set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitMetrics {
    /// Mean fractional dip across all events.
    pub avg_depth: f64,
    /// Planet-to-star radius ratio, `sqrt(avg_depth)` under the simple
    /// disk-occultation model where depth ~ (Rp/Rstar)^2.
    pub planet_radius_ratio: f64,
    /// Average depth over the noise level.
    pub signal_to_noise: f64,
    /// Depth agreement across events, `max(0, 1 - variance/avg_depth)`.
    pub depth_consistency: f64,
}

/// Aggregate event depths against the noise estimate.
///
/// Callers guarantee `events` is non-empty; the pipeline short-circuits
/// before this stage otherwise. A zero noise level yields an infinite SNR,
/// which saturates the signal-strength score term downstream.
pub fn aggregate(events: &[TransitEvent], std_dev: f64) -> TransitMetrics {
    let avg_depth = events.iter().map(|e| e.depth).sum::<f64>() / events.len() as f64;
    let depth_variance = events
        .iter()
        .map(|e| (e.depth - avg_depth) * (e.depth - avg_depth))
        .sum::<f64>()
        / events.len() as f64;

    TransitMetrics {
        avg_depth,
        planet_radius_ratio: avg_depth.sqrt(),
        signal_to_noise: avg_depth / std_dev,
        depth_consistency: (1.0 - depth_variance / avg_depth).max(0.0),
    }
}

/// Estimated transit duration for a given orbital period.
pub fn transit_duration(period: f64) -> f64 {
    period * DURATION_PHASE_FRACTION
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(depth: f64) -> TransitEvent {
        TransitEvent {
            time: 0.0,
            depth,
            index: 0,
        }
    }

    #[test]
    fn test_uniform_depths_are_fully_consistent() {
        let metrics = aggregate(&[event(0.01), event(0.01)], 0.0005);
        assert!((metrics.avg_depth - 0.01).abs() < 1e-12);
        assert!((metrics.planet_radius_ratio - 0.1).abs() < 1e-12);
        assert!((metrics.signal_to_noise - 20.0).abs() < 1e-9);
        assert_eq!(metrics.depth_consistency, 1.0);
    }

    #[test]
    fn test_scattered_depths_reduce_consistency() {
        let metrics = aggregate(&[event(0.005), event(0.015)], 0.001);
        // variance = 2.5e-5, avg = 0.01 -> consistency = 1 - 2.5e-3
        assert!((metrics.depth_consistency - 0.9975).abs() < 1e-9);
    }

    #[test]
    fn test_consistency_floors_at_zero() {
        // Degenerate spread (negative flux excursions give depths above 1)
        // pushes variance/avg above 1; the consistency floors at 0 instead
        // of going negative.
        let metrics = aggregate(&[event(0.01), event(5.0)], 0.001);
        assert_eq!(metrics.depth_consistency, 0.0);
    }

    #[test]
    fn test_duration_heuristic() {
        assert!((transit_duration(3.0) - 0.3).abs() < 1e-12);
    }
}
