//! Orbital-period estimation from event spacing.
//!
//! The spacing between consecutive transit events is clustered with a greedy
//! first-match-within-tolerance scheme. This is deliberately not a full
//! clustering algorithm: a gap joins the first existing cluster whose key is
//! within the relative tolerance, otherwise it opens a new cluster keyed by
//! its own value. Borderline gaps are therefore order-dependent; this is a
//! documented approximation kept for behavioral compatibility with the
//! calibrated scoring thresholds.

use super::events::TransitEvent;

/// Dominant period estimate and the fraction of gaps supporting it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodEstimate {
    /// Most common event-to-event spacing, in days.
    pub period: f64,
    /// Supporting gaps / total valid gaps, in `(0, 1]`.
    pub consistency: f64,
}

/// One gap cluster: the key of its first member and the member count.
#[derive(Debug, Clone, Copy)]
struct GapCluster {
    key: f64,
    count: usize,
}

/// Compute consecutive event gaps, keeping only those above `min_gap`.
///
/// Gaps at or below the floor are treated as duplicate detections of the
/// same transit and discarded. The comparison is strict: a gap of exactly
/// `min_gap` days is excluded.
pub fn valid_gaps(events: &[TransitEvent], min_gap: f64) -> Vec<f64> {
    events
        .windows(2)
        .map(|pair| pair[1].time - pair[0].time)
        .filter(|&gap| gap > min_gap)
        .collect()
}

/// Estimate the dominant period from a set of valid gaps.
///
/// Returns `None` when no gaps are given. Ties between clusters of equal
/// size resolve to the cluster that was opened first.
pub fn estimate_period(gaps: &[f64], tolerance: f64) -> Option<PeriodEstimate> {
    if gaps.is_empty() {
        return None;
    }

    let mut clusters: Vec<GapCluster> = Vec::new();
    for &gap in gaps {
        match clusters
            .iter_mut()
            .find(|c| ((gap - c.key) / c.key).abs() < tolerance)
        {
            Some(cluster) => cluster.count += 1,
            None => clusters.push(GapCluster { key: gap, count: 1 }),
        }
    }

    // First cluster to reach the winning count wins ties.
    let mut best = clusters[0];
    for cluster in &clusters[1..] {
        if cluster.count > best.count {
            best = *cluster;
        }
    }

    Some(PeriodEstimate {
        period: best.key,
        consistency: best.count as f64 / gaps.len() as f64,
    })
}
