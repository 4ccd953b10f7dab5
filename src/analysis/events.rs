//! Transit-event detection: noise-adaptive local-minimum scan.

use super::normalize::NormalizedCurve;

/// A candidate transit dip found in the normalized flux series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitEvent {
    /// Time of the dip minimum, in days.
    pub time: f64,
    /// Fractional dip below the normalized baseline, `1 - normalized_flux`.
    pub depth: f64,
    /// Sample index of the dip minimum in the input series.
    pub index: usize,
}

/// Scan for transit events: strict local minima below a sigma threshold.
///
/// The threshold is `1 - dip_sigma * std_dev`; a point qualifies only if it
/// is below the threshold and strictly lower than both neighbors, so flat
/// dip bottoms and series endpoints never produce events. The returned
/// events are ordered by increasing index.
pub fn detect_events(curve: &NormalizedCurve, time: &[f64], dip_sigma: f64) -> Vec<TransitEvent> {
    let flux = &curve.flux;
    let threshold = 1.0 - dip_sigma * curve.std_dev;

    let mut events = Vec::new();
    if flux.len() < 3 {
        return events;
    }

    for i in 1..flux.len() - 1 {
        if flux[i] < threshold && flux[i] < flux[i - 1] && flux[i] < flux[i + 1] {
            events.push(TransitEvent {
                time: time[i],
                depth: 1.0 - flux[i],
                index: i,
            });
        }
    }
    events
}
