use chrono::Duration;
use tracing::warn;

use crate::types::track::TrackPoint;

/// Thins a time-ordered sequence down to points spaced at least `interval`
/// apart. The first point is always retained, and the elapsed-time
/// accumulator resets on every retention, so spacing is measured against
/// the last retained point rather than the last visited one.
pub fn sample_by_interval(points: &[TrackPoint], interval: Duration) -> Vec<TrackPoint> {
    if points.is_empty() {
        warn!("no track points to sample");
        return Vec::new();
    }

    let threshold = interval.num_seconds();
    let mut sampled = vec![points[0].clone()];
    let mut elapsed = 0;
    for pair in points.windows(2) {
        elapsed += (pair[1].time - pair[0].time).num_seconds();
        if elapsed >= threshold {
            sampled.push(pair[1].clone());
            elapsed = 0;
        }
    }

    // Keep the true last point when the tail gap still meets the interval.
    if let (Some(last_point), Some(last_sampled)) = (points.last(), sampled.last()) {
        if (last_point.time - last_sampled.time).num_seconds() >= threshold {
            sampled.push(last_point.clone());
        }
    }

    sampled
}
