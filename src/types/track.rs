use chrono::{DateTime, Utc};

/// A single recorded position, flattened out of the gpx track structure.
/// Points without a timestamp never make it this far.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub time: DateTime<Utc>,
}
