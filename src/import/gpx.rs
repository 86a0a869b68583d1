use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{DateTime, Utc};
use color_eyre::eyre::{eyre, Result, WrapErr};
use gpx::Gpx;
use tracing::info;

use crate::types::track::TrackPoint;

/// Reads and parses a gpx file in full.
pub fn load_track(path: &Path) -> Result<Gpx> {
    let file = File::open(path)
        .wrap_err_with(|| format!("failed to open track file {}", path.display()))?;
    let gpx_data = gpx::read(BufReader::new(file))
        .wrap_err_with(|| format!("failed to parse track file {}", path.display()))?;
    info!("number of tracks in gpx: {}", gpx_data.tracks.len());
    Ok(gpx_data)
}

pub trait TrackPoints {
    fn track_points(&self) -> Result<Vec<TrackPoint>>;
}

impl TrackPoints for Gpx {
    /// Flattens every segment of every track into one sequence sorted by
    /// timestamp, ties keeping their traversal order.
    fn track_points(&self) -> Result<Vec<TrackPoint>> {
        let mut points = Vec::new();
        for track in &self.tracks {
            for segment in &track.segments {
                for waypoint in &segment.points {
                    let time = match &waypoint.time {
                        Some(time) => DateTime::<Utc>::from(DateTime::parse_from_rfc3339(
                            &time.format()?,
                        )?),
                        None => {
                            return Err(eyre!(
                                "track point at {}, {} has no timestamp",
                                waypoint.point().y(),
                                waypoint.point().x()
                            ))
                        }
                    };
                    points.push(TrackPoint {
                        latitude: waypoint.point().y(),
                        longitude: waypoint.point().x(),
                        time,
                    });
                }
            }
        }
        points.sort_by_key(|point| point.time);
        Ok(points)
    }
}
