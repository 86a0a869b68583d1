use tracing::info;

use crate::config::Config;
use crate::error::{Stage, StageContext, StageError};
use crate::geocode::reverse_geocode_points;
use crate::import::gpx::{load_track, TrackPoints};
use crate::report::write_places;
use crate::sample::sample_by_interval;

/// Runs the whole pipeline: parse the track, flatten and sort its points,
/// sample them at the configured interval, reverse geocode the samples and
/// write the deduplicated places.
pub async fn run(config: &Config) -> Result<(), StageError> {
    let gpx_data = load_track(&config.input_path).in_stage(Stage::LoadTrack)?;
    let points = gpx_data.track_points().in_stage(Stage::ExtractPoints)?;
    info!("total points: {}", points.len());

    let sampled = sample_by_interval(&points, config.interval());
    info!("selected points: {}", sampled.len());

    let places = reverse_geocode_points(&sampled)
        .await
        .in_stage(Stage::ReverseGeocode)?;
    write_places(&config.output_path, &places).in_stage(Stage::WriteReport)?;

    info!("reverse geocoding completed successfully");
    Ok(())
}
