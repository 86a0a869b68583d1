use std::collections::HashSet;

use color_eyre::eyre::Result;
use geo_types::Point;
use google_maps::{prelude::*, LatLng};
use tracing::{info, warn};

use crate::clients::get_google_maps;
use crate::types::place::PlaceRecord;
use crate::types::track::TrackPoint;

/// One lookup per call, first (most relevant) candidate only. Language and
/// result types are fixed: administrative place names, in Japanese.
pub async fn reverse_geocode(latlng: LatLng) -> Result<Option<Geocoding>> {
    Ok(get_google_maps()?
        .reverse_geocoding(latlng)
        .with_language(Language::Japanese)
        .with_result_type(PlaceType::AdministrativeAreaLevel1)
        .with_result_type(PlaceType::AdministrativeAreaLevel2)
        .with_result_type(PlaceType::Sublocality)
        .with_result_type(PlaceType::SublocalityLevel2)
        .with_result_type(PlaceType::Locality)
        .with_result_type(PlaceType::AdministrativeAreaLevel3)
        .execute()
        .await?
        .results
        .first()
        .cloned())
}

/// Looks up every sampled point in order and collapses the answers into a
/// unique list of places. A point with no candidates is skipped with a
/// warning; a failed lookup aborts the run.
pub async fn reverse_geocode_points(points: &[TrackPoint]) -> Result<Vec<PlaceRecord>> {
    info!("starting reverse geocoding of {} points", points.len());
    let mut records = Vec::new();
    for point in points {
        let latlng = LatLng::try_from(&Point::new(point.longitude, point.latitude))?;
        match reverse_geocode(latlng).await? {
            Some(geocoding) => {
                records.push(PlaceRecord::from_components(&geocoding.address_components))
            }
            None => warn!(
                "no geocode result found for point: {}, {}",
                point.latitude, point.longitude
            ),
        }
    }
    Ok(dedup_places(records))
}

/// Drops structurally equal repeats, keeping first occurrences in order.
pub fn dedup_places(records: impl IntoIterator<Item = PlaceRecord>) -> Vec<PlaceRecord> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for record in records {
        if seen.insert(record.clone()) {
            unique.push(record);
        }
    }
    unique
}
