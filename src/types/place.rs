use google_maps::{AddressComponent, PlaceType};
use serde::{Deserialize, Serialize};

/// The administrative address extracted from one geocoding candidate.
/// Field order is the key order of the output document. Components the
/// geocoder did not return stay empty strings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PlaceRecord {
    pub country: String,
    pub administrative_area_level_1: String,
    pub administrative_area_level_2: String,
    pub locality: String,
    pub sublocality: String,
}

impl PlaceRecord {
    /// Picks the recognized component values out of a candidate's address
    /// components. A component is assigned to the first tier its types
    /// match; a later component of the same tier overwrites an earlier one.
    pub fn from_components(components: &[AddressComponent]) -> Self {
        let mut record = PlaceRecord::default();
        for component in components {
            if component.types.contains(&PlaceType::Country) {
                record.country = component.long_name.clone();
            } else if component
                .types
                .contains(&PlaceType::AdministrativeAreaLevel1)
            {
                record.administrative_area_level_1 = component.long_name.clone();
            } else if component
                .types
                .contains(&PlaceType::AdministrativeAreaLevel2)
            {
                record.administrative_area_level_2 = component.long_name.clone();
            } else if component.types.contains(&PlaceType::Locality) {
                record.locality = component.long_name.clone();
            } else if component.types.contains(&PlaceType::Sublocality) {
                record.sublocality = component.long_name.clone();
            }
        }
        record
    }
}
