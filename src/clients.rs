use std::sync::OnceLock;

use color_eyre::eyre::{eyre, Result};
use google_maps::GoogleMapsClient;

use crate::config::Config;

pub static GMAPS: OnceLock<GoogleMapsClient> = OnceLock::new();

pub fn init_google_maps(config: &Config) -> Result<()> {
    let google_maps_client = GoogleMapsClient::new(&config.api_key);
    GMAPS
        .set(google_maps_client)
        .map_err(|_| eyre!("google maps client is already initialised"))?;
    Ok(())
}

pub fn get_google_maps() -> Result<&'static GoogleMapsClient> {
    GMAPS.get().ok_or(eyre!("Failed to get google maps"))
}
