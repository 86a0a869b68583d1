use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::Duration;
use color_eyre::eyre::{eyre, Result, WrapErr};

/// Options for one geocoding run. Everything is fixed at process start;
/// the binary takes no command line arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub api_key: String,
    pub interval_minutes: i64,
}

impl Config {
    pub fn new(
        input_path: PathBuf,
        output_path: PathBuf,
        api_key: String,
        interval_minutes: i64,
    ) -> Result<Self> {
        if interval_minutes <= 0 {
            return Err(eyre!(
                "sampling interval must be a positive number of minutes, got {}",
                interval_minutes
            ));
        }
        Ok(Config {
            input_path,
            output_path,
            api_key,
            interval_minutes,
        })
    }

    pub fn from_env() -> Result<Self> {
        let input_path = PathBuf::from(
            env::var("PLACETRACE_TRACK_FILE").wrap_err("PLACETRACE_TRACK_FILE is not set")?,
        );
        let output_path = match env::var("PLACETRACE_OUTPUT_FILE") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_output_path(&input_path),
        };
        let api_key = env::var("PLACETRACE_GOOGLE_API_KEY")
            .wrap_err("PLACETRACE_GOOGLE_API_KEY is not set")?;
        let interval_minutes = match env::var("PLACETRACE_INTERVAL_MINUTES") {
            Ok(minutes) => minutes
                .parse()
                .wrap_err("PLACETRACE_INTERVAL_MINUTES is not a number")?,
            Err(_) => 5,
        };
        Config::new(input_path, output_path, api_key, interval_minutes)
    }

    pub fn interval(&self) -> Duration {
        Duration::minutes(self.interval_minutes)
    }
}

/// The report lands next to the track file unless told otherwise.
pub fn default_output_path(input_path: &Path) -> PathBuf {
    let mut path = OsString::from(input_path);
    path.push(".geocoding.json");
    PathBuf::from(path)
}
