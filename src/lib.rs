//! Turns a GPS track recording into the list of administrative places it
//! passes through, by sampling the track at a fixed time interval and
//! reverse geocoding each sampled point.

pub mod clients;
pub mod config;
pub mod error;
pub mod geocode;
pub mod import;
pub mod pipeline;
pub mod report;
pub mod sample;
pub mod types;
