use std::fmt;

use color_eyre::eyre::Report;
use thiserror::Error;
use tracing::error;

/// The pipeline stage a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    LoadTrack,
    ExtractPoints,
    ReverseGeocode,
    WriteReport,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::LoadTrack => "track loading",
            Stage::ExtractPoints => "point extraction",
            Stage::ReverseGeocode => "reverse geocoding",
            Stage::WriteReport => "report writing",
        };
        f.write_str(name)
    }
}

/// A stage failure carrying the underlying cause.
#[derive(Error, Debug)]
#[error("{stage} failed: {cause}")]
pub struct StageError {
    pub stage: Stage,
    pub cause: Report,
}

/// Tags a result with the stage it came from, logging the failure once at
/// the point where it enters the pipeline's return contract.
pub trait StageContext<T> {
    fn in_stage(self, stage: Stage) -> Result<T, StageError>;
}

impl<T, E> StageContext<T> for Result<T, E>
where
    E: Into<Report>,
{
    fn in_stage(self, stage: Stage) -> Result<T, StageError> {
        self.map_err(|err| {
            let cause = err.into();
            error!("{} failed: {:#}", stage, cause);
            StageError { stage, cause }
        })
    }
}
