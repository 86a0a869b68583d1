use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::types::place::PlaceRecord;

/// Writes the places as a UTF-8 JSON array, indented with four spaces and
/// with non-ascii characters left as-is.
pub fn write_places(path: &Path, places: &[PlaceRecord]) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    places.serialize(&mut serializer)?;
    writer.flush()?;
    info!("saved {} places to {}", places.len(), path.display());
    Ok(())
}
