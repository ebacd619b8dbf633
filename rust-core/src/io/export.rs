//! Series export, one value per line, no header

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::config::ExportConfig;
use crate::error::Result;

/// Write `series` to `writer`
///
/// Without a fixed precision each value is printed as the shortest decimal
/// that parses back to the same `f64`. Output never depends on locale.
pub fn write_series<W: Write>(mut writer: W, series: &[f64], config: &ExportConfig) -> Result<()> {
    for &value in series {
        match config.precision {
            Some(precision) => writeln!(writer, "{:.*}", precision, value)?,
            None => writeln!(writer, "{}", value)?,
        }
    }
    writer.flush()?;
    Ok(())
}

/// Render `series` as text
pub fn format_series(series: &[f64], config: &ExportConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_series(&mut buffer, series, config)?;
    // Formatted floats are always ASCII
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write `series` to a file, replacing any existing content
pub fn save_series<P: AsRef<Path>>(path: P, series: &[f64], config: &ExportConfig) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_series(BufWriter::new(file), series, config)?;
    debug!("Saved {} values to {}", series.len(), path.as_ref().display());
    Ok(())
}
