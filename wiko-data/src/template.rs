use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::loader::TELEMETRY_COLUMNS;

// Shows the expected formats, including the ISO session date.
const EXAMPLE_ROW: [&str; 7] = ["1", "2025-07-28", "8450.5", "612.3", "31.2", "385.6", "14"];

/// Writer for blank telemetry import templates.
///
/// The template holds the header row expected by
/// [`TelemetryLoader`](crate::TelemetryLoader) plus one example row, so
/// staff can fill it in from any spreadsheet tool and feed it back to the
/// importer.
pub struct TemplateWriter;

impl TemplateWriter {
    /// Writes the template to any writer.
    pub fn write<W: Write>(writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(TELEMETRY_COLUMNS)?;
        csv_writer.write_record(EXAMPLE_ROW)?;
        csv_writer.flush()?;

        Ok(())
    }

    /// Creates `path` and writes the template into it.
    pub fn write_to_path(path: &Path) -> Result<(), csv::Error> {
        let file = File::create(path)?;

        Self::write(file)
    }
}
