//! CSV loader for GPS telemetry exports.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. All header
//! names are case-sensitive and must match exactly.
//!
//! | Column             | Required | Type    | Notes                         |
//! |--------------------|----------|---------|-------------------------------|
//! | `athlete_id`       | yes      | integer |                               |
//! | `session_date`     | yes      | date    | ISO format, e.g. `2025-07-28` |
//! | `total_distance_m` | no       | decimal | Leave cell empty for `None`   |
//! | `hsr_distance_m`   | no       | decimal | Leave cell empty for `None`   |
//! | `top_speed_kmh`    | no       | decimal | Leave cell empty for `None`   |
//! | `player_load`      | no       | decimal | Leave cell empty for `None`   |
//! | `sprint_count`     | no       | integer | Leave cell empty for `None`   |
//!
//! Decimal cells accept a comma as the decimal separator; such cells must be
//! quoted so the comma is not taken for a field delimiter.
//!
//! ### Example
//!
//! ```csv
//! athlete_id,session_date,total_distance_m,hsr_distance_m,top_speed_kmh,player_load,sprint_count
//! 7,2025-07-21,8450.5,612.3,31.2,385.6,14
//! 12,2025-07-21,"7986,4","548,9","30,1",,
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;
use wiko_core::TelemetryRecord;

/// Column order shared by the loader and the template writer.
pub(crate) const TELEMETRY_COLUMNS: [&str; 7] = [
    "athlete_id",
    "session_date",
    "total_distance_m",
    "hsr_distance_m",
    "top_speed_kmh",
    "player_load",
    "sprint_count",
];

/// Errors that can occur when loading telemetry exports.
#[derive(Debug, Error)]
pub enum TelemetryLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("row {row}: {column} must not be negative, got {value}")]
    NegativeMeasurement {
        row: usize,
        column: &'static str,
        value: Decimal,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<csv::Error> for TelemetryLoaderError {
    fn from(err: csv::Error) -> Self {
        TelemetryLoaderError::CsvParse(err.to_string())
    }
}

/// A single row from a telemetry CSV export.
///
/// Metric columns accept both dot and comma decimal separators because the
/// exports come from units with mixed locale settings. Any metric cell may
/// be empty; vendors whose hardware lacks a sensor leave the column blank.
#[derive(Debug, Deserialize)]
struct TelemetryRow {
    athlete_id: i64,
    session_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    total_distance_m: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    hsr_distance_m: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    top_speed_kmh: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    player_load: Option<Decimal>,
    sprint_count: Option<i32>,
}

impl TelemetryRow {
    fn into_record(self, row: usize) -> Result<TelemetryRecord, TelemetryLoaderError> {
        let decimal_columns = [
            ("total_distance_m", self.total_distance_m),
            ("hsr_distance_m", self.hsr_distance_m),
            ("top_speed_kmh", self.top_speed_kmh),
            ("player_load", self.player_load),
        ];
        for (column, value) in decimal_columns {
            if let Some(value) = value {
                check_non_negative(row, column, value)?;
            }
        }
        if let Some(sprint_count) = self.sprint_count {
            check_non_negative(row, "sprint_count", Decimal::from(sprint_count))?;
        }

        if let (Some(hsr), Some(total)) = (self.hsr_distance_m, self.total_distance_m) {
            if hsr > total {
                warn!(
                    row,
                    hsr_distance_m = %hsr,
                    total_distance_m = %total,
                    "high-speed running distance exceeds total distance"
                );
            }
        }

        Ok(TelemetryRecord {
            athlete_id: self.athlete_id,
            session_date: self.session_date,
            total_distance_m: self.total_distance_m,
            hsr_distance_m: self.hsr_distance_m,
            sprint_count: self.sprint_count,
            top_speed_kmh: self.top_speed_kmh,
            player_load: self.player_load,
        })
    }
}

fn check_non_negative(
    row: usize,
    column: &'static str,
    value: Decimal,
) -> Result<(), TelemetryLoaderError> {
    if value < Decimal::ZERO {
        return Err(TelemetryLoaderError::NegativeMeasurement { row, column, value });
    }

    Ok(())
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .replace(',', ".")
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for telemetry data from CSV exports.
///
/// This loader reads CSV exports produced by the tracking units and turns
/// them into [`TelemetryRecord`] values. Negative measurements are rejected
/// with the row they appeared on, counted as in the file with the header as
/// row 1.
pub struct TelemetryLoader;

impl TelemetryLoader {
    /// Parse telemetry records from a CSV reader.
    ///
    /// Returns a vector of parsed records in file order. The reader can be
    /// any type that implements `Read`, such as a file or a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TelemetryRecord>, TelemetryLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        // The header occupies row 1, so the first data row is row 2.
        for (index, result) in csv_reader.deserialize().enumerate() {
            let row: TelemetryRow = result?;
            records.push(row.into_record(index + 2)?);
        }

        Ok(records)
    }

    /// Parse telemetry records from a CSV file on disk.
    pub fn load_from_path(path: &Path) -> Result<Vec<TelemetryRecord>, TelemetryLoaderError> {
        let file = File::open(path).map_err(|source| TelemetryLoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(file)
    }

    /// Counts records per athlete, ordered by athlete id.
    pub fn count_by_athlete(records: &[TelemetryRecord]) -> BTreeMap<i64, usize> {
        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();

        for record in records {
            *counts.entry(record.athlete_id).or_default() += 1;
        }

        counts
    }
}
