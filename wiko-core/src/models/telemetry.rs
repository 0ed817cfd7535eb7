use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One imported row of GPS/load telemetry for an athlete on a given day.
///
/// Vendor exports leave out columns their hardware does not record, so every
/// metric is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub athlete_id: i64,
    pub session_date: NaiveDate,
    pub total_distance_m: Option<Decimal>,
    /// Distance covered above the high-speed running threshold.
    pub hsr_distance_m: Option<Decimal>,
    pub sprint_count: Option<i32>,
    pub top_speed_kmh: Option<Decimal>,
    pub player_load: Option<Decimal>,
}
