use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily psycho-emotional questionnaire answers (Hooper scale).
///
/// Each item is scored 1–7 where 1 is the best state and 7 the worst.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireResponse {
    pub athlete_id: i64,
    pub date: NaiveDate,
    pub sleep_quality: u8,
    pub fatigue: u8,
    pub muscle_soreness: u8,
    pub stress: u8,
}
