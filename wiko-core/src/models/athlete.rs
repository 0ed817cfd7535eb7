use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::BodyComposition;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: i64,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub squad: Option<String>,
    pub position: Option<String>,
    pub body_composition: BodyComposition,
}
