use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionKind {
    Training,
    Match,
}

impl SessionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Training => "TRN",
            Self::Match => "MATCH",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "TRN" => Some(Self::Training),
            "MATCH" => Some(Self::Match),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub athlete_id: i64,
    pub date: NaiveDate,
    pub kind: SessionKind,
    pub duration_min: Decimal,
    /// Session rating of perceived exertion, 1–10.
    pub rpe: Decimal,
    pub notes: Option<String>,
}

impl Session {
    /// Session load in arbitrary units: duration × RPE.
    pub fn load(&self) -> Decimal {
        self.duration_min * self.rpe
    }
}
