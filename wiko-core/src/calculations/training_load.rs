//! Acute:chronic workload ratio (ACWR) analysis over session RPE load.
//!
//! Every session contributes a load of `duration_min * rpe` (session RPE
//! method). The analysis compares the mean daily load over a short acute
//! window against the mean daily load over a longer chronic window, both
//! ending on the analysis date. Days without a session count as zero, so a
//! quiet week pulls the acute load down rather than shrinking the sample.
//! The chronic window contains the acute window.
//!
//! # Ratio Interpretation
//!
//! | ACWR                                  | Alert level |
//! |---------------------------------------|-------------|
//! | >= high-risk threshold (default 1.5)  | `HighRisk`  |
//! | >= caution threshold (default 1.3)    | `Caution`   |
//! | below the caution threshold           | `Ok`        |
//!
//! An athlete with no load at all inside the chronic window has no
//! meaningful baseline. The analysis then reports `insufficient_history`
//! instead of a ratio rather than dividing by zero.
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, NaiveDate};
//! use rust_decimal_macros::dec;
//! use wiko_core::calculations::{TrainingLoadAnalysis, TrainingLoadConfig};
//! use wiko_core::models::{AlertLevel, Session, SessionKind};
//!
//! let start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
//! let sessions: Vec<Session> = (0..28i64)
//!     .map(|offset| Session {
//!         id: offset,
//!         athlete_id: 1,
//!         date: start + Duration::days(offset),
//!         kind: SessionKind::Training,
//!         duration_min: dec!(60),
//!         rpe: dec!(5),
//!         notes: None,
//!     })
//!     .collect();
//!
//! let analysis = TrainingLoadAnalysis::new(TrainingLoadConfig::default());
//! let result = analysis
//!     .analyze(NaiveDate::from_ymd_opt(2025, 7, 28).unwrap(), &sessions)
//!     .unwrap();
//!
//! assert_eq!(result.acute_load, dec!(300.0));
//! assert_eq!(result.chronic_load, dec!(300.0));
//! assert_eq!(result.acwr, Some(dec!(1.00)));
//! assert_eq!(result.alert_level, AlertLevel::Ok);
//! ```

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{round_to_hundredth, round_to_tenth};
use crate::models::{AlertLevel, Session};

/// Errors that can occur during training load analysis.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrainingLoadError {
    /// The acute window must cover at least one day.
    #[error("acute window must be at least one day, got {0}")]
    InvalidAcuteWindow(u32),

    /// The chronic window must be strictly longer than the acute window.
    #[error("chronic window must be longer than the acute window, got acute {acute} and chronic {chronic}")]
    WindowOrder {
        /// Configured acute window length in days.
        acute: u32,
        /// Configured chronic window length in days.
        chronic: u32,
    },

    /// The caution threshold must be positive.
    #[error("caution threshold must be positive, got {0}")]
    InvalidCautionThreshold(Decimal),

    /// The high-risk threshold must sit above the caution threshold.
    #[error("high-risk threshold must be greater than the caution threshold, got caution {caution} and high-risk {high_risk}")]
    ThresholdOrder {
        /// Configured caution threshold.
        caution: Decimal,
        /// Configured high-risk threshold.
        high_risk: Decimal,
    },
}

/// Windows and thresholds for the workload ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingLoadConfig {
    /// Length of the acute window in days, ending on the analysis date.
    pub acute_window_days: u32,

    /// Length of the chronic window in days, ending on the analysis date.
    ///
    /// Must be longer than the acute window. The chronic window contains
    /// the acute window, so recent sessions count towards both means.
    pub chronic_window_days: u32,

    /// Ratio at or above which the alert level becomes [`AlertLevel::Caution`].
    pub caution_acwr: Decimal,

    /// Ratio at or above which the alert level becomes [`AlertLevel::HighRisk`].
    ///
    /// Must be greater than `caution_acwr`.
    pub high_risk_acwr: Decimal,
}

impl Default for TrainingLoadConfig {
    /// The conventional 7-day acute and 28-day chronic windows, with ratio
    /// thresholds at 1.3 and 1.5.
    ///
    /// # Example
    ///
    /// ```
    /// use wiko_core::calculations::TrainingLoadConfig;
    ///
    /// let config = TrainingLoadConfig::default();
    ///
    /// assert_eq!(config.acute_window_days, 7);
    /// assert_eq!(config.chronic_window_days, 28);
    /// ```
    fn default() -> Self {
        Self {
            acute_window_days: 7,
            chronic_window_days: 28,
            caution_acwr: Decimal::new(13, 1),
            high_risk_acwr: Decimal::new(15, 1),
        }
    }
}

impl TrainingLoadConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the acute window is empty, the chronic window
    /// does not exceed the acute window, the caution threshold is not
    /// positive, or the high-risk threshold does not exceed the caution
    /// threshold.
    pub fn validate(&self) -> Result<(), TrainingLoadError> {
        if self.acute_window_days == 0 {
            return Err(TrainingLoadError::InvalidAcuteWindow(
                self.acute_window_days,
            ));
        }

        if self.chronic_window_days <= self.acute_window_days {
            return Err(TrainingLoadError::WindowOrder {
                acute: self.acute_window_days,
                chronic: self.chronic_window_days,
            });
        }

        if self.caution_acwr <= Decimal::ZERO {
            return Err(TrainingLoadError::InvalidCautionThreshold(
                self.caution_acwr,
            ));
        }

        if self.high_risk_acwr <= self.caution_acwr {
            return Err(TrainingLoadError::ThresholdOrder {
                caution: self.caution_acwr,
                high_risk: self.high_risk_acwr,
            });
        }

        Ok(())
    }
}

/// Result of a training load analysis for one athlete on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingLoadResult {
    /// Mean daily load over the acute window, rounded to one decimal place.
    pub acute_load: Decimal,

    /// Mean daily load over the chronic window, rounded to one decimal place.
    pub chronic_load: Decimal,

    /// Acute load divided by chronic load, rounded to two decimal places.
    ///
    /// `None` when the chronic load is zero and no ratio can be formed.
    pub acwr: Option<Decimal>,

    /// Alert level derived from the ratio thresholds.
    pub alert_level: AlertLevel,

    /// True when the chronic window held no load at all, so the ratio and
    /// alert level carry no information.
    pub insufficient_history: bool,
}

impl TrainingLoadResult {
    /// Creates a result for an athlete with no load inside the chronic
    /// window.
    fn insufficient_history(acute_load: Decimal) -> Self {
        Self {
            acute_load,
            chronic_load: Decimal::ZERO,
            acwr: None,
            alert_level: AlertLevel::Ok,
            insufficient_history: true,
        }
    }
}

/// Analyzer for the acute:chronic workload ratio.
#[derive(Debug, Clone)]
pub struct TrainingLoadAnalysis {
    config: TrainingLoadConfig,
}

impl TrainingLoadAnalysis {
    /// Creates a new analyzer with the given configuration.
    pub fn new(config: TrainingLoadConfig) -> Self {
        Self { config }
    }

    /// Computes acute and chronic loads and the workload ratio for the
    /// given date.
    ///
    /// Sessions dated after `as_of` are ignored, so historical analyses can
    /// be rerun against a full season of data. The caller is expected to
    /// pass the sessions of a single athlete.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn analyze(
        &self,
        as_of: NaiveDate,
        sessions: &[Session],
    ) -> Result<TrainingLoadResult, TrainingLoadError> {
        self.config.validate()?;

        let acute_load = self.mean_daily_load(as_of, self.config.acute_window_days, sessions);
        let chronic_load = self.mean_daily_load(as_of, self.config.chronic_window_days, sessions);

        if chronic_load <= Decimal::ZERO {
            warn!(
                %as_of,
                chronic_window_days = self.config.chronic_window_days,
                "no load inside the chronic window; skipping workload ratio"
            );
            return Ok(TrainingLoadResult::insufficient_history(acute_load));
        }

        let acwr = round_to_hundredth(acute_load / chronic_load);
        let alert_level = self.level_for(acwr);

        if alert_level == AlertLevel::HighRisk {
            warn!(
                %as_of,
                acwr = %acwr,
                threshold = %self.config.high_risk_acwr,
                "workload ratio at or above the high-risk threshold"
            );
        }

        Ok(TrainingLoadResult {
            acute_load,
            chronic_load,
            acwr: Some(acwr),
            alert_level,
            insufficient_history: false,
        })
    }

    /// Mean daily load over the window of `window_days` days ending on
    /// `as_of`, inclusive.
    ///
    /// Days without a session contribute zero. Multiple sessions on one day
    /// are summed.
    fn mean_daily_load(
        &self,
        as_of: NaiveDate,
        window_days: u32,
        sessions: &[Session],
    ) -> Decimal {
        let start = as_of - Duration::days(i64::from(window_days) - 1);

        let total: Decimal = sessions
            .iter()
            .filter(|session| session.date >= start && session.date <= as_of)
            .map(Session::load)
            .sum();

        round_to_tenth(total / Decimal::from(window_days))
    }

    /// Maps a ratio to an alert level using the configured thresholds.
    fn level_for(&self, acwr: Decimal) -> AlertLevel {
        if acwr >= self.config.high_risk_acwr {
            AlertLevel::HighRisk
        } else if acwr >= self.config.caution_acwr {
            AlertLevel::Caution
        } else {
            AlertLevel::Ok
        }
    }
}
