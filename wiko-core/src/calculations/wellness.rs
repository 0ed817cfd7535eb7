//! Wellness scoring over the four-item morning questionnaire.
//!
//! Athletes rate sleep quality, fatigue, muscle soreness and stress from 1
//! (best) to 7 (worst). The Hooper index is the plain sum of the four
//! items, so it ranges from 4 to 28 and a higher value means a worse
//! state.
//!
//! # Index Interpretation
//!
//! | Hooper index                        | Alert level |
//! |-------------------------------------|-------------|
//! | >= high-risk index (default 20)     | `HighRisk`  |
//! | >= caution index (default 16)       | `Caution`   |
//! | below the caution index             | `Ok`        |
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use wiko_core::calculations::{WellnessAnalysis, WellnessConfig};
//! use wiko_core::models::{AlertLevel, QuestionnaireResponse};
//!
//! let response = QuestionnaireResponse {
//!     athlete_id: 1,
//!     date: NaiveDate::from_ymd_opt(2025, 7, 28).unwrap(),
//!     sleep_quality: 5,
//!     fatigue: 6,
//!     muscle_soreness: 5,
//!     stress: 4,
//! };
//!
//! let analysis = WellnessAnalysis::new(WellnessConfig::default());
//! let score = analysis.score(&response).unwrap();
//!
//! assert_eq!(score.hooper_index, dec!(20));
//! assert_eq!(score.alert_level, AlertLevel::HighRisk);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::round_to_tenth;
use crate::models::{AlertLevel, QuestionnaireResponse};

/// Errors that can occur during wellness scoring.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WellnessError {
    /// A questionnaire item fell outside the 1 to 7 scale.
    #[error("{item} score must be between 1 and 7, got {value}")]
    ItemOutOfRange {
        /// Name of the offending questionnaire item.
        item: &'static str,
        /// The rejected value.
        value: u8,
    },

    /// The caution index must be positive.
    #[error("caution index must be positive, got {0}")]
    InvalidCautionIndex(Decimal),

    /// The high-risk index must sit above the caution index.
    #[error("high-risk index must be greater than the caution index, got caution {caution} and high-risk {high_risk}")]
    IndexOrder {
        /// Configured caution index.
        caution: Decimal,
        /// Configured high-risk index.
        high_risk: Decimal,
    },
}

/// Thresholds for the Hooper index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessConfig {
    /// Index at or above which the alert level becomes [`AlertLevel::Caution`].
    pub caution_index: Decimal,

    /// Index at or above which the alert level becomes [`AlertLevel::HighRisk`].
    ///
    /// Must be greater than `caution_index`.
    pub high_risk_index: Decimal,
}

impl Default for WellnessConfig {
    /// Caution at an index of 16, high risk at 20.
    ///
    /// On the 4 to 28 scale these correspond to item averages of 4 and 5.
    fn default() -> Self {
        Self {
            caution_index: Decimal::from(16),
            high_risk_index: Decimal::from(20),
        }
    }
}

impl WellnessConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the caution index is not positive or the
    /// high-risk index does not exceed the caution index.
    pub fn validate(&self) -> Result<(), WellnessError> {
        if self.caution_index <= Decimal::ZERO {
            return Err(WellnessError::InvalidCautionIndex(self.caution_index));
        }

        if self.high_risk_index <= self.caution_index {
            return Err(WellnessError::IndexOrder {
                caution: self.caution_index,
                high_risk: self.high_risk_index,
            });
        }

        Ok(())
    }
}

/// Wellness score for one athlete on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessScore {
    /// Sum of the four questionnaire items.
    pub hooper_index: Decimal,

    /// Alert level derived from the index thresholds.
    pub alert_level: AlertLevel,
}

/// Analyzer for questionnaire responses.
#[derive(Debug, Clone)]
pub struct WellnessAnalysis {
    config: WellnessConfig,
}

impl WellnessAnalysis {
    /// Creates a new analyzer with the given configuration.
    pub fn new(config: WellnessConfig) -> Self {
        Self { config }
    }

    /// Scores a single questionnaire response.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation or any
    /// questionnaire item falls outside the 1 to 7 scale.
    pub fn score(&self, response: &QuestionnaireResponse) -> Result<WellnessScore, WellnessError> {
        self.config.validate()?;

        let hooper_index = hooper_index(response)?;
        let alert_level = self.level_for(hooper_index);

        if alert_level == AlertLevel::HighRisk {
            warn!(
                athlete_id = response.athlete_id,
                date = %response.date,
                hooper_index = %hooper_index,
                threshold = %self.config.high_risk_index,
                "wellness index at or above the high-risk threshold"
            );
        }

        Ok(WellnessScore {
            hooper_index,
            alert_level,
        })
    }

    /// Mean Hooper index over a set of responses, rounded to one decimal
    /// place.
    ///
    /// Intended for the trailing week of an athlete's responses. Returns
    /// `None` when the slice is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation or any
    /// response holds an item outside the 1 to 7 scale.
    pub fn weekly_mean(
        &self,
        responses: &[QuestionnaireResponse],
    ) -> Result<Option<Decimal>, WellnessError> {
        self.config.validate()?;

        if responses.is_empty() {
            return Ok(None);
        }

        let mut total = Decimal::ZERO;
        for response in responses {
            total += hooper_index(response)?;
        }

        Ok(Some(round_to_tenth(total / Decimal::from(responses.len()))))
    }

    /// Maps an index to an alert level using the configured thresholds.
    fn level_for(&self, hooper_index: Decimal) -> AlertLevel {
        if hooper_index >= self.config.high_risk_index {
            AlertLevel::HighRisk
        } else if hooper_index >= self.config.caution_index {
            AlertLevel::Caution
        } else {
            AlertLevel::Ok
        }
    }
}

/// Sums the four questionnaire items after range-checking each one.
fn hooper_index(response: &QuestionnaireResponse) -> Result<Decimal, WellnessError> {
    let items = [
        ("sleep quality", response.sleep_quality),
        ("fatigue", response.fatigue),
        ("muscle soreness", response.muscle_soreness),
        ("stress", response.stress),
    ];

    let mut total = 0u32;
    for (item, value) in items {
        if !(1..=7).contains(&value) {
            return Err(WellnessError::ItemOutOfRange { item, value });
        }
        total += u32::from(value);
    }

    Ok(Decimal::from(total))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_config() -> WellnessConfig {
        WellnessConfig::default()
    }

    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        use tracing_subscriber::fmt::format::FmtSpan;

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    fn response(
        sleep_quality: u8,
        fatigue: u8,
        muscle_soreness: u8,
        stress: u8,
    ) -> QuestionnaireResponse {
        QuestionnaireResponse {
            athlete_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 7, 28).unwrap(),
            sleep_quality,
            fatigue,
            muscle_soreness,
            stress,
        }
    }

    // ============================================================
    // Configuration validation
    // ============================================================

    #[test]
    fn validate_accepts_default_config() {
        assert_eq!(test_config().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_caution_index() {
        let config = WellnessConfig {
            caution_index: Decimal::ZERO,
            ..test_config()
        };

        assert_eq!(
            config.validate(),
            Err(WellnessError::InvalidCautionIndex(Decimal::ZERO))
        );
    }

    #[test]
    fn validate_rejects_high_risk_index_at_or_below_caution() {
        let config = WellnessConfig {
            caution_index: dec!(16),
            high_risk_index: dec!(16),
        };

        assert_eq!(
            config.validate(),
            Err(WellnessError::IndexOrder {
                caution: dec!(16),
                high_risk: dec!(16),
            })
        );
    }

    #[test]
    fn score_propagates_validation_errors() {
        let analysis = WellnessAnalysis::new(WellnessConfig {
            caution_index: Decimal::ZERO,
            ..test_config()
        });

        let result = analysis.score(&response(2, 2, 2, 2));

        assert_eq!(result, Err(WellnessError::InvalidCautionIndex(Decimal::ZERO)));
    }

    // ============================================================
    // Scoring
    // ============================================================

    #[test]
    fn fully_rested_athlete_scores_the_minimum_index() {
        let analysis = WellnessAnalysis::new(test_config());

        let score = analysis.score(&response(1, 1, 1, 1)).unwrap();

        assert_eq!(score.hooper_index, dec!(4));
        assert_eq!(score.alert_level, AlertLevel::Ok);
    }

    #[test]
    fn index_just_below_caution_stays_ok() {
        let analysis = WellnessAnalysis::new(test_config());

        // 4 + 4 + 4 + 3 = 15
        let score = analysis.score(&response(4, 4, 4, 3)).unwrap();

        assert_eq!(score.hooper_index, dec!(15));
        assert_eq!(score.alert_level, AlertLevel::Ok);
    }

    #[test]
    fn index_at_the_caution_threshold_raises_caution() {
        let analysis = WellnessAnalysis::new(test_config());

        // 4 + 4 + 4 + 4 = 16
        let score = analysis.score(&response(4, 4, 4, 4)).unwrap();

        assert_eq!(score.hooper_index, dec!(16));
        assert_eq!(score.alert_level, AlertLevel::Caution);
    }

    #[test]
    fn index_at_the_high_risk_threshold_raises_high_risk() {
        let _guard = init_test_tracing();
        let analysis = WellnessAnalysis::new(test_config());

        // 5 + 5 + 5 + 5 = 20
        let score = analysis.score(&response(5, 5, 5, 5)).unwrap();

        assert_eq!(score.hooper_index, dec!(20));
        assert_eq!(score.alert_level, AlertLevel::HighRisk);
    }

    #[test]
    fn exhausted_athlete_scores_the_maximum_index() {
        let _guard = init_test_tracing();
        let analysis = WellnessAnalysis::new(test_config());

        let score = analysis.score(&response(7, 7, 7, 7)).unwrap();

        assert_eq!(score.hooper_index, dec!(28));
        assert_eq!(score.alert_level, AlertLevel::HighRisk);
    }

    #[test]
    fn item_below_the_scale_is_rejected() {
        let analysis = WellnessAnalysis::new(test_config());

        let result = analysis.score(&response(0, 4, 4, 4));

        assert_eq!(
            result,
            Err(WellnessError::ItemOutOfRange {
                item: "sleep quality",
                value: 0,
            })
        );
    }

    #[test]
    fn item_above_the_scale_is_rejected() {
        let analysis = WellnessAnalysis::new(test_config());

        let result = analysis.score(&response(4, 4, 4, 8));

        assert_eq!(
            result,
            Err(WellnessError::ItemOutOfRange {
                item: "stress",
                value: 8,
            })
        );
    }

    // ============================================================
    // Weekly mean
    // ============================================================

    #[test]
    fn weekly_mean_rounds_to_one_decimal_place() {
        let analysis = WellnessAnalysis::new(test_config());
        let responses = vec![
            response(2, 2, 2, 2), // 8
            response(3, 2, 2, 2), // 9
            response(3, 2, 2, 2), // 9
        ];

        let mean = analysis.weekly_mean(&responses).unwrap();

        // (8 + 9 + 9) / 3 = 8.666... -> 8.7
        assert_eq!(mean, Some(dec!(8.7)));
    }

    #[test]
    fn weekly_mean_of_no_responses_is_none() {
        let analysis = WellnessAnalysis::new(test_config());

        assert_eq!(analysis.weekly_mean(&[]), Ok(None));
    }

    #[test]
    fn weekly_mean_rejects_an_out_of_range_item() {
        let analysis = WellnessAnalysis::new(test_config());
        let responses = vec![response(2, 2, 2, 2), response(2, 9, 2, 2)];

        let result = analysis.weekly_mean(&responses);

        assert_eq!(
            result,
            Err(WellnessError::ItemOutOfRange {
                item: "fatigue",
                value: 9,
            })
        );
    }
}
