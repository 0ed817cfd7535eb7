use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body-composition measurements for one athlete.
///
/// Every field is optional: profiles are filled in incrementally and a
/// measurement that was never taken stays `None`. Mass fields and the
/// body-fat percentage are coupled through `fat + lean = weight` and
/// `pct = fat / weight × 100`; keeping them consistent while the athlete
/// form is edited is the job of
/// [`BodyCompositionForm`](crate::calculations::BodyCompositionForm).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyComposition {
    pub height_cm: Option<Decimal>,
    pub weight_kg: Option<Decimal>,
    pub lean_mass_kg: Option<Decimal>,
    pub fat_mass_kg: Option<Decimal>,
    pub body_fat_pct: Option<Decimal>,
}
