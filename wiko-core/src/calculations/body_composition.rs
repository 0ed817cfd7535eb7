//! Body-composition derivation for the athlete editing form.
//!
//! The athlete form exposes four coupled measurements — weight, lean mass,
//! fat mass and body-fat percentage — tied together by the physical identities
//! `fat + lean = weight` and `pct = fat / weight × 100`. The form lets the
//! user fill in any subset in any order, so the fields are over-determined and
//! every edit has to decide which of the remaining fields follow along.
//!
//! # Edit behaviour
//!
//! Each entry point takes the raw text currently in the field and updates the
//! coupled fields:
//!
//! | Edit       | Stores         | Cascade |
//! |------------|----------------|---------|
//! | height     | `height_cm`    | none |
//! | weight     | `weight_kg`    | fat and lean from the percentage, when it is in 0–100 and weight > 0 |
//! | body-fat % | `body_fat_pct` | same as a weight edit |
//! | lean mass  | `lean_mass_kg` | fat = weight − lean, then the percentage |
//! | fat mass   | `fat_mass_kg`  | lean = weight − fat, then the percentage |
//!
//! Fields the user has typed into directly are marked as overridden and are
//! never written by a cascade afterwards; derived writes do not mark a field.
//! A manual mass entry releases an earlier percentage override, so the
//! percentage follows the masses again until it is typed anew.
//!
//! Raw input is parsed leniently (comma accepted as decimal separator, empty
//! or unparseable text becomes `None`), negative values are floored to zero,
//! and every derived write is rounded to one decimal place. The entry points
//! cannot fail: input that does not parse simply stops the cascade and the
//! derived fields keep their previous values.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use wiko_core::BodyComposition;
//! use wiko_core::calculations::BodyCompositionForm;
//!
//! let mut form = BodyCompositionForm::new(BodyComposition::default());
//! form.edit_weight("80");
//! form.edit_body_fat_pct("20");
//!
//! assert_eq!(form.values().fat_mass_kg, Some(dec!(16.0)));
//! assert_eq!(form.values().lean_mass_kg, Some(dec!(64.0)));
//!
//! // Typing lean mass directly protects it and re-derives the rest.
//! form.edit_lean_mass("60");
//!
//! assert_eq!(form.values().lean_mass_kg, Some(dec!(60)));
//! assert_eq!(form.values().fat_mass_kg, Some(dec!(20.0)));
//! assert_eq!(form.values().body_fat_pct, Some(dec!(25.0)));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::{clamp_non_negative, parse_measurement, round_to_tenth};
use crate::models::BodyComposition;

/// Per-field record of which derivable fields the user has typed into during
/// the current editing session.
///
/// An overridden field is under the user's control and is skipped by every
/// cascade. Mass overrides last for the whole session; the percentage
/// override is released again by a manual mass edit. All flags reset when the
/// form is reopened with fresh seed data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldOverrides {
    pub lean_mass: bool,
    pub fat_mass: bool,
    pub body_fat_pct: bool,
}

/// Editing session over one athlete's [`BodyComposition`].
///
/// Created when the form opens, seeded from the persisted profile, mutated in
/// place on every keystroke and discarded when the form closes. The final
/// snapshot is taken with [`into_values`](Self::into_values) on submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyCompositionForm {
    values: BodyComposition,
    overrides: FieldOverrides,
}

impl BodyCompositionForm {
    /// Opens a new editing session seeded with the given values.
    ///
    /// Seeded values carry no override flags, so the first cascade may
    /// overwrite them like any other derived field.
    pub fn new(seed: BodyComposition) -> Self {
        Self {
            values: seed,
            overrides: FieldOverrides::default(),
        }
    }

    /// Current field values.
    pub fn values(&self) -> &BodyComposition {
        &self.values
    }

    /// Current override flags.
    pub fn overrides(&self) -> FieldOverrides {
        self.overrides
    }

    /// Consumes the session and returns the final snapshot for submission.
    pub fn into_values(self) -> BodyComposition {
        self.values
    }

    /// Stores a height entry. Height is independent and never cascades.
    pub fn edit_height(&mut self, raw: &str) {
        self.values.height_cm = parse_clamped(raw);
    }

    /// Stores a weight entry, then re-derives fat and lean mass from the
    /// percentage for every field the user has not overridden.
    pub fn edit_weight(&mut self, raw: &str) {
        self.values.weight_kg = parse_clamped(raw);
        self.derive_masses_from_pct();
    }

    /// Stores a body-fat percentage entry and marks the percentage as
    /// overridden, then re-derives fat and lean mass like a weight edit.
    pub fn edit_body_fat_pct(&mut self, raw: &str) {
        self.values.body_fat_pct = parse_clamped(raw);
        self.overrides.body_fat_pct = true;
        self.derive_masses_from_pct();
    }

    /// Stores a lean-mass entry and marks lean mass as overridden, then
    /// derives the fat-mass counterpart and the percentage.
    pub fn edit_lean_mass(&mut self, raw: &str) {
        let lean = parse_clamped(raw);
        self.values.lean_mass_kg = lean;
        self.overrides.lean_mass = true;
        // A manual mass entry supersedes an earlier percentage override.
        self.overrides.body_fat_pct = false;

        let (Some(lean), Some(weight)) = (lean, self.values.weight_kg) else {
            return;
        };

        let derived_fat = if self.overrides.fat_mass {
            None
        } else {
            let fat = round_to_tenth(clamp_non_negative(weight - lean));
            self.values.fat_mass_kg = Some(fat);
            Some(fat)
        };

        // The percentage follows the fat mass written above when there was
        // one; with fat under manual control it follows weight − lean.
        let effective_fat = derived_fat.unwrap_or(weight - lean);
        self.derive_pct_from_fat(effective_fat);
    }

    /// Stores a fat-mass entry and marks fat mass as overridden, then derives
    /// the lean-mass counterpart and the percentage.
    pub fn edit_fat_mass(&mut self, raw: &str) {
        let fat = parse_clamped(raw);
        self.values.fat_mass_kg = fat;
        self.overrides.fat_mass = true;
        // A manual mass entry supersedes an earlier percentage override.
        self.overrides.body_fat_pct = false;

        let (Some(fat), Some(weight)) = (fat, self.values.weight_kg) else {
            return;
        };

        if !self.overrides.lean_mass {
            self.values.lean_mass_kg = Some(round_to_tenth(clamp_non_negative(weight - fat)));
        }

        self.derive_pct_from_fat(fat);
    }

    /// Re-derives fat and lean mass from weight and percentage, skipping
    /// overridden fields.
    ///
    /// Requires a percentage in 0–100 and a positive weight; outside that the
    /// masses keep their previous values.
    fn derive_masses_from_pct(&mut self) {
        let (Some(weight), Some(pct)) = (self.values.weight_kg, self.values.body_fat_pct) else {
            return;
        };
        if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED || weight <= Decimal::ZERO {
            return;
        }
        let Some(fat) = fat_from_pct(weight, pct) else {
            return;
        };

        if !self.overrides.fat_mass {
            self.values.fat_mass_kg = Some(fat);
        }
        if !self.overrides.lean_mass {
            self.values.lean_mass_kg = Some(round_to_tenth(clamp_non_negative(weight - fat)));
        }
    }

    /// Re-derives the percentage from a fat mass, unless the percentage is
    /// overridden or the weight is missing or zero.
    fn derive_pct_from_fat(&mut self, fat_kg: Decimal) {
        if self.overrides.body_fat_pct {
            return;
        }
        let Some(weight) = self.values.weight_kg else {
            return;
        };
        if weight <= Decimal::ZERO {
            return;
        }
        if let Some(pct) = pct_from_mass(fat_kg, weight) {
            self.values.body_fat_pct = Some(pct);
        }
    }
}

/// Parses a field entry and floors negative values to zero.
fn parse_clamped(raw: &str) -> Option<Decimal> {
    parse_measurement(raw).map(clamp_non_negative)
}

/// Fat mass implied by a weight and percentage, rounded for storage.
///
/// `None` when the product is not representable.
fn fat_from_pct(weight_kg: Decimal, pct: Decimal) -> Option<Decimal> {
    let fat = weight_kg.checked_mul(pct)?.checked_div(Decimal::ONE_HUNDRED)?;
    Some(round_to_tenth(fat))
}

/// Percentage implied by a fat mass and a positive weight, clamped and
/// rounded for storage.
///
/// `None` when the quotient is not representable.
fn pct_from_mass(fat_kg: Decimal, weight_kg: Decimal) -> Option<Decimal> {
    let pct = fat_kg.checked_div(weight_kg)?.checked_mul(Decimal::ONE_HUNDRED)?;
    Some(round_to_tenth(clamp_non_negative(pct)))
}
