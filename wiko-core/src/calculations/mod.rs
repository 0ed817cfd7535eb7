//! Calculation engines for athlete monitoring.
//!
//! This module provides the body composition form logic plus the training
//! load and wellness analyses, organized by the signal each one works on.

pub mod body_composition;
pub mod common;
pub mod training_load;
pub mod wellness;

pub use body_composition::{BodyCompositionForm, FieldOverrides};
pub use training_load::{
    TrainingLoadAnalysis, TrainingLoadConfig, TrainingLoadError, TrainingLoadResult,
};
pub use wellness::{WellnessAnalysis, WellnessConfig, WellnessError, WellnessScore};
