pub mod calculations;
pub mod models;

pub use calculations::{BodyCompositionForm, TrainingLoadAnalysis, WellnessAnalysis};
pub use models::*;
