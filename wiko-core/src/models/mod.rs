mod alert;
mod athlete;
mod body_composition;
mod questionnaire;
mod session;
mod telemetry;

pub use alert::AlertLevel;
pub use athlete::Athlete;
pub use body_composition::BodyComposition;
pub use questionnaire::QuestionnaireResponse;
pub use session::{Session, SessionKind};
pub use telemetry::TelemetryRecord;
