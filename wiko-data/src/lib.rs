pub mod loader;
pub mod template;

pub use loader::{TelemetryLoader, TelemetryLoaderError};
pub use template::TemplateWriter;
