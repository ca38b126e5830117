mod engine;
mod result;

pub use engine::PushValidator;
pub use result::ValidationResult;
