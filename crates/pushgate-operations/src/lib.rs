mod error;
pub mod policies;
pub mod providers;
pub mod traits;
pub mod validation;

#[cfg(test)]
pub mod mocks;

pub use error::{OperationError, Result};
