pub mod error;
pub mod issue;
pub mod name;
pub mod types;
pub mod violation;

pub use error::*;
pub use issue::IssueKey;
pub use name::sanitize_name;
pub use types::*;
pub use violation::{ErrorKind, ValidationError, Violation};
