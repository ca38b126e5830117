use thiserror::Error;

/// Failures that abort a whole validation pass.
///
/// Policy violations are never reported through this type; they are collected in
/// [`crate::validation::ValidationResult`].
#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Core(#[from] pushgate_core::PushgateError),

    #[error(transparent)]
    Git(#[from] pushgate_git::GitError),

    #[error(transparent)]
    Config(#[from] pushgate_config::ConfigError),

    #[error("invalid {option} pattern '{pattern}'")]
    InvalidPattern {
        option: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, OperationError>;
