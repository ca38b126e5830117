use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("failed to read ref updates from stdin")]
    Stdin(#[source] std::io::Error),

    #[error("failed to write JSON report")]
    Json(#[from] serde_json::Error),

    #[error("invalid ref update")]
    RefUpdate(#[from] pushgate_core::PushgateError),

    #[error("configuration error")]
    Config(#[from] pushgate_config::ConfigError),

    #[error("validation aborted")]
    Operation(#[from] pushgate_operations::OperationError),

    #[error("push rejected with {count} violation(s)")]
    Rejected { count: usize },
}

pub type Result<T> = std::result::Result<T, CliError>;
