use thiserror::Error;

#[derive(Debug, Error)]
pub enum PushgateError {
    #[error("malformed hook input line '{line}': expected '<old> <new> <ref>'")]
    MalformedHookLine { line: String },

    #[error("invalid object id '{0}'")]
    InvalidObjectId(String),

    #[error("invalid issue key '{0}'")]
    InvalidIssueKey(String),

    #[error("unknown identity kind '{0}' (expected normal, service or other)")]
    UnknownIdentityKind(String),
}

pub type Result<T> = std::result::Result<T, PushgateError>;
