use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    BranchName,
    CommitterEmail,
    CommitterName,
    CommitRegex,
    IssueJql,
    #[default]
    Unspecified,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BranchName => "BRANCH_NAME",
            Self::CommitterEmail => "COMMITTER_EMAIL",
            Self::CommitterName => "COMMITTER_NAME",
            Self::CommitRegex => "COMMIT_REGEX",
            Self::IssueJql => "ISSUE_JQL",
            Self::Unspecified => "UNSPECIFIED",
        };
        write!(f, "{name}")
    }
}

/// A policy violation. Immutable; attribution produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    kind: ErrorKind,
    message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unspecified(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unspecified, message)
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn prepend_text(&self, prefix: &str) -> Self {
        Self {
            kind: self.kind,
            message: format!("{prefix}: {}", self.message),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A validation error as reported to the host, with the changeset it came from.
///
/// Ref-level errors (branch naming) carry no changeset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub changeset: Option<String>,
    pub kind: ErrorKind,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn for_ref(error: ValidationError) -> Self {
        Self {
            changeset: None,
            kind: error.kind,
            message: error.message,
        }
    }

    #[must_use]
    pub fn for_changeset(changeset_id: &str, error: &ValidationError) -> Self {
        let attributed = error.prepend_text(changeset_id);
        Self {
            changeset: Some(changeset_id.to_string()),
            kind: attributed.kind,
            message: attributed.message,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
