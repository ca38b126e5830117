use pushgate_core::IssueKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("issue tracker requires authentication; visit {authorization_url}")]
    AuthenticationRequired { authorization_url: String },

    #[error("issue tracker request failed")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TrackerError {
    #[must_use]
    pub fn transport(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transport(error.into())
    }
}

pub type TrackerResult<T> = std::result::Result<T, TrackerError>;

/// Read-only view of an issue tracker. Implementations may block on network I/O
/// and are expected to apply their own timeouts; callers never retry.
pub trait IssueTracker: Send + Sync {
    fn link_exists(&self) -> bool;

    /// # Errors
    ///
    /// Returns [`TrackerError`] if the tracker cannot be queried.
    fn issue_exists(&self, key: &IssueKey) -> TrackerResult<bool>;

    /// # Errors
    ///
    /// Returns [`TrackerError`] if the tracker cannot be queried.
    fn project_exists(&self, project_key: &str) -> TrackerResult<bool>;

    /// # Errors
    ///
    /// Returns [`TrackerError`] if the tracker cannot be queried.
    fn matches_query(&self, query: &str, key: &IssueKey) -> TrackerResult<bool>;
}
