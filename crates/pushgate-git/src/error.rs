use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git operation failed")]
    Git(#[from] git2::Error),

    #[error("not a git repository: '{path}'")]
    NotARepository { path: PathBuf },

    #[error("git repository could not be opened from the hook environment")]
    NoEnvironmentRepository(#[source] git2::Error),

    #[error("object '{id}' not found in repository")]
    ObjectNotFound { id: String },

    #[error("object '{id}' is not a commit")]
    NotACommit { id: String },
}
