mod commits;

use std::path::{Path, PathBuf};

use crate::{GitError, Result};

pub struct Repository {
    pub(crate) inner: git2::Repository,
    root: PathBuf,
}

impl Repository {
    /// Opens the repository containing `path`. Bare repositories are supported.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if the path is not inside a git repository.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|_| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        Ok(Self::from_inner(inner))
    }

    /// Opens the repository described by `GIT_DIR` and friends, as set for server-side hooks.
    ///
    /// This honours `GIT_OBJECT_DIRECTORY` and `GIT_ALTERNATE_OBJECT_DIRECTORIES`, which is
    /// where git keeps quarantined objects of a push that has not been accepted yet.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NoEnvironmentRepository`] if no repository can be located.
    pub fn open_from_env() -> Result<Self> {
        let inner = git2::Repository::open_from_env().map_err(GitError::NoEnvironmentRepository)?;
        Ok(Self::from_inner(inner))
    }

    fn from_inner(inner: git2::Repository) -> Self {
        let root = inner.workdir().unwrap_or_else(|| inner.path());

        // Use dunce to get a path without the \\?\ prefix on Windows
        let root = dunce::simplified(root).to_path_buf();

        Self { inner, root }
    }

    /// Working tree root, or the git directory itself for bare repositories.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.inner.is_bare()
    }
}
