use std::path::{Path, PathBuf};

use pushgate_core::{Changeset, Committer, RefChange};
use pushgate_git::{CommitInfo, Repository};

use crate::Result;
use crate::traits::ChangesetSource;

#[derive(Debug, Clone, PartialEq, Eq)]
enum RepositoryLocation {
    Path(PathBuf),
    Environment,
}

/// Reads the commits of a push from a git repository on disk.
pub struct Git2ChangesetSource {
    location: RepositoryLocation,
}

impl Git2ChangesetSource {
    /// Source for the repository containing `path`.
    #[must_use]
    pub fn at(path: &Path) -> Self {
        Self {
            location: RepositoryLocation::Path(path.to_path_buf()),
        }
    }

    /// Source for the repository git describes through `GIT_DIR` when running a hook,
    /// including objects still held in the push quarantine.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            location: RepositoryLocation::Environment,
        }
    }

    fn open(&self) -> Result<Repository> {
        let repo = match &self.location {
            RepositoryLocation::Path(path) => Repository::open(path)?,
            RepositoryLocation::Environment => Repository::open_from_env()?,
        };
        Ok(repo)
    }
}

impl ChangesetSource for Git2ChangesetSource {
    fn new_changesets(&self, ref_change: &RefChange) -> Result<Vec<Changeset>> {
        let repo = self.open()?;
        let commits = repo.new_commits(ref_change.from_hash(), ref_change.to_hash())?;
        Ok(commits.into_iter().map(to_changeset).collect())
    }
}

fn to_changeset(commit: CommitInfo) -> Changeset {
    Changeset {
        id: commit.sha,
        committer: Committer {
            name: commit.committer_name,
            email: commit.committer_email,
        },
        // git stores messages with a trailing newline the pusher never typed
        message: commit.message.trim_end().to_string(),
        parent_count: commit.parent_count,
    }
}
