use tracing::debug;

use crate::{CommitInfo, GitError, Result};

use super::Repository;

fn is_null_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b == b'0')
}

impl Repository {
    /// Commits reachable from `to` that no existing ref already reaches, oldest first.
    ///
    /// Run before refs are moved (pre-receive / update), this is exactly the set of
    /// commits a push introduces. A deletion (`to` all zeros) introduces nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::ObjectNotFound`] if `to` or `from` cannot be resolved, or
    /// [`GitError::NotACommit`] if `to` does not point at a commit.
    pub fn new_commits(&self, from: &str, to: &str) -> Result<Vec<CommitInfo>> {
        if is_null_id(to) {
            return Ok(Vec::new());
        }

        let to_oid = self.resolve_commit(to)?;

        let mut walk = self.inner.revwalk()?;
        walk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::REVERSE)?;
        walk.push(to_oid)?;

        if !is_null_id(from) {
            let from_oid = self.resolve_commit(from)?;
            walk.hide(from_oid)?;
        }

        for reference in self.inner.references()? {
            let reference = reference?;
            // Annotated tags, notes and other non-commit refs are simply not hidden.
            if let Ok(commit) = reference.peel_to_commit() {
                walk.hide(commit.id())?;
            }
        }

        let mut commits = Vec::new();
        for oid in walk {
            let commit = self.inner.find_commit(oid?)?;
            commits.push(to_commit_info(&commit));
        }

        debug!(from, to, count = commits.len(), "collected new commits");
        Ok(commits)
    }

    fn resolve_commit(&self, id: &str) -> Result<git2::Oid> {
        let object = git2::Oid::from_str(id)
            .and_then(|oid| self.inner.find_object(oid, None))
            .map_err(|_| GitError::ObjectNotFound { id: id.to_string() })?;

        object
            .peel_to_commit()
            .map(|commit| commit.id())
            .map_err(|_| GitError::NotACommit { id: id.to_string() })
    }
}

fn to_commit_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let committer = commit.committer();
    CommitInfo {
        sha: commit.id().to_string(),
        message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
        committer_name: String::from_utf8_lossy(committer.name_bytes()).into_owned(),
        committer_email: String::from_utf8_lossy(committer.email_bytes()).into_owned(),
        parent_count: commit.parent_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::setup_test_repo;
    use crate::GitError;

    const ZERO: &str = "0000000000000000000000000000000000000000";

    /// Writes a commit object without moving any ref, like objects received by a push.
    fn dangling_commit(
        repo: &git2::Repository,
        parents: &[git2::Oid],
        message: &str,
        committer: (&str, &str),
    ) -> anyhow::Result<git2::Oid> {
        let sig = git2::Signature::now(committer.0, committer.1)?;
        let tree_id = repo.index()?.write_tree()?;
        let tree = repo.find_tree(tree_id)?;
        let parents = parents
            .iter()
            .map(|oid| repo.find_commit(*oid))
            .collect::<Result<Vec<_>, _>>()?;
        let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();
        Ok(repo.commit(None, &sig, &sig, message, &tree, &parent_refs)?)
    }

    #[test]
    fn update_lists_only_pushed_commits_oldest_first() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        let head = repo.inner.head()?.peel_to_commit()?.id();
        let first = dangling_commit(&repo.inner, &[head], "first", ("Jane", "jane@example.com"))?;
        let second = dangling_commit(&repo.inner, &[first], "second", ("Jane", "jane@example.com"))?;

        let commits = repo.new_commits(&head.to_string(), &second.to_string())?;

        let shas: Vec<_> = commits.iter().map(|c| c.sha.clone()).collect();
        assert_eq!(shas, vec![first.to_string(), second.to_string()]);
        assert_eq!(commits[0].message, "first");
        assert_eq!(commits[0].committer_name, "Jane");
        assert_eq!(commits[0].committer_email, "jane@example.com");
        assert_eq!(commits[0].parent_count, 1);
        Ok(())
    }

    #[test]
    fn new_branch_excludes_commits_reachable_from_existing_refs() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        let head = repo.inner.head()?.peel_to_commit()?.id();
        let pushed = dangling_commit(&repo.inner, &[head], "pushed", ("Jane", "jane@example.com"))?;

        let commits = repo.new_commits(ZERO, &pushed.to_string())?;

        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].sha, pushed.to_string());
        Ok(())
    }

    #[test]
    fn merge_commit_reports_parent_count() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        let head = repo.inner.head()?.peel_to_commit()?.id();
        let left = dangling_commit(&repo.inner, &[head], "left", ("Jane", "jane@example.com"))?;
        let right = dangling_commit(&repo.inner, &[head], "right", ("Jane", "jane@example.com"))?;
        let merge = dangling_commit(&repo.inner, &[left, right], "merge", ("Jane", "jane@example.com"))?;

        let commits = repo.new_commits(&head.to_string(), &merge.to_string())?;

        assert_eq!(commits.len(), 3);
        let last = commits.last().expect("merge commit present");
        assert_eq!(last.sha, merge.to_string());
        assert_eq!(last.parent_count, 2);
        Ok(())
    }

    #[test]
    fn deletion_introduces_nothing() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        let head = repo.inner.head()?.peel_to_commit()?.id();

        let commits = repo.new_commits(&head.to_string(), ZERO)?;

        assert!(commits.is_empty());
        Ok(())
    }

    #[test]
    fn pushing_existing_commit_introduces_nothing() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        let head = repo.inner.head()?.peel_to_commit()?.id();

        let commits = repo.new_commits(ZERO, &head.to_string())?;

        assert!(commits.is_empty());
        Ok(())
    }

    #[test]
    fn unknown_object_is_reported() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        let result = repo.new_commits(ZERO, "1234567890123456789012345678901234567890");

        assert!(matches!(result, Err(GitError::ObjectNotFound { .. })));
        Ok(())
    }
}
