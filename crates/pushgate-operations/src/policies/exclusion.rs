use pushgate_config::PolicySettings;
use pushgate_core::{AuthenticatedIdentity, Changeset, IdentityKind};
use regex::Regex;
use tracing::debug;

use super::PolicyPatterns;

/// Decides which changesets skip message and issue checks.
pub struct ExclusionPolicy<'a> {
    exclude_merge_commits: bool,
    exclude_service_user_commits: bool,
    pattern: Option<&'a Regex>,
}

impl<'a> ExclusionPolicy<'a> {
    #[must_use]
    pub fn new(settings: &PolicySettings, patterns: &'a PolicyPatterns) -> Self {
        Self {
            exclude_merge_commits: settings.exclude_merge_commits,
            exclude_service_user_commits: settings.exclude_service_user_commits,
            pattern: patterns.exclude.as_ref(),
        }
    }

    #[must_use]
    pub fn is_excluded(
        &self,
        changeset: &Changeset,
        identity: Option<&AuthenticatedIdentity>,
    ) -> bool {
        if self.exclude_merge_commits && changeset.is_merge() {
            debug!(id = %changeset.id, "skipping commit because it is a merge commit");
            return true;
        }

        if self.exclude_service_user_commits
            && identity.is_some_and(|user| user.kind == IdentityKind::Service)
        {
            debug!(id = %changeset.id, "skipping commit pushed by a service user");
            return true;
        }

        if let Some(regex) = self.pattern {
            if regex.is_match(&changeset.message) {
                debug!(id = %changeset.id, "skipping commit matched by exclusion pattern");
                return true;
            }
        }

        false
    }
}
