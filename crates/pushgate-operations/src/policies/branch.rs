use pushgate_config::PolicySettings;
use pushgate_core::{AuthenticatedIdentity, ErrorKind, RefChange, ValidationError};
use regex::Regex;
use tracing::debug;

use super::PolicyPatterns;
use crate::traits::ExemptionOracle;

/// Requires branch names to match `branch-name-regex`, unless the pusher is exempt.
pub struct BranchNamePolicy<'a, E: ?Sized> {
    pattern: Option<(&'a Regex, &'a str)>,
    exemptions: &'a [String],
    oracle: &'a E,
}

impl<'a, E: ExemptionOracle + ?Sized> BranchNamePolicy<'a, E> {
    pub fn new(settings: &'a PolicySettings, patterns: &'a PolicyPatterns, oracle: &'a E) -> Self {
        Self {
            pattern: patterns
                .branch_name
                .as_ref()
                .zip(settings.branch_name_regex()),
            exemptions: &settings.branch_name_exemptions,
            oracle,
        }
    }

    #[must_use]
    pub fn check(
        &self,
        ref_change: &RefChange,
        identity: Option<&AuthenticatedIdentity>,
    ) -> Vec<ValidationError> {
        let Some((regex, raw)) = self.pattern else {
            return Vec::new();
        };

        if ref_change.is_tag() {
            return Vec::new();
        }

        let branch = ref_change.short_name();
        if regex.is_match(branch) {
            return Vec::new();
        }

        if !self.exemptions.is_empty()
            && self
                .oracle
                .is_exempt(identity, ref_change.ref_id(), self.exemptions)
        {
            debug!(ref_id = ref_change.ref_id(), "branch name exemption applies");
            return Vec::new();
        }

        vec![ValidationError::new(
            ErrorKind::BranchName,
            format!(
                "{}: Invalid branch name. '{branch}' does not match regex '{raw}'",
                ref_change.ref_id()
            ),
        )]
    }
}
