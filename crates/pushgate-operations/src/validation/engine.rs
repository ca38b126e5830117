use pushgate_config::PolicySettings;
use pushgate_core::{AuthenticatedIdentity, Changeset, RefChange, ValidationError, Violation};
use tracing::{debug, warn};

use super::ValidationResult;
use crate::Result;
use crate::policies::{
    BranchNamePolicy, ExclusionPolicy, IdentityValidator, IssueReferencePolicy, MessagePolicy,
    PolicyPatterns,
};
use crate::traits::{ChangesetSource, ExemptionOracle, IdentityProvider, IssueTracker};

/// Runs every policy against the ref changes of a push.
///
/// The branch policy runs once per ref change. Each new changeset then gets the
/// identity check (for authenticated pushes), and unless the ref is a tag or the
/// changeset is excluded, the message check followed by the issue check. The
/// issue check only runs for changesets with no errors so far, since key
/// extraction may depend on the message pattern.
pub struct PushValidator<S, I, E, T> {
    source: S,
    identity: I,
    exemptions: E,
    tracker: T,
}

impl<S, I, E, T> PushValidator<S, I, E, T>
where
    S: ChangesetSource,
    I: IdentityProvider,
    E: ExemptionOracle,
    T: IssueTracker,
{
    pub fn new(source: S, identity: I, exemptions: E, tracker: T) -> Self {
        Self {
            source,
            identity,
            exemptions,
            tracker,
        }
    }

    /// # Errors
    ///
    /// Returns an error if a configured pattern is malformed or the new changesets
    /// cannot be read.
    pub fn validate_ref_change(
        &self,
        settings: &PolicySettings,
        ref_change: &RefChange,
    ) -> Result<ValidationResult> {
        self.validate_ref_changes(settings, std::slice::from_ref(ref_change))
    }

    /// Validates all ref changes of one push, concatenating their violations in
    /// input order.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured pattern is malformed or the new changesets
    /// of any ref change cannot be read. Patterns are compiled before any ref
    /// change is looked at.
    pub fn validate_ref_changes(
        &self,
        settings: &PolicySettings,
        ref_changes: &[RefChange],
    ) -> Result<ValidationResult> {
        let patterns = PolicyPatterns::compile(settings)?;

        let identity = self.identity.current_identity();
        if identity.is_none() {
            warn!("unauthenticated push, skipping committer validation");
        }

        let mut result = ValidationResult::default();
        for ref_change in ref_changes {
            result.extend(self.check_ref_change(
                settings,
                &patterns,
                identity.as_ref(),
                ref_change,
            )?);
        }
        Ok(result)
    }

    fn check_ref_change(
        &self,
        settings: &PolicySettings,
        patterns: &PolicyPatterns,
        identity: Option<&AuthenticatedIdentity>,
        ref_change: &RefChange,
    ) -> Result<ValidationResult> {
        debug!(
            ref_id = ref_change.ref_id(),
            change_type = %ref_change.change_type(),
            from = ref_change.from_hash(),
            to = ref_change.to_hash(),
            "validating ref change"
        );

        let mut violations: Vec<Violation> =
            BranchNamePolicy::new(settings, patterns, &self.exemptions)
                .check(ref_change, identity)
                .into_iter()
                .map(Violation::for_ref)
                .collect();

        let check_messages = !ref_change.is_tag();
        for changeset in self.source.new_changesets(ref_change)? {
            let errors =
                self.check_changeset(settings, patterns, &changeset, identity, check_messages);
            violations.extend(
                errors
                    .iter()
                    .map(|error| Violation::for_changeset(&changeset.id, error)),
            );
        }

        Ok(ValidationResult { violations })
    }

    /// Errors for a single changeset, unprefixed and in check order.
    #[must_use]
    pub fn check_changeset(
        &self,
        settings: &PolicySettings,
        patterns: &PolicyPatterns,
        changeset: &Changeset,
        identity: Option<&AuthenticatedIdentity>,
        check_messages: bool,
    ) -> Vec<ValidationError> {
        debug!(
            id = %changeset.id,
            name = %changeset.committer.name,
            email = %changeset.committer.email,
            "checking changeset"
        );

        let mut errors = Vec::new();

        if let Some(identity) = identity {
            errors.extend(IdentityValidator::new(settings).check(changeset, identity));
        }

        if check_messages && !ExclusionPolicy::new(settings, patterns).is_excluded(changeset, identity)
        {
            errors.extend(MessagePolicy::new(settings, patterns).check(&changeset.message));

            if errors.is_empty() {
                errors.extend(
                    IssueReferencePolicy::new(settings, patterns, &self.tracker)
                        .check(&changeset.message),
                );
            }
        }

        errors
    }
}
