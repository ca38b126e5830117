use pushgate_config::PolicySettings;
use pushgate_core::{
    AuthenticatedIdentity, Changeset, ErrorKind, IdentityKind, ValidationError, sanitize_name,
};
use tracing::{debug, warn};

/// Compares the committer recorded in a changeset with the authenticated pusher.
///
/// Only [`IdentityKind::Normal`] users are checked: service accounts such as deploy
/// keys carry a key comment as their name and usually no email address.
pub struct IdentityValidator {
    require_matching_email: bool,
    require_matching_name: bool,
}

impl IdentityValidator {
    #[must_use]
    pub fn new(settings: &PolicySettings) -> Self {
        Self {
            require_matching_email: settings.require_matching_author_email,
            require_matching_name: settings.require_matching_author_name,
        }
    }

    #[must_use]
    pub fn check(
        &self,
        changeset: &Changeset,
        identity: &AuthenticatedIdentity,
    ) -> Vec<ValidationError> {
        if identity.kind != IdentityKind::Normal {
            return Vec::new();
        }

        let mut errors = Vec::new();
        errors.extend(self.check_email(changeset, identity));
        errors.extend(self.check_name(changeset, identity));
        errors
    }

    fn check_email(
        &self,
        changeset: &Changeset,
        identity: &AuthenticatedIdentity,
    ) -> Option<ValidationError> {
        if !self.require_matching_email {
            return None;
        }

        let Some(expected) = identity.email.as_deref() else {
            warn!(user = %identity.name, "pushing user has no email address, skipping email validation");
            return None;
        };

        let actual = &changeset.committer.email;
        debug!(expected, actual, "comparing committer email");

        if actual.to_lowercase() == expected.to_lowercase() {
            None
        } else {
            Some(ValidationError::new(
                ErrorKind::CommitterEmail,
                format!("expected committer email '{expected}' but found '{actual}'"),
            ))
        }
    }

    fn check_name(
        &self,
        changeset: &Changeset,
        identity: &AuthenticatedIdentity,
    ) -> Option<ValidationError> {
        if !self.require_matching_name {
            return None;
        }

        let expected = sanitize_name(Some(&identity.display_name)).unwrap_or_default();
        let actual = &changeset.committer.name;
        debug!(expected, actual, "comparing committer name");

        if actual.to_lowercase() == expected.to_lowercase() {
            None
        } else {
            Some(ValidationError::new(
                ErrorKind::CommitterName,
                format!("expected committer name '{expected}' but found '{actual}'"),
            ))
        }
    }
}
