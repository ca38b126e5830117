use pushgate_core::{AuthenticatedIdentity, IdentityKind};

use crate::Result;
use crate::traits::IdentityProvider;

pub const USER_NAME_VAR: &str = "PUSHGATE_USER_NAME";
pub const USER_DISPLAY_NAME_VAR: &str = "PUSHGATE_USER_DISPLAY_NAME";
pub const USER_EMAIL_VAR: &str = "PUSHGATE_USER_EMAIL";
pub const USER_KIND_VAR: &str = "PUSHGATE_USER_KIND";

/// Identity handed to the hook by the git server through `PUSHGATE_USER_*` variables.
///
/// Without `PUSHGATE_USER_NAME` the push counts as unauthenticated. The display name
/// defaults to the login name and the kind to `normal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvIdentityProvider {
    identity: Option<AuthenticatedIdentity>,
}

impl EnvIdentityProvider {
    /// # Errors
    ///
    /// Returns an error if `PUSHGATE_USER_KIND` holds an unknown kind.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// # Errors
    ///
    /// Returns an error if the kind variable holds an unknown kind.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let value = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let Some(name) = value(USER_NAME_VAR) else {
            return Ok(Self { identity: None });
        };

        let kind = match value(USER_KIND_VAR) {
            Some(kind) => kind.trim().parse::<IdentityKind>()?,
            None => IdentityKind::default(),
        };

        Ok(Self {
            identity: Some(AuthenticatedIdentity {
                display_name: value(USER_DISPLAY_NAME_VAR).unwrap_or_else(|| name.clone()),
                email: value(USER_EMAIL_VAR),
                name,
                kind,
            }),
        })
    }
}

impl IdentityProvider for EnvIdentityProvider {
    fn current_identity(&self) -> Option<AuthenticatedIdentity> {
        self.identity.clone()
    }
}
