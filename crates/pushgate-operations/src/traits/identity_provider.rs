use pushgate_core::AuthenticatedIdentity;

pub trait IdentityProvider: Send + Sync {
    /// The user performing the push, or `None` for an unauthenticated push.
    fn current_identity(&self) -> Option<AuthenticatedIdentity>;
}
