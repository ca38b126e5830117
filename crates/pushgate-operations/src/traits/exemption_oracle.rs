use pushgate_core::AuthenticatedIdentity;

pub trait ExemptionOracle: Send + Sync {
    /// Whether `identity` is covered by one of the `exemptions` (user or group names)
    /// for a push to `ref_id`.
    fn is_exempt(
        &self,
        identity: Option<&AuthenticatedIdentity>,
        ref_id: &str,
        exemptions: &[String],
    ) -> bool;
}
