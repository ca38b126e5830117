use pushgate_config::ExemptionGroups;
use pushgate_core::AuthenticatedIdentity;
use tracing::debug;

use crate::traits::ExemptionOracle;

/// Exempts a pusher named directly in the exemption list, or who belongs to a
/// group from `[groups]` that is named there. Unauthenticated pushes are never exempt.
pub struct ConfiguredExemptions {
    groups: ExemptionGroups,
}

impl ConfiguredExemptions {
    #[must_use]
    pub fn new(groups: ExemptionGroups) -> Self {
        Self { groups }
    }
}

impl ExemptionOracle for ConfiguredExemptions {
    fn is_exempt(
        &self,
        identity: Option<&AuthenticatedIdentity>,
        ref_id: &str,
        exemptions: &[String],
    ) -> bool {
        let Some(identity) = identity else {
            return false;
        };

        let matched = exemptions.iter().find(|principal| {
            **principal == identity.name || self.groups.is_member(principal, &identity.name)
        });

        if let Some(principal) = matched {
            debug!(user = %identity.name, ref_id, principal = %principal, "pusher is exempt");
            true
        } else {
            false
        }
    }
}
