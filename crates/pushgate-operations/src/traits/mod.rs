mod changeset_source;
mod exemption_oracle;
mod identity_provider;
mod issue_tracker;

pub use changeset_source::ChangesetSource;
pub use exemption_oracle::ExemptionOracle;
pub use identity_provider::IdentityProvider;
pub use issue_tracker::{IssueTracker, TrackerError, TrackerResult};
