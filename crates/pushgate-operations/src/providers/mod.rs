mod exemptions;
mod git;
mod identity;
mod tracker;

pub use exemptions::ConfiguredExemptions;
pub use git::Git2ChangesetSource;
pub use identity::{
    EnvIdentityProvider, USER_DISPLAY_NAME_VAR, USER_EMAIL_VAR, USER_KIND_VAR, USER_NAME_VAR,
};
pub use tracker::CatalogIssueTracker;
