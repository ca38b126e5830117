//! The individual push policies, evaluated in order by
//! [`PushValidator`](crate::validation::PushValidator).

mod branch;
mod exclusion;
mod identity;
mod issue;
mod message;
mod patterns;

pub use branch::BranchNamePolicy;
pub use exclusion::ExclusionPolicy;
pub use identity::IdentityValidator;
pub use issue::IssueReferencePolicy;
pub use message::MessagePolicy;
pub use patterns::PolicyPatterns;
