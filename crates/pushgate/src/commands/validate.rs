use pushgate_config::load_hook_config;
use pushgate_core::RefChange;
use pushgate_operations::providers::{
    CatalogIssueTracker, ConfiguredExemptions, EnvIdentityProvider, Git2ChangesetSource,
};
use pushgate_operations::validation::PushValidator;
use tracing::debug;

use super::Context;
use crate::error::{CliError, Result};

/// Validates `ref_changes` against the configured policies and reports the outcome.
pub(crate) fn run(context: &Context, ref_changes: &[RefChange]) -> Result<()> {
    let config = load_hook_config(&context.config_start, context.config.as_deref())?;

    let source = match &context.repository {
        Some(path) => Git2ChangesetSource::at(path),
        None => Git2ChangesetSource::from_env(),
    };
    let identity = EnvIdentityProvider::from_env()?;
    let exemptions = ConfiguredExemptions::new(config.exemption_groups().clone());
    let tracker = CatalogIssueTracker::new(config.tracker().cloned());

    let validator = PushValidator::new(source, identity, exemptions, tracker);
    let result = validator.validate_ref_changes(config.policy(), ref_changes)?;

    debug!(
        ref_changes = ref_changes.len(),
        violations = result.violations.len(),
        "validation finished"
    );

    context.format.formatter().report(&result)?;

    if result.is_accepted() {
        Ok(())
    } else {
        Err(CliError::Rejected {
            count: result.violations.len(),
        })
    }
}
