use pushgate_config::{CONFIG_FILE_NAME, resolve_hook_config};
use pushgate_operations::policies::PolicyPatterns;

use super::Context;
use crate::error::Result;

pub(crate) fn run(context: &Context) -> Result<()> {
    let (path, config) = resolve_hook_config(&context.config_start, context.config.as_deref())?;

    PolicyPatterns::compile(config.policy())?;

    match path {
        Some(path) if config.policy().is_enabled() => {
            println!("{}: configuration is valid", path.display());
        }
        Some(path) => println!("{}: configuration is valid, but no policy is enabled", path.display()),
        None => println!("no {CONFIG_FILE_NAME} found, all policies are disabled"),
    }
    Ok(())
}
