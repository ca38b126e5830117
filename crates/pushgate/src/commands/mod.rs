mod check_config;
mod pre_receive;
mod update;
mod validate;

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::error::Result;
use crate::output::OutputFormat;

/// Settings shared by every subcommand.
pub(crate) struct Context {
    /// Explicit repository; `None` means the one git runs the hook in.
    pub repository: Option<PathBuf>,
    /// Where configuration discovery starts.
    pub config_start: PathBuf,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Validate ref updates read from stdin, as git passes them to a pre-receive hook
    PreReceive,
    /// Validate a single ref update, as git passes it to an update hook
    Update(UpdateArgs),
    /// Load the configuration and compile its patterns without validating anything
    CheckConfig,
}

#[derive(Args)]
pub(crate) struct UpdateArgs {
    /// Full name of the ref being updated, e.g. refs/heads/main
    pub ref_name: String,
    /// Object id the ref currently points at (all zeros when it is created)
    pub old: String,
    /// Object id the ref will point at (all zeros when it is deleted)
    pub new: String,
}

impl Commands {
    pub(crate) fn execute(self, context: &Context) -> Result<()> {
        match self {
            Self::PreReceive => pre_receive::run(context, std::io::stdin().lock()),
            Self::Update(args) => update::run(context, args),
            Self::CheckConfig => check_config::run(context),
        }
    }
}
