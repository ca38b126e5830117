mod commands;
mod error;
mod logging;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::commands::{Commands, Context};
use crate::error::CliError;
use crate::output::OutputFormat;

const LONG_VERSION: &str = concat!(
    env!("PUSHGATE_VERSION"),
    " (built ",
    env!("PUSHGATE_BUILD_DATE"),
    ")"
);

#[derive(Parser)]
#[command(name = "pushgate")]
#[command(version = env!("PUSHGATE_VERSION"), long_version = LONG_VERSION)]
#[command(about = "Validate pushed commits from a git pre-receive or update hook", long_about = None)]
struct Cli {
    /// Repository to read commits from (default: the repository git runs the hook in)
    #[arg(long = "path", short = 'C', global = true)]
    path: Option<PathBuf>,

    /// Configuration file (default: nearest pushgate.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    /// How to report violations
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let context = match resolve_context(cli.path, cli.config, cli.format) {
        Ok(context) => context,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = cli.command.execute(&context) {
        print_error(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn resolve_context(
    repository: Option<PathBuf>,
    config: Option<PathBuf>,
    format: OutputFormat,
) -> Result<Context, CliError> {
    let config_start = match &repository {
        Some(path) => path.clone(),
        None => std::env::current_dir().map_err(CliError::CurrentDir)?,
    };

    Ok(Context {
        repository,
        config_start,
        config,
        format,
    })
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
