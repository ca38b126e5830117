use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub(crate) const LOG_ENV_VAR: &str = "PUSHGATE_LOG";

/// Installs a stderr subscriber. `PUSHGATE_LOG` takes the usual filter directives;
/// `--verbose` overrides it with `debug`.
pub(crate) fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
