use clap::ValueEnum;
use pushgate_operations::validation::ValidationResult;

use super::{JsonFormatter, PlainTextFormatter};
use crate::error::Result;

#[derive(ValueEnum, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// Human-readable report on stderr, relayed by git to the pusher
    #[default]
    Plain,
    /// Machine-readable report on stdout
    Json,
}

impl OutputFormat {
    pub(crate) fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Plain => Box::new(PlainTextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

pub(crate) trait OutputFormatter {
    /// Writes the outcome of a validation to wherever this format reports to.
    fn report(&self, result: &ValidationResult) -> Result<()>;
}
