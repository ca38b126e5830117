use pushgate_core::Violation;
use pushgate_operations::validation::ValidationResult;
use serde::Serialize;

use super::OutputFormatter;
use crate::error::Result;

pub(crate) struct JsonFormatter;

#[derive(Serialize)]
struct Report<'a> {
    accepted: bool,
    violations: &'a [Violation],
}

impl JsonFormatter {
    pub(crate) fn render(result: &ValidationResult) -> Result<String> {
        let report = Report {
            accepted: result.is_accepted(),
            violations: &result.violations,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

impl OutputFormatter for JsonFormatter {
    fn report(&self, result: &ValidationResult) -> Result<()> {
        println!("{}", Self::render(result)?);
        Ok(())
    }
}
