use pushgate_operations::validation::ValidationResult;

use super::OutputFormatter;
use crate::error::Result;

pub(crate) struct PlainTextFormatter;

impl PlainTextFormatter {
    pub(crate) fn format_rejection(result: &ValidationResult) -> String {
        let mut output = String::new();
        output.push_str("\npush rejected by pushgate\n\n");
        for violation in &result.violations {
            output.push_str(&format!("  {violation}\n"));
        }
        output.push('\n');
        output
    }
}

impl OutputFormatter for PlainTextFormatter {
    fn report(&self, result: &ValidationResult) -> Result<()> {
        // Accepted pushes stay silent so git output is not cluttered.
        if !result.is_accepted() {
            eprint!("{}", Self::format_rejection(result));
        }
        Ok(())
    }
}
