use std::io::BufRead;

use pushgate_core::RefChange;

use super::{Context, validate};
use crate::error::{CliError, Result};

pub(crate) fn run(context: &Context, input: impl BufRead) -> Result<()> {
    let ref_changes = read_ref_changes(input)?;
    validate::run(context, &ref_changes)
}

/// Parses `<old> <new> <ref>` lines, skipping blank ones.
fn read_ref_changes(input: impl BufRead) -> Result<Vec<RefChange>> {
    let mut ref_changes = Vec::new();
    for line in input.lines() {
        let line = line.map_err(CliError::Stdin)?;
        if line.trim().is_empty() {
            continue;
        }
        ref_changes.push(RefChange::from_hook_line(&line)?);
    }
    Ok(ref_changes)
}
