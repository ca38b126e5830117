use pushgate_config::PolicySettings;
use regex::{Regex, RegexBuilder};

use crate::{OperationError, Result};

/// Every configured pattern, compiled once per validation pass.
///
/// Compiling up front means a malformed pattern aborts the push before any
/// changeset is looked at, instead of surfacing halfway through as a per-commit error.
#[derive(Debug)]
pub struct PolicyPatterns {
    pub(crate) branch_name: Option<Regex>,
    pub(crate) exclude: Option<Regex>,
    pub(crate) message: Option<Regex>,
    pub(crate) issue_scope: Option<Regex>,
}

impl PolicyPatterns {
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidPattern`] naming the first option whose pattern does not compile.
    pub fn compile(settings: &PolicySettings) -> Result<Self> {
        let branch_name = settings
            .branch_name_regex()
            .map(|p| full_match("branch-name-regex", p, false))
            .transpose()?;

        let exclude = settings
            .exclude_by_regex()
            .map(|p| {
                Regex::new(p).map_err(|source| OperationError::InvalidPattern {
                    option: "exclude-by-regex",
                    pattern: p.to_string(),
                    source,
                })
            })
            .transpose()?;

        let message = settings
            .commit_message_regex()
            .map(|p| full_match("commit-message-regex", p, true))
            .transpose()?;

        // Issue keys are scoped with the same pattern, but single-line.
        let issue_scope = settings
            .commit_message_regex()
            .map(|p| full_match("commit-message-regex", p, false))
            .transpose()?;

        Ok(Self {
            branch_name,
            exclude,
            message,
            issue_scope,
        })
    }
}

/// Compiles `pattern` so that a match must span the entire input.
fn full_match(option: &'static str, pattern: &str, multi_line: bool) -> Result<Regex> {
    // Validate the bare pattern first so the error points at what the admin wrote.
    Regex::new(pattern).map_err(|source| OperationError::InvalidPattern {
        option,
        pattern: pattern.to_string(),
        source,
    })?;

    RegexBuilder::new(&format!(r"\A(?:{pattern})\z"))
        .multi_line(multi_line)
        .crlf(multi_line)
        .build()
        .map_err(|source| OperationError::InvalidPattern {
            option,
            pattern: pattern.to_string(),
            source,
        })
}
