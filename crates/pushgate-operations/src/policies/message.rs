use pushgate_config::PolicySettings;
use pushgate_core::{ErrorKind, ValidationError};
use regex::Regex;

use super::PolicyPatterns;

/// Requires the whole commit message to match `commit-message-regex`.
pub struct MessagePolicy<'a> {
    pattern: Option<(&'a Regex, &'a str)>,
}

impl<'a> MessagePolicy<'a> {
    #[must_use]
    pub fn new(settings: &'a PolicySettings, patterns: &'a PolicyPatterns) -> Self {
        Self {
            pattern: patterns.message.as_ref().zip(settings.commit_message_regex()),
        }
    }

    #[must_use]
    pub fn check(&self, message: &str) -> Vec<ValidationError> {
        match self.pattern {
            Some((regex, raw)) if !regex.is_match(message) => vec![ValidationError::new(
                ErrorKind::CommitRegex,
                format!("commit message doesn't match regex: {raw}"),
            )],
            _ => Vec::new(),
        }
    }
}
