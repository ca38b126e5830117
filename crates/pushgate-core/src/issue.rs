//! Issue-tracker keys of the form `PROJECT-123`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::PushgateError;

static ISSUE_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][A-Z0-9]+)-([0-9]+)").expect("issue key pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueKey {
    project_key: String,
    issue_number: String,
}

impl IssueKey {
    /// Every issue key found in `text`, in order of appearance.
    ///
    /// Repeated keys are kept; callers that need a set deduplicate themselves.
    #[must_use]
    pub fn parse_all(text: &str) -> Vec<Self> {
        ISSUE_KEY_PATTERN
            .captures_iter(text)
            .map(|caps| Self {
                project_key: caps[1].to_string(),
                issue_number: caps[2].to_string(),
            })
            .collect()
    }

    #[must_use]
    pub fn project_key(&self) -> &str {
        &self.project_key
    }

    #[must_use]
    pub fn issue_number(&self) -> &str {
        &self.issue_number
    }
}

impl FromStr for IssueKey {
    type Err = PushgateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut keys = Self::parse_all(s);
        match keys.pop() {
            Some(key) if keys.is_empty() && key.to_string() == s => Ok(key),
            _ => Err(PushgateError::InvalidIssueKey(s.to_string())),
        }
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.project_key, self.issue_number)
    }
}

impl Serialize for IssueKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
