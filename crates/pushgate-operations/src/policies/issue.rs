use pushgate_config::PolicySettings;
use pushgate_core::{ErrorKind, IssueKey, ValidationError};
use regex::Regex;
use tracing::{debug, error};

use super::PolicyPatterns;
use crate::traits::{IssueTracker, TrackerError};

const AUTH_FAILURE: &str = "Unable to validate issue because there was an authentication failure when communicating with the issue tracker.";

/// Requires every commit message to reference issues that exist in the tracker.
///
/// Keys are taken from capture group 1 of `commit-message-regex` when the pattern
/// has one and matches, otherwise from the whole message. With
/// `ignore-unknown-issue-project-keys`, keys whose project the tracker does not
/// know are dropped before validation; a tracker failure while filtering aborts
/// the check, while failures on individual keys are reported per key.
pub struct IssueReferencePolicy<'a, T: ?Sized> {
    enabled: bool,
    ignore_unknown_projects: bool,
    scope: Option<&'a Regex>,
    query: Option<&'a str>,
    tracker: &'a T,
}

impl<'a, T: IssueTracker + ?Sized> IssueReferencePolicy<'a, T> {
    pub fn new(settings: &'a PolicySettings, patterns: &'a PolicyPatterns, tracker: &'a T) -> Self {
        Self {
            enabled: settings.require_jira_issue,
            ignore_unknown_projects: settings.ignore_unknown_issue_project_keys,
            scope: patterns.issue_scope.as_ref(),
            query: settings.issue_jql_matcher(),
            tracker,
        }
    }

    #[must_use]
    pub fn check(&self, message: &str) -> Vec<ValidationError> {
        if !self.enabled {
            return Vec::new();
        }

        if !self.tracker.link_exists() {
            return vec![ValidationError::unspecified(
                "Unable to verify issue because the issue tracker link does not exist",
            )];
        }

        let keys = match self.candidate_keys(message) {
            Ok(keys) => keys,
            Err(TrackerError::AuthenticationRequired { authorization_url }) => {
                return authentication_errors(None, &authorization_url);
            }
            Err(TrackerError::Transport(source)) => {
                error!(error = %source, "unexpected error while filtering issue project keys");
                return vec![ValidationError::unspecified(
                    "Unable to validate issues due to an unexpected error. Please see the server logs.",
                )];
            }
        };

        if keys.is_empty() {
            return vec![ValidationError::unspecified(
                "No issue found in commit message.",
            )];
        }

        keys.iter().flat_map(|key| self.check_key(key)).collect()
    }

    fn candidate_keys(&self, message: &str) -> Result<Vec<IssueKey>, TrackerError> {
        let keys = self.extract_keys(message);
        debug!(?keys, "extracted issue keys from commit message");

        if !self.ignore_unknown_projects {
            return Ok(keys);
        }

        let mut known = Vec::with_capacity(keys.len());
        for key in keys {
            if self.tracker.project_exists(key.project_key())? {
                known.push(key);
            } else {
                debug!(%key, "dropping issue key with unknown project");
            }
        }
        Ok(known)
    }

    fn extract_keys(&self, message: &str) -> Vec<IssueKey> {
        let Some(scope) = self.scope else {
            return IssueKey::parse_all(message);
        };

        if scope.captures_len() < 2 {
            return IssueKey::parse_all(message);
        }

        match scope.captures(message) {
            Some(captures) => captures
                .get(1)
                .map(|group| IssueKey::parse_all(group.as_str()))
                .unwrap_or_default(),
            None => IssueKey::parse_all(message),
        }
    }

    fn check_key(&self, key: &IssueKey) -> Vec<ValidationError> {
        match self.validate_key(key) {
            Ok(errors) => errors,
            Err(TrackerError::AuthenticationRequired { authorization_url }) => {
                authentication_errors(Some(key), &authorization_url)
            }
            Err(TrackerError::Transport(source)) => {
                error!(%key, error = %source, "unexpected error while validating issue");
                vec![ValidationError::unspecified(format!(
                    "{key}: Unable to validate issue due to an unexpected error. Please see the server logs."
                ))]
            }
        }
    }

    fn validate_key(&self, key: &IssueKey) -> Result<Vec<ValidationError>, TrackerError> {
        if !self.tracker.issue_exists(key)? {
            return Ok(vec![ValidationError::unspecified(format!(
                "{key}: issue does not exist"
            ))]);
        }

        if let Some(query) = self.query {
            if !self.tracker.matches_query(query, key)? {
                return Ok(vec![ValidationError::new(
                    ErrorKind::IssueJql,
                    format!("{key}: issue does not match JQL query: {query}"),
                )]);
            }
        }

        Ok(Vec::new())
    }
}

fn authentication_errors(key: Option<&IssueKey>, authorization_url: &str) -> Vec<ValidationError> {
    let failure = ValidationError::unspecified(AUTH_FAILURE);
    vec![
        match key {
            Some(key) => failure.prepend_text(&key.to_string()),
            None => failure,
        },
        ValidationError::unspecified(format!(
            "To authenticate, visit {authorization_url} in a web browser."
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{AUTH_URL, MockIssueTracker, MockResponse};

    fn settings() -> PolicySettings {
        PolicySettings {
            require_jira_issue: true,
            ..PolicySettings::default()
        }
    }

    fn check(settings: &PolicySettings, tracker: &MockIssueTracker, message: &str) -> Vec<String> {
        let patterns = PolicyPatterns::compile(settings).expect("valid patterns");
        IssueReferencePolicy::new(settings, &patterns, tracker)
            .check(message)
            .iter()
            .map(|e| e.message().to_string())
            .collect()
    }

    #[test]
    fn disabled_policy_never_touches_tracker() {
        let tracker = MockIssueTracker::unlinked();

        let errors = check(&PolicySettings::default(), &tracker, "no keys");

        assert!(errors.is_empty());
        assert!(tracker.calls().is_empty());
    }

    #[test]
    fn missing_link_reports_once_and_stops() {
        let tracker = MockIssueTracker::unlinked();

        let errors = check(&settings(), &tracker, "PROJ-1 PROJ-2");

        assert_eq!(
            errors,
            vec!["Unable to verify issue because the issue tracker link does not exist"]
        );
        assert!(tracker.calls().is_empty());
    }

    #[test]
    fn existing_issues_pass() {
        let tracker = MockIssueTracker::linked()
            .with_issue("PROJ-1", MockResponse::Yes)
            .with_issue("ABC-2", MockResponse::Yes);

        let errors = check(&settings(), &tracker, "PROJ-1 and ABC-2");

        assert!(errors.is_empty());
        assert_eq!(tracker.calls(), vec!["issue_exists PROJ-1", "issue_exists ABC-2"]);
    }

    #[test]
    fn message_without_keys_is_rejected() {
        let tracker = MockIssueTracker::linked();

        let errors = check(&settings(), &tracker, "fix typo");

        assert_eq!(errors, vec!["No issue found in commit message."]);
    }

    #[test]
    fn every_missing_issue_is_reported() {
        let tracker = MockIssueTracker::linked().with_issue("PROJ-2", MockResponse::Yes);

        let errors = check(&settings(), &tracker, "PROJ-1 PROJ-2 PROJ-3");

        assert_eq!(
            errors,
            vec!["PROJ-1: issue does not exist", "PROJ-3: issue does not exist"]
        );
    }

    #[test]
    fn query_is_checked_only_for_existing_issues() {
        let settings = PolicySettings {
            issue_jql_matcher: "status = Open".to_string(),
            ..settings()
        };
        let tracker = MockIssueTracker::linked()
            .with_issue("PROJ-1", MockResponse::Yes)
            .with_issue("PROJ-2", MockResponse::Yes)
            .with_query("status = Open", "PROJ-1", MockResponse::Yes);

        let patterns = PolicyPatterns::compile(&settings).expect("valid patterns");
        let errors = IssueReferencePolicy::new(&settings, &patterns, &tracker)
            .check("PROJ-1 PROJ-2 PROJ-3");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind(), ErrorKind::IssueJql);
        assert_eq!(
            errors[0].message(),
            "PROJ-2: issue does not match JQL query: status = Open"
        );
        assert_eq!(errors[1].message(), "PROJ-3: issue does not exist");
        assert!(!tracker.calls().contains(&"matches_query PROJ-3".to_string()));
    }

    #[test]
    fn capture_group_scopes_key_extraction() {
        let settings = PolicySettings {
            commit_message_regex: "([A-Z]+-\\d+) .*".to_string(),
            ..settings()
        };
        let tracker = MockIssueTracker::linked().with_issue("PROJ-5", MockResponse::Yes);

        let errors = check(&settings, &tracker, "PROJ-5 mentions OTHER-9");

        assert!(errors.is_empty());
        assert_eq!(tracker.calls(), vec!["issue_exists PROJ-5"]);
    }

    #[test]
    fn capture_group_ignores_keys_before_it() {
        let settings = PolicySettings {
            commit_message_regex: ".*(PROJ-\\d+).*".to_string(),
            ..settings()
        };
        let tracker = MockIssueTracker::linked().with_issue("PROJ-5", MockResponse::Yes);

        let errors = check(&settings, &tracker, "OTHER-9 then PROJ-5 done");

        assert!(errors.is_empty());
        assert_eq!(tracker.calls(), vec!["issue_exists PROJ-5"]);
    }

    #[test]
    fn pattern_without_group_uses_whole_message() {
        let settings = PolicySettings {
            commit_message_regex: "[A-Z]+-\\d+ .*".to_string(),
            ..settings()
        };
        let tracker = MockIssueTracker::linked()
            .with_issue("PROJ-5", MockResponse::Yes)
            .with_issue("OTHER-9", MockResponse::Yes);

        let errors = check(&settings, &tracker, "PROJ-5 mentions OTHER-9");

        assert!(errors.is_empty());
        assert_eq!(
            tracker.calls(),
            vec!["issue_exists PROJ-5", "issue_exists OTHER-9"]
        );
    }

    #[test]
    fn unmatched_pattern_falls_back_to_whole_message() {
        let settings = PolicySettings {
            commit_message_regex: "([A-Z]+-\\d+)".to_string(),
            ..settings()
        };
        let tracker = MockIssueTracker::linked().with_issue("PROJ-5", MockResponse::Yes);

        let errors = check(&settings, &tracker, "see PROJ-5");

        assert!(errors.is_empty());
    }

    #[test]
    fn non_participating_group_yields_no_keys() {
        let settings = PolicySettings {
            commit_message_regex: "(?:([A-Z]+-\\d+) )?.*".to_string(),
            ..settings()
        };
        let tracker = MockIssueTracker::linked().with_issue("PROJ-5", MockResponse::Yes);

        let errors = check(&settings, &tracker, "plain PROJ-5");

        assert_eq!(errors, vec!["No issue found in commit message."]);
    }

    #[test]
    fn unknown_projects_are_dropped_when_enabled() {
        let settings = PolicySettings {
            ignore_unknown_issue_project_keys: true,
            ..settings()
        };
        let tracker = MockIssueTracker::linked()
            .with_project("PROJ", MockResponse::Yes)
            .with_issue("PROJ-1", MockResponse::Yes);

        let errors = check(&settings, &tracker, "PROJ-1 UTF-8");

        assert!(errors.is_empty());
        assert_eq!(
            tracker.calls(),
            vec!["project_exists PROJ", "project_exists UTF", "issue_exists PROJ-1"]
        );
    }

    #[test]
    fn all_keys_dropped_means_no_issue_found() {
        let settings = PolicySettings {
            ignore_unknown_issue_project_keys: true,
            ..settings()
        };
        let tracker = MockIssueTracker::linked();

        let errors = check(&settings, &tracker, "UTF-8 fix");

        assert_eq!(errors, vec!["No issue found in commit message."]);
    }

    #[test]
    fn auth_failure_while_filtering_aborts() {
        let settings = PolicySettings {
            ignore_unknown_issue_project_keys: true,
            ..settings()
        };
        let tracker = MockIssueTracker::linked().with_project("PROJ", MockResponse::AuthRequired);

        let errors = check(&settings, &tracker, "PROJ-1 ABC-2");

        assert_eq!(
            errors,
            vec![
                AUTH_FAILURE.to_string(),
                format!("To authenticate, visit {AUTH_URL} in a web browser."),
            ]
        );
        assert_eq!(tracker.calls(), vec!["project_exists PROJ"]);
    }

    #[test]
    fn transport_failure_while_filtering_aborts() {
        let settings = PolicySettings {
            ignore_unknown_issue_project_keys: true,
            ..settings()
        };
        let tracker =
            MockIssueTracker::linked().with_project("PROJ", MockResponse::TransportFailure);

        let errors = check(&settings, &tracker, "PROJ-1 ABC-2");

        assert_eq!(
            errors,
            vec!["Unable to validate issues due to an unexpected error. Please see the server logs."]
        );
        assert_eq!(tracker.calls().len(), 1);
    }

    #[test]
    fn auth_failure_on_one_key_continues_with_next() {
        let tracker = MockIssueTracker::linked()
            .with_issue("PROJ-1", MockResponse::AuthRequired)
            .with_issue("PROJ-2", MockResponse::Yes);

        let errors = check(&settings(), &tracker, "PROJ-1 PROJ-2 PROJ-3");

        assert_eq!(
            errors,
            vec![
                format!("PROJ-1: {AUTH_FAILURE}"),
                format!("To authenticate, visit {AUTH_URL} in a web browser."),
                "PROJ-3: issue does not exist".to_string(),
            ]
        );
    }

    #[test]
    fn transport_failure_on_one_key_continues_with_next() {
        let settings = PolicySettings {
            issue_jql_matcher: "status = Open".to_string(),
            ..settings()
        };
        let tracker = MockIssueTracker::linked()
            .with_issue("PROJ-1", MockResponse::Yes)
            .with_query("status = Open", "PROJ-1", MockResponse::TransportFailure)
            .with_issue("PROJ-2", MockResponse::Yes)
            .with_query("status = Open", "PROJ-2", MockResponse::Yes);

        let errors = check(&settings, &tracker, "PROJ-1 PROJ-2");

        assert_eq!(
            errors,
            vec!["PROJ-1: Unable to validate issue due to an unexpected error. Please see the server logs."]
        );
    }

    #[test]
    fn duplicate_keys_are_checked_each_time() {
        let tracker = MockIssueTracker::linked();

        let errors = check(&settings(), &tracker, "PROJ-1 again PROJ-1");

        assert_eq!(errors.len(), 2);
        assert_eq!(tracker.calls().len(), 2);
    }
}
