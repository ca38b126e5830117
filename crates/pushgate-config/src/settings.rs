use serde::Deserialize;

/// The policy option set evaluated for every push.
///
/// Boolean options default to off and string options to empty, which disables the
/// check they control. Keys are kebab-case in `pushgate.toml`; the camelCase names
/// used by older hook configurations are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PolicySettings {
    /// Pattern branch short names must fully match.
    #[serde(alias = "branchNameRegex")]
    pub branch_name_regex: String,
    /// Users or groups allowed to push branches that violate `branch_name_regex`.
    #[serde(alias = "branchNameExemptions")]
    pub branch_name_exemptions: Vec<String>,
    #[serde(alias = "excludeMergeCommits")]
    pub exclude_merge_commits: bool,
    #[serde(alias = "excludeServiceUserCommits")]
    pub exclude_service_user_commits: bool,
    /// Skip message and issue checks when this pattern is found in the message.
    #[serde(alias = "excludeByRegex")]
    pub exclude_by_regex: String,
    /// Pattern the whole message must match; capture group 1, if any, scopes issue-key extraction.
    #[serde(alias = "commitMessageRegex")]
    pub commit_message_regex: String,
    #[serde(alias = "requireMatchingAuthorEmail")]
    pub require_matching_author_email: bool,
    #[serde(alias = "requireMatchingAuthorName")]
    pub require_matching_author_name: bool,
    #[serde(alias = "requireJiraIssue")]
    pub require_jira_issue: bool,
    #[serde(alias = "ignoreUnknownIssueProjectKeys")]
    pub ignore_unknown_issue_project_keys: bool,
    /// Query every referenced issue must satisfy.
    #[serde(alias = "issueJqlMatcher")]
    pub issue_jql_matcher: String,
}

impl PolicySettings {
    #[must_use]
    pub fn branch_name_regex(&self) -> Option<&str> {
        non_empty(&self.branch_name_regex)
    }

    #[must_use]
    pub fn exclude_by_regex(&self) -> Option<&str> {
        non_empty(&self.exclude_by_regex)
    }

    #[must_use]
    pub fn commit_message_regex(&self) -> Option<&str> {
        non_empty(&self.commit_message_regex)
    }

    #[must_use]
    pub fn issue_jql_matcher(&self) -> Option<&str> {
        non_empty(&self.issue_jql_matcher)
    }

    /// Whether any option is enabled at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        *self != Self::default()
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}
