use indexmap::{IndexMap, IndexSet};
use pushgate_core::IssueKey;

use crate::error::ConfigError;
use crate::file::{ConfigFile, TrackerSection};
use crate::settings::PolicySettings;

/// Named groups of users, referenced from `branch-name-exemptions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExemptionGroups {
    groups: IndexMap<String, Vec<String>>,
}

impl ExemptionGroups {
    #[must_use]
    pub fn new(groups: IndexMap<String, Vec<String>>) -> Self {
        Self { groups }
    }

    #[must_use]
    pub fn members(&self, group: &str) -> &[String] {
        self.groups.get(group).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn is_member(&self, group: &str, user: &str) -> bool {
        self.members(group).iter().any(|member| member == user)
    }
}

/// An offline issue catalog standing in for a live tracker link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerCatalog {
    linked: bool,
    authorization_url: Option<String>,
    projects: IndexSet<String>,
    issues: IndexSet<IssueKey>,
    queries: IndexMap<String, IndexSet<IssueKey>>,
}

impl TrackerCatalog {
    #[must_use]
    pub fn new(linked: bool) -> Self {
        Self {
            linked,
            ..Self::default()
        }
    }

    fn from_section(section: TrackerSection) -> Result<Self, ConfigError> {
        let issues = parse_keys(&section.issues)?;

        let mut queries = IndexMap::new();
        for (query, keys) in &section.queries {
            queries.insert(query.clone(), parse_keys(keys)?);
        }

        // Issues named only in a query still exist, and so do their projects.
        let mut all_issues = issues;
        all_issues.extend(queries.values().flatten().cloned());

        let mut projects: IndexSet<String> = section.projects.into_iter().collect();
        projects.extend(all_issues.iter().map(|key| key.project_key().to_string()));

        Ok(Self {
            linked: section.linked,
            authorization_url: section.authorization_url,
            projects,
            issues: all_issues,
            queries,
        })
    }

    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    #[must_use]
    pub fn authorization_url(&self) -> Option<&str> {
        self.authorization_url.as_deref()
    }

    #[must_use]
    pub fn has_project(&self, project_key: &str) -> bool {
        self.projects.contains(project_key)
    }

    #[must_use]
    pub fn has_issue(&self, key: &IssueKey) -> bool {
        self.issues.contains(key)
    }

    /// `None` when the query is not part of the catalog at all.
    #[must_use]
    pub fn query_matches(&self, query: &str, key: &IssueKey) -> Option<bool> {
        self.queries.get(query).map(|keys| keys.contains(key))
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_authorization_url(mut self, url: &str) -> Self {
        self.authorization_url = Some(url.to_string());
        self
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_project(mut self, project_key: &str) -> Self {
        self.projects.insert(project_key.to_string());
        self
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_issue(mut self, key: IssueKey) -> Self {
        self.projects.insert(key.project_key().to_string());
        self.issues.insert(key);
        self
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_query_match(mut self, query: &str, key: IssueKey) -> Self {
        self.queries
            .entry(query.to_string())
            .or_default()
            .insert(key.clone());
        self.with_issue(key)
    }
}

fn parse_keys(raw: &[String]) -> Result<IndexSet<IssueKey>, ConfigError> {
    raw.iter()
        .map(|key| {
            key.parse::<IssueKey>()
                .map_err(|source| ConfigError::InvalidIssueKey {
                    key: key.clone(),
                    source,
                })
        })
        .collect()
}

/// Everything a hook invocation needs from `pushgate.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookConfig {
    policy: PolicySettings,
    exemption_groups: ExemptionGroups,
    tracker: Option<TrackerCatalog>,
}

impl HookConfig {
    pub(crate) fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let tracker = file.tracker.map(TrackerCatalog::from_section).transpose()?;
        Ok(Self {
            policy: file.policy,
            exemption_groups: ExemptionGroups::new(file.groups),
            tracker,
        })
    }

    #[must_use]
    pub fn policy(&self) -> &PolicySettings {
        &self.policy
    }

    #[must_use]
    pub fn exemption_groups(&self) -> &ExemptionGroups {
        &self.exemption_groups
    }

    /// Configured tracker, or `None` when no `[tracker]` section exists.
    #[must_use]
    pub fn tracker(&self) -> Option<&TrackerCatalog> {
        self.tracker.as_ref()
    }
}
