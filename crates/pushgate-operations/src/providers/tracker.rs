use pushgate_config::TrackerCatalog;
use pushgate_core::IssueKey;

use crate::traits::{IssueTracker, TrackerError, TrackerResult};

/// Issue tracker answered from the `[tracker]` section of the configuration.
///
/// Without a catalog there is no tracker link. A catalog with an
/// `authorization-url` describes a link that still needs the pushing user to
/// authorize it, so every lookup fails with that URL. Queries the catalog has no
/// entry for cannot be evaluated offline and fail as transport errors.
pub struct CatalogIssueTracker {
    catalog: Option<TrackerCatalog>,
}

impl CatalogIssueTracker {
    #[must_use]
    pub fn new(catalog: Option<TrackerCatalog>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn unlinked() -> Self {
        Self { catalog: None }
    }

    fn linked_catalog(&self) -> TrackerResult<&TrackerCatalog> {
        let catalog = self
            .catalog
            .as_ref()
            .filter(|catalog| catalog.is_linked())
            .ok_or_else(|| TrackerError::transport("issue tracker is not linked"))?;

        match catalog.authorization_url() {
            Some(url) => Err(TrackerError::AuthenticationRequired {
                authorization_url: url.to_string(),
            }),
            None => Ok(catalog),
        }
    }
}

impl IssueTracker for CatalogIssueTracker {
    fn link_exists(&self) -> bool {
        self.catalog.as_ref().is_some_and(TrackerCatalog::is_linked)
    }

    fn issue_exists(&self, key: &IssueKey) -> TrackerResult<bool> {
        Ok(self.linked_catalog()?.has_issue(key))
    }

    fn project_exists(&self, project_key: &str) -> TrackerResult<bool> {
        Ok(self.linked_catalog()?.has_project(project_key))
    }

    fn matches_query(&self, query: &str, key: &IssueKey) -> TrackerResult<bool> {
        self.linked_catalog()?
            .query_matches(query, key)
            .ok_or_else(|| {
                TrackerError::transport(format!("query '{query}' is not in the issue catalog"))
            })
    }
}
