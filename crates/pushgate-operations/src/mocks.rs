use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use pushgate_core::{AuthenticatedIdentity, Changeset, Committer, IssueKey, RefChange};

use crate::Result;
use crate::traits::{
    ChangesetSource, ExemptionOracle, IdentityProvider, IssueTracker, TrackerError,
    TrackerResult,
};

pub const AUTH_URL: &str = "https://tracker.example.com/plugins/servlet/oauth/authorize";

#[must_use]
pub fn changeset(id: &str, message: &str) -> Changeset {
    Changeset {
        id: id.to_string(),
        committer: Committer {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        },
        message: message.to_string(),
        parent_count: 1,
    }
}

#[must_use]
pub fn jane() -> AuthenticatedIdentity {
    AuthenticatedIdentity::normal("jane", "Jane Doe", "jane@example.com")
}

pub struct MockChangesetSource {
    changesets: Vec<Changeset>,
    requested: Mutex<Vec<String>>,
}

impl MockChangesetSource {
    #[must_use]
    pub fn new(changesets: Vec<Changeset>) -> Self {
        Self {
            changesets,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn requested_refs(&self) -> Vec<String> {
        self.requested.lock().expect("lock poisoned").clone()
    }
}

impl ChangesetSource for MockChangesetSource {
    fn new_changesets(&self, ref_change: &RefChange) -> Result<Vec<Changeset>> {
        self.requested
            .lock()
            .expect("lock poisoned")
            .push(ref_change.ref_id().to_string());
        Ok(self.changesets.clone())
    }
}

impl ChangesetSource for Arc<MockChangesetSource> {
    fn new_changesets(&self, ref_change: &RefChange) -> Result<Vec<Changeset>> {
        (**self).new_changesets(ref_change)
    }
}

pub struct MockIdentityProvider(pub Option<AuthenticatedIdentity>);

impl IdentityProvider for MockIdentityProvider {
    fn current_identity(&self) -> Option<AuthenticatedIdentity> {
        self.0.clone()
    }
}

pub struct MockExemptionOracle {
    exempt: bool,
    calls: Mutex<Vec<String>>,
}

impl MockExemptionOracle {
    #[must_use]
    pub fn new(exempt: bool) -> Self {
        Self {
            exempt,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("lock poisoned").len()
    }
}

impl ExemptionOracle for MockExemptionOracle {
    fn is_exempt(
        &self,
        _identity: Option<&AuthenticatedIdentity>,
        ref_id: &str,
        _exemptions: &[String],
    ) -> bool {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push(ref_id.to_string());
        self.exempt
    }
}

impl ExemptionOracle for Arc<MockExemptionOracle> {
    fn is_exempt(
        &self,
        identity: Option<&AuthenticatedIdentity>,
        ref_id: &str,
        exemptions: &[String],
    ) -> bool {
        (**self).is_exempt(identity, ref_id, exemptions)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockResponse {
    Yes,
    No,
    AuthRequired,
    TransportFailure,
}

impl MockResponse {
    fn into_result(self) -> TrackerResult<bool> {
        match self {
            Self::Yes => Ok(true),
            Self::No => Ok(false),
            Self::AuthRequired => Err(TrackerError::AuthenticationRequired {
                authorization_url: AUTH_URL.to_string(),
            }),
            Self::TransportFailure => Err(TrackerError::transport("connection reset by peer")),
        }
    }
}

/// Tracker double that answers from tables and records every call it receives.
/// Anything not in a table answers [`MockResponse::No`].
pub struct MockIssueTracker {
    linked: bool,
    projects: HashMap<String, MockResponse>,
    issues: HashMap<String, MockResponse>,
    queries: HashMap<(String, String), MockResponse>,
    calls: Mutex<Vec<String>>,
}

impl MockIssueTracker {
    #[must_use]
    pub fn linked() -> Self {
        Self {
            linked: true,
            projects: HashMap::new(),
            issues: HashMap::new(),
            queries: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn unlinked() -> Self {
        Self {
            linked: false,
            ..Self::linked()
        }
    }

    #[must_use]
    pub fn with_project(mut self, project_key: &str, response: MockResponse) -> Self {
        self.projects.insert(project_key.to_string(), response);
        self
    }

    #[must_use]
    pub fn with_issue(mut self, key: &str, response: MockResponse) -> Self {
        self.issues.insert(key.to_string(), response);
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: &str, key: &str, response: MockResponse) -> Self {
        self.queries
            .insert((query.to_string(), key.to_string()), response);
        self
    }

    /// Calls in the order received, e.g. `issue_exists PROJ-1`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("lock poisoned").push(call);
    }
}

impl IssueTracker for MockIssueTracker {
    fn link_exists(&self) -> bool {
        self.linked
    }

    fn issue_exists(&self, key: &IssueKey) -> TrackerResult<bool> {
        let key = key.to_string();
        self.record(format!("issue_exists {key}"));
        self.issues
            .get(&key)
            .copied()
            .unwrap_or(MockResponse::No)
            .into_result()
    }

    fn project_exists(&self, project_key: &str) -> TrackerResult<bool> {
        self.record(format!("project_exists {project_key}"));
        self.projects
            .get(project_key)
            .copied()
            .unwrap_or(MockResponse::No)
            .into_result()
    }

    fn matches_query(&self, query: &str, key: &IssueKey) -> TrackerResult<bool> {
        let key = key.to_string();
        self.record(format!("matches_query {key}"));
        self.queries
            .get(&(query.to_string(), key))
            .copied()
            .unwrap_or(MockResponse::No)
            .into_result()
    }
}

impl IssueTracker for Arc<MockIssueTracker> {
    fn link_exists(&self) -> bool {
        (**self).link_exists()
    }

    fn issue_exists(&self, key: &IssueKey) -> TrackerResult<bool> {
        (**self).issue_exists(key)
    }

    fn project_exists(&self, project_key: &str) -> TrackerResult<bool> {
        (**self).project_exists(project_key)
    }

    fn matches_query(&self, query: &str, key: &IssueKey) -> TrackerResult<bool> {
        (**self).matches_query(query, key)
    }
}
