use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PushgateError, Result};

pub const BRANCH_PREFIX: &str = "refs/heads/";
pub const TAG_PREFIX: &str = "refs/tags/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefChangeType {
    Add,
    Update,
    Delete,
}

impl fmt::Display for RefChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "ADD",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        };
        write!(f, "{name}")
    }
}

/// A single ref update requested by a push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefChange {
    ref_id: String,
    from_hash: String,
    to_hash: String,
    change_type: RefChangeType,
}

impl RefChange {
    /// Builds a ref change, deriving its type from all-zero object ids.
    ///
    /// # Errors
    ///
    /// Returns [`PushgateError::InvalidObjectId`] if either hash is not a hex object id.
    pub fn new(
        ref_id: impl Into<String>,
        from_hash: impl Into<String>,
        to_hash: impl Into<String>,
    ) -> Result<Self> {
        let from_hash = from_hash.into();
        let to_hash = to_hash.into();
        validate_object_id(&from_hash)?;
        validate_object_id(&to_hash)?;

        let change_type = if is_null_object_id(&from_hash) {
            RefChangeType::Add
        } else if is_null_object_id(&to_hash) {
            RefChangeType::Delete
        } else {
            RefChangeType::Update
        };

        Ok(Self {
            ref_id: ref_id.into(),
            from_hash,
            to_hash,
            change_type,
        })
    }

    /// Parses one `<old> <new> <ref>` line as git writes them to a `pre-receive` hook.
    ///
    /// # Errors
    ///
    /// Returns [`PushgateError::MalformedHookLine`] if the line does not have three fields.
    pub fn from_hook_line(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(from), Some(to), Some(ref_id), None) => Self::new(ref_id, from, to),
            _ => Err(PushgateError::MalformedHookLine {
                line: line.to_string(),
            }),
        }
    }

    #[must_use]
    pub fn ref_id(&self) -> &str {
        &self.ref_id
    }

    #[must_use]
    pub fn from_hash(&self) -> &str {
        &self.from_hash
    }

    #[must_use]
    pub fn to_hash(&self) -> &str {
        &self.to_hash
    }

    #[must_use]
    pub fn change_type(&self) -> RefChangeType {
        self.change_type
    }

    #[must_use]
    pub fn is_tag(&self) -> bool {
        self.ref_id.starts_with(TAG_PREFIX)
    }

    /// Ref name without its `refs/heads/` or `refs/tags/` prefix.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.ref_id
            .strip_prefix(BRANCH_PREFIX)
            .or_else(|| self.ref_id.strip_prefix(TAG_PREFIX))
            .unwrap_or(&self.ref_id)
    }
}

fn is_null_object_id(hash: &str) -> bool {
    !hash.is_empty() && hash.bytes().all(|b| b == b'0')
}

fn validate_object_id(hash: &str) -> Result<()> {
    let valid_len = hash.len() == 40 || hash.len() == 64;
    if valid_len && hash.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(PushgateError::InvalidObjectId(hash.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Committer {
    pub name: String,
    pub email: String,
}

/// Snapshot of one commit introduced by a push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changeset {
    pub id: String,
    pub committer: Committer,
    pub message: String,
    pub parent_count: usize,
}

impl Changeset {
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.parent_count > 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityKind {
    #[default]
    Normal,
    Service,
    Other,
}

impl FromStr for IdentityKind {
    type Err = PushgateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "service" => Ok(Self::Service),
            "other" => Ok(Self::Other),
            _ => Err(PushgateError::UnknownIdentityKind(s.to_string())),
        }
    }
}

/// The user performing the push, as reported by the hosting server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedIdentity {
    /// Login name, matched against exemption lists.
    pub name: String,
    pub display_name: String,
    pub email: Option<String>,
    pub kind: IdentityKind,
}

impl AuthenticatedIdentity {
    #[must_use]
    pub fn normal(name: &str, display_name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            email: Some(email.to_string()),
            kind: IdentityKind::Normal,
        }
    }

    #[must_use]
    pub fn service(name: &str) -> Self {
        Self {
            name: name.to_string(),
            display_name: name.to_string(),
            email: None,
            kind: IdentityKind::Service,
        }
    }
}
