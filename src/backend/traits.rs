use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Row counts the profile page shows, all scoped to one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountQuery {
    PostsByAuthor(UserId),
    GroupMemberships(UserId),
    Achievements(UserId),
    /// Goals not yet completed.
    OpenGoals(UserId),
}

impl CountQuery {
    pub fn user(&self) -> &UserId {
        match self {
            Self::PostsByAuthor(user)
            | Self::GroupMemberships(user)
            | Self::Achievements(user)
            | Self::OpenGoals(user) => user,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePatch {
    pub display_name: String,
    pub bio: String,
}

#[derive(thiserror::Error, Debug)]
pub enum BackendError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("stored data is corrupt: {0}")]
    Corrupt(String),
    #[error("store I/O failed: {context}")]
    Io {
        #[source]
        source: std::io::Error,
        context: String,
    },
}

impl BackendError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt(message.into())
    }

    pub fn io_with_context(source: std::io::Error, context: impl Into<String>) -> Self {
        Self::Io {
            source,
            context: context.into(),
        }
    }
}

pub type BackendResult<T> = Result<T, BackendError>;

/// Remote data the profile page reads and writes. Implementations must be
/// shareable across tasks; every call may fail independently.
#[async_trait]
pub trait CommunityBackend: Send + Sync {
    async fn current_user(&self) -> BackendResult<Option<UserId>>;
    async fn fetch_profile(&self, user: &UserId) -> BackendResult<Option<UserProfile>>;
    async fn count(&self, query: CountQuery) -> BackendResult<u64>;
    async fn update_profile(&self, user: &UserId, patch: ProfilePatch) -> BackendResult<()>;
}
