use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::traits::{
    BackendError, BackendResult, CommunityBackend, CountQuery, ProfilePatch, UserId,
};
use crate::error::{AppError, AppResult};
use crate::profile::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRow {
    pub id: String,
    pub author_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRow {
    pub group: String,
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementRow {
    pub key: String,
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalRow {
    pub title: String,
    pub user_id: UserId,
    #[serde(default)]
    pub is_completed: bool,
}

/// Whole store as persisted on disk.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub current_user: Option<UserId>,
    pub profiles: Vec<UserProfile>,
    pub posts: Vec<PostRow>,
    pub group_members: Vec<MembershipRow>,
    pub achievements: Vec<AchievementRow>,
    pub goals: Vec<GoalRow>,
}

impl Dataset {
    pub fn demo() -> Self {
        let user = UserId::new("demo-user");
        let created_at = Utc
            .with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);

        let profile = UserProfile {
            id: "profile-1".to_string(),
            user_id: user.clone(),
            display_name: "Estudante Demo".to_string(),
            avatar_url: None,
            bio: Some("Preparando para o vestibular.".to_string()),
            total_points: 2350,
            monthly_points: 410,
            ranking_position: Some(12),
            monthly_ranking_position: Some(5),
            study_streak: 6,
            level: 3,
            created_at,
        };

        let posts = (1..=4)
            .map(|n| PostRow {
                id: format!("post-{n}"),
                author_id: user.clone(),
            })
            .collect();
        let group_members = ["matematica", "redacao"]
            .into_iter()
            .map(|group| MembershipRow {
                group: group.to_string(),
                user_id: user.clone(),
            })
            .collect();
        let achievements = ["primeiro-post", "sequencia-5"]
            .into_iter()
            .map(|key| AchievementRow {
                key: key.to_string(),
                user_id: user.clone(),
            })
            .collect();
        let goals = [("Ler 2 livros", false), ("Simulado ENEM", true), ("Revisar física", false)]
            .into_iter()
            .map(|(title, is_completed)| GoalRow {
                title: title.to_string(),
                user_id: user.clone(),
                is_completed,
            })
            .collect();

        Self {
            current_user: Some(user),
            profiles: vec![profile],
            posts,
            group_members,
            achievements,
            goals,
        }
    }

    fn count(&self, query: &CountQuery) -> u64 {
        let user = query.user();
        let n = match query {
            CountQuery::PostsByAuthor(_) => {
                self.posts.iter().filter(|row| &row.author_id == user).count()
            }
            CountQuery::GroupMemberships(_) => self
                .group_members
                .iter()
                .filter(|row| &row.user_id == user)
                .count(),
            CountQuery::Achievements(_) => self
                .achievements
                .iter()
                .filter(|row| &row.user_id == user)
                .count(),
            CountQuery::OpenGoals(_) => self
                .goals
                .iter()
                .filter(|row| &row.user_id == user && !row.is_completed)
                .count(),
        };
        n as u64
    }
}

/// `CommunityBackend` over a JSON document. Without a path everything lives in memory.
pub struct LocalStore {
    path: Option<PathBuf>,
    data: RwLock<Dataset>,
}

impl LocalStore {
    pub fn in_memory(data: Dataset) -> Self {
        Self {
            path: None,
            data: RwLock::new(data),
        }
    }

    /// Reads `path`, or seeds it with demo data when the file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(AppError::invalid_argument("data path must not be empty"));
        }

        let data = if path.exists() {
            if !path.is_file() {
                return Err(AppError::invalid_argument(format!(
                    "data path is not a regular file: {}",
                    path.display()
                )));
            }
            let raw = std::fs::read_to_string(path).map_err(|source| {
                AppError::io_with_context(source, format!("failed to read data: {}", path.display()))
            })?;
            serde_json::from_str::<Dataset>(&raw).map_err(|source| {
                AppError::backend(
                    "open",
                    BackendError::corrupt(format!("{}: {source}", path.display())),
                )
            })?
        } else {
            info!(path = %path.display(), "seeding demo data");
            let demo = Dataset::demo();
            write_dataset_sync(path, &demo)?;
            demo
        };

        Ok(Self {
            path: Some(path.to_path_buf()),
            data: RwLock::new(data),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub async fn snapshot(&self) -> Dataset {
        self.data.read().await.clone()
    }

    async fn persist(&self, data: &Dataset) -> BackendResult<()> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        let raw = serde_json::to_string_pretty(data)
            .map_err(|source| BackendError::corrupt(source.to_string()))?;
        tokio::fs::write(path, raw).await.map_err(|source| {
            BackendError::io_with_context(source, format!("failed to write {}", path.display()))
        })
    }
}

fn write_dataset_sync(path: &Path, data: &Dataset) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| {
            AppError::io_with_context(source, format!("failed to create {}", parent.display()))
        })?;
    }
    let raw = serde_json::to_string_pretty(data).map_err(|source| {
        AppError::backend("seed", BackendError::corrupt(source.to_string()))
    })?;
    std::fs::write(path, raw).map_err(|source| {
        AppError::io_with_context(source, format!("failed to write data: {}", path.display()))
    })
}

#[async_trait]
impl CommunityBackend for LocalStore {
    async fn current_user(&self) -> BackendResult<Option<UserId>> {
        Ok(self.data.read().await.current_user.clone())
    }

    async fn fetch_profile(&self, user: &UserId) -> BackendResult<Option<UserProfile>> {
        let data = self.data.read().await;
        Ok(data
            .profiles
            .iter()
            .find(|profile| &profile.user_id == user)
            .cloned())
    }

    async fn count(&self, query: CountQuery) -> BackendResult<u64> {
        Ok(self.data.read().await.count(&query))
    }

    async fn update_profile(&self, user: &UserId, patch: ProfilePatch) -> BackendResult<()> {
        let mut data = self.data.write().await;
        // Patch a copy; memory only changes once the file write went through.
        let mut next = data.clone();
        let Some(profile) = next
            .profiles
            .iter_mut()
            .find(|profile| &profile.user_id == user)
        else {
            return Err(BackendError::rejected(format!("no profile for user {user}")));
        };
        profile.display_name = patch.display_name;
        profile.bio = Some(patch.bio);

        self.persist(&next).await?;
        *data = next;
        debug!(user = %user, "profile row updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{Dataset, LocalStore};
    use crate::backend::{CommunityBackend, CountQuery, ProfilePatch, UserId};

    fn unique_temp_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("cshell_store_{suffix}_{}_{}", process::id(), nanos));
        path
    }

    #[tokio::test]
    async fn demo_counts_only_open_goals() {
        let store = LocalStore::in_memory(Dataset::demo());
        let user = store
            .current_user()
            .await
            .expect("lookup should succeed")
            .expect("demo user should be signed in");

        let posts = store
            .count(CountQuery::PostsByAuthor(user.clone()))
            .await
            .expect("count should succeed");
        let goals = store
            .count(CountQuery::OpenGoals(user.clone()))
            .await
            .expect("count should succeed");
        assert_eq!(posts, 4);
        assert_eq!(goals, 2);
    }

    #[tokio::test]
    async fn update_rejects_unknown_user() {
        let store = LocalStore::in_memory(Dataset::demo());
        let patch = ProfilePatch {
            display_name: "X".to_string(),
            bio: String::new(),
        };
        assert!(
            store
                .update_profile(&UserId::new("ghost"), patch)
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn open_seeds_missing_file_and_persists_updates() {
        let path = unique_temp_path("seed.json");
        let store = LocalStore::open(&path).expect("missing file should be seeded");
        assert!(path.is_file());

        let user = UserId::new("demo-user");
        store
            .update_profile(
                &user,
                ProfilePatch {
                    display_name: "Nome Novo".to_string(),
                    bio: "Bio nova".to_string(),
                },
            )
            .await
            .expect("update should persist");

        let reopened = LocalStore::open(&path).expect("seeded file should reopen");
        let profile = reopened
            .fetch_profile(&user)
            .await
            .expect("fetch should succeed")
            .expect("profile should exist");
        assert_eq!(profile.display_name, "Nome Novo");
        assert_eq!(profile.bio.as_deref(), Some("Bio nova"));
        assert_eq!(reopened.snapshot().await, store.snapshot().await);

        std::fs::remove_file(&path).expect("data file should be removed");
    }

    #[tokio::test]
    async fn failed_write_leaves_the_stored_profile_unchanged() {
        let path = unique_temp_path("unwritable.json");
        let store = LocalStore::open(&path).expect("missing file should be seeded");
        let user = UserId::new("demo-user");
        let before = store.snapshot().await;

        // A directory in place of the data file makes the write fail.
        std::fs::remove_file(&path).expect("data file should be removed");
        std::fs::create_dir(&path).expect("directory should be created");

        let result = store
            .update_profile(
                &user,
                ProfilePatch {
                    display_name: "Novo".to_string(),
                    bio: "Bio nova".to_string(),
                },
            )
            .await;
        assert!(result.is_err());

        let profile = store
            .fetch_profile(&user)
            .await
            .expect("fetch should succeed")
            .expect("profile should exist");
        assert_eq!(profile.display_name, "Estudante Demo");
        assert_eq!(store.snapshot().await, before);

        std::fs::remove_dir(&path).expect("directory should be removed");
    }

    #[test]
    fn open_rejects_corrupt_json() {
        let path = unique_temp_path("corrupt.json");
        std::fs::write(&path, "{ not json").expect("data file should be written");
        assert!(LocalStore::open(&path).is_err());
        std::fs::remove_file(&path).expect("data file should be removed");
    }
}
