//! Profile screen data flow: one concurrent load, a local edit form and a guarded save.
//!
//! The async halves (`load_profile`, `save_profile`) only talk to the backend and return
//! plain values. All state changes happen in `ProfileState::apply_*` on the loop task.

use tracing::{debug, warn};

use super::model::{StatKind, UserProfile, UserStats};
use crate::backend::{BackendError, CommunityBackend, CountQuery, ProfilePatch, UserId};
use crate::error::{AppError, AppResult};
use crate::notify::{Icon, Notification, NotificationSurface, StyleSpec};

pub const LOAD_FAILED_MESSAGE: &str = "Não foi possível carregar o perfil";
pub const SAVE_FAILED_MESSAGE: &str = "Não foi possível atualizar o perfil";
pub const SAVED_TITLE: &str = "Perfil atualizado";
pub const SAVED_MESSAGE: &str = "Suas informações foram salvas com sucesso!";
const ERROR_TITLE: &str = "Erro";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFailure {
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileFetch {
    SignedOut,
    NotFound,
    Found(UserProfile),
    Failed(FetchFailure),
}

/// Stats from the branches that succeeded. Failed branches are listed and their
/// slot in `stats` is left at zero; callers must not apply them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsReport {
    pub stats: UserStats,
    pub failed: Vec<StatKind>,
}

impl StatsReport {
    fn record(&mut self, kind: StatKind, result: Result<u64, BackendError>) {
        match result {
            Ok(value) => self.stats.set(kind, value),
            Err(err) => {
                warn!(stat = kind.label(), error = %err, "stat count failed");
                self.failed.push(kind);
            }
        }
    }

    pub fn succeeded(&self, kind: StatKind) -> bool {
        !self.failed.contains(&kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileLoad {
    pub fetch: ProfileFetch,
    /// `None` when no user could be resolved, so nothing was counted.
    pub stats: Option<StatsReport>,
}

pub async fn load_profile(backend: &dyn CommunityBackend) -> ProfileLoad {
    let user = match backend.current_user().await {
        Ok(Some(user)) => user,
        Ok(None) => {
            debug!("profile load: nobody signed in");
            return ProfileLoad {
                fetch: ProfileFetch::SignedOut,
                stats: None,
            };
        }
        Err(err) => {
            warn!(error = %err, "profile load: current user lookup failed");
            return ProfileLoad {
                fetch: ProfileFetch::Failed(FetchFailure {
                    reason: err.to_string(),
                }),
                stats: None,
            };
        }
    };

    let (profile, posts, groups, achievements, goals) = tokio::join!(
        backend.fetch_profile(&user),
        backend.count(CountQuery::PostsByAuthor(user.clone())),
        backend.count(CountQuery::GroupMemberships(user.clone())),
        backend.count(CountQuery::Achievements(user.clone())),
        backend.count(CountQuery::OpenGoals(user.clone())),
    );

    let fetch = match profile {
        Ok(Some(profile)) => ProfileFetch::Found(profile),
        Ok(None) => ProfileFetch::NotFound,
        Err(err) => {
            warn!(user = %user, error = %err, "profile fetch failed");
            ProfileFetch::Failed(FetchFailure {
                reason: err.to_string(),
            })
        }
    };

    let mut report = StatsReport::default();
    report.record(StatKind::Posts, posts);
    report.record(StatKind::Groups, groups);
    report.record(StatKind::Achievements, achievements);
    report.record(StatKind::ActiveGoals, goals);

    ProfileLoad {
        fetch,
        stats: Some(report),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub user: UserId,
    pub patch: ProfilePatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(ProfilePatch),
    Failed(SaveFailure),
}

pub async fn save_profile(backend: &dyn CommunityBackend, request: SaveRequest) -> SaveOutcome {
    let SaveRequest { user, patch } = request;
    match backend.update_profile(&user, patch.clone()).await {
        Ok(()) => {
            debug!(user = %user, "profile saved");
            SaveOutcome::Saved(patch)
        }
        Err(err) => {
            warn!(user = %user, error = %err, "profile save failed");
            SaveOutcome::Failed(SaveFailure {
                reason: err.to_string(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileView {
    #[default]
    Loading,
    SignedOut,
    NotFound,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditForm {
    pub display_name: String,
    pub bio: String,
}

impl EditForm {
    fn from_profile(profile: &UserProfile) -> Self {
        Self {
            display_name: profile.display_name.clone(),
            bio: profile.bio_text().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub view: ProfileView,
    pub profile: Option<UserProfile>,
    pub stats: UserStats,
    pub form: EditForm,
    pub editing: bool,
    pub saving: bool,
}

impl ProfileState {
    pub fn apply_load(&mut self, load: ProfileLoad, surface: &dyn NotificationSurface) {
        match load.fetch {
            ProfileFetch::Found(profile) => {
                // A reload mid-edit refreshes the card but keeps the unsaved form.
                if !self.editing {
                    self.form = EditForm::from_profile(&profile);
                }
                self.profile = Some(profile);
                self.view = ProfileView::Ready;
            }
            ProfileFetch::NotFound => {
                self.profile = None;
                self.editing = false;
                self.view = ProfileView::NotFound;
            }
            ProfileFetch::SignedOut => {
                self.profile = None;
                self.editing = false;
                self.view = ProfileView::SignedOut;
            }
            ProfileFetch::Failed(failure) => {
                debug!(reason = %failure.reason, "keeping previous profile after failed load");
                if self.profile.is_none() {
                    self.view = ProfileView::NotFound;
                }
                surface.display(error_notification(LOAD_FAILED_MESSAGE));
            }
        }

        if let Some(report) = load.stats {
            for kind in StatKind::ALL {
                if report.succeeded(kind) {
                    self.stats.set(kind, report.stats.get(kind));
                }
            }
            if !report.failed.is_empty() {
                let names = report
                    .failed
                    .iter()
                    .map(|kind| kind.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                surface.display(error_notification(format!(
                    "Não foi possível carregar: {names}"
                )));
            }
        }
    }

    pub fn begin_edit(&mut self) -> bool {
        let Some(profile) = self.profile.as_ref() else {
            return false;
        };
        if !self.editing {
            self.form = EditForm::from_profile(profile);
            self.editing = true;
        }
        true
    }

    /// Leaves edit mode and drops unsaved changes.
    pub fn cancel_edit(&mut self) {
        self.editing = false;
        if let Some(profile) = self.profile.as_ref() {
            self.form = EditForm::from_profile(profile);
        }
    }

    pub fn toggle_edit(&mut self) -> bool {
        if self.editing {
            self.cancel_edit();
            true
        } else {
            self.begin_edit()
        }
    }

    pub fn set_display_name(&mut self, value: impl Into<String>) -> bool {
        if !self.editing {
            return false;
        }
        self.form.display_name = value.into();
        true
    }

    pub fn set_bio(&mut self, value: impl Into<String>) -> bool {
        if !self.editing {
            return false;
        }
        self.form.bio = value.into();
        true
    }

    /// Starts a save. `Ok(None)` while another save is running or when there is no
    /// profile to save.
    pub fn begin_save(&mut self) -> AppResult<Option<SaveRequest>> {
        if self.saving {
            return Ok(None);
        }
        let Some(profile) = self.profile.as_ref() else {
            return Ok(None);
        };
        if self.form.display_name.trim().is_empty() {
            return Err(AppError::invalid_argument("display name must not be empty"));
        }

        // The name is sent as typed; only a blank one is refused.
        let request = SaveRequest {
            user: profile.user_id.clone(),
            patch: ProfilePatch {
                display_name: self.form.display_name.clone(),
                bio: self.form.bio.clone(),
            },
        };
        self.saving = true;
        Ok(Some(request))
    }

    pub fn apply_save(&mut self, outcome: SaveOutcome, surface: &dyn NotificationSurface) {
        self.saving = false;
        match outcome {
            SaveOutcome::Saved(patch) => {
                if let Some(profile) = self.profile.as_mut() {
                    profile.display_name = patch.display_name;
                    profile.bio = Some(patch.bio);
                    self.form = EditForm::from_profile(profile);
                }
                self.editing = false;
                surface.display(
                    Notification::new(SAVED_MESSAGE)
                        .with_title(SAVED_TITLE)
                        .with_icon(Some(Icon::Check))
                        .with_style(StyleSpec::SUCCESS),
                );
            }
            SaveOutcome::Failed(failure) => {
                debug!(reason = %failure.reason, "save failed; staying in edit mode");
                surface.display(error_notification(SAVE_FAILED_MESSAGE));
            }
        }
    }
}

pub fn announce_avatar_soon(surface: &dyn NotificationSurface) {
    surface.display(
        Notification::new("Alteração de avatar em desenvolvimento")
            .with_title("Em breve")
            .with_icon(Some(Icon::Info))
            .with_style(StyleSpec::INFO),
    );
}

fn error_notification(message: impl Into<String>) -> Notification {
    Notification::new(message)
        .with_title(ERROR_TITLE)
        .with_icon(Some(Icon::AlertCircle))
        .with_style(StyleSpec::DESTRUCTIVE)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use super::{
        LOAD_FAILED_MESSAGE, ProfileFetch, ProfileState, ProfileView, SAVE_FAILED_MESSAGE,
        SAVED_MESSAGE, SaveOutcome, announce_avatar_soon, load_profile, save_profile,
    };
    use crate::backend::{
        BackendError, BackendResult, CommunityBackend, CountQuery, ProfilePatch, UserId,
    };
    use crate::notify::StyleSpec;
    use crate::notify::testing::RecordingSurface;
    use crate::profile::{StatKind, UserProfile};

    #[derive(Default)]
    struct ScriptedBackend {
        signed_in: bool,
        profile_missing: bool,
        profile_fails: bool,
        failing_counts: HashSet<&'static str>,
        update_fails: bool,
        updates: Mutex<Vec<ProfilePatch>>,
    }

    fn sample_profile() -> UserProfile {
        UserProfile {
            id: "p-1".to_string(),
            user_id: UserId::new("u-1"),
            display_name: "Ana".to_string(),
            avatar_url: None,
            bio: Some("Estudante".to_string()),
            total_points: 1500,
            monthly_points: 200,
            ranking_position: Some(4),
            monthly_ranking_position: None,
            study_streak: 3,
            level: 2,
            created_at: Utc
                .with_ymd_and_hms(2024, 1, 5, 0, 0, 0)
                .single()
                .expect("date should be valid"),
        }
    }

    #[async_trait]
    impl CommunityBackend for ScriptedBackend {
        async fn current_user(&self) -> BackendResult<Option<UserId>> {
            Ok(self.signed_in.then(|| UserId::new("u-1")))
        }

        async fn fetch_profile(&self, _user: &UserId) -> BackendResult<Option<UserProfile>> {
            if self.profile_fails {
                return Err(BackendError::unavailable("timeout"));
            }
            Ok((!self.profile_missing).then(sample_profile))
        }

        async fn count(&self, query: CountQuery) -> BackendResult<u64> {
            let (name, value) = match query {
                CountQuery::PostsByAuthor(_) => ("posts", 12),
                CountQuery::GroupMemberships(_) => ("groups", 3),
                CountQuery::Achievements(_) => ("achievements", 7),
                CountQuery::OpenGoals(_) => ("goals", 2),
            };
            if self.failing_counts.contains(name) {
                return Err(BackendError::unavailable(name));
            }
            Ok(value)
        }

        async fn update_profile(&self, _user: &UserId, patch: ProfilePatch) -> BackendResult<()> {
            if self.update_fails {
                return Err(BackendError::rejected("row locked"));
            }
            self.updates
                .lock()
                .expect("update log lock should not be poisoned")
                .push(patch);
            Ok(())
        }
    }

    fn signed_in() -> ScriptedBackend {
        ScriptedBackend {
            signed_in: true,
            ..ScriptedBackend::default()
        }
    }

    async fn loaded_state(backend: &ScriptedBackend, surface: &RecordingSurface) -> ProfileState {
        let mut state = ProfileState::default();
        state.apply_load(load_profile(backend).await, surface);
        state
    }

    #[tokio::test]
    async fn load_applies_profile_and_all_counts() {
        let backend = signed_in();
        let surface = RecordingSurface::shared();
        let state = loaded_state(&backend, &surface).await;

        assert_eq!(state.view, ProfileView::Ready);
        assert_eq!(state.form.display_name, "Ana");
        assert_eq!(state.form.bio, "Estudante");
        assert_eq!(state.stats.total_posts, 12);
        assert_eq!(state.stats.active_goals, 2);
        assert!(surface.messages().is_empty());
    }

    #[tokio::test]
    async fn signed_out_load_counts_nothing() {
        let backend = ScriptedBackend::default();
        let load = load_profile(&backend).await;
        assert_eq!(load.fetch, ProfileFetch::SignedOut);
        assert!(load.stats.is_none());
    }

    #[tokio::test]
    async fn missing_profile_shows_not_found() {
        let backend = ScriptedBackend {
            profile_missing: true,
            ..signed_in()
        };
        let surface = RecordingSurface::shared();
        let state = loaded_state(&backend, &surface).await;

        assert_eq!(state.view, ProfileView::NotFound);
        assert!(state.profile.is_none());
    }

    #[tokio::test]
    async fn partial_stats_failure_keeps_successful_counts_and_names_failures() {
        let backend = ScriptedBackend {
            failing_counts: HashSet::from(["groups", "goals"]),
            ..signed_in()
        };
        let surface = RecordingSurface::shared();
        let mut state = ProfileState::default();
        state.stats.total_groups = 9;

        let load = load_profile(&backend).await;
        let report = load.stats.clone().expect("stats should be reported");
        assert_eq!(report.failed, vec![StatKind::Groups, StatKind::ActiveGoals]);
        state.apply_load(load, &*surface);

        assert_eq!(state.stats.total_posts, 12);
        assert_eq!(state.stats.achievements_count, 7);
        assert_eq!(state.stats.total_groups, 9);
        let shown = surface.notifications();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].message, "Não foi possível carregar: grupos, metas ativas");
        assert_eq!(shown[0].style, StyleSpec::DESTRUCTIVE);
    }

    #[tokio::test]
    async fn failed_reload_keeps_previous_profile() {
        let surface = RecordingSurface::shared();
        let mut state = loaded_state(&signed_in(), &surface).await;

        let failing = ScriptedBackend {
            profile_fails: true,
            ..signed_in()
        };
        state.apply_load(load_profile(&failing).await, &*surface);

        assert_eq!(state.view, ProfileView::Ready);
        assert_eq!(
            state.profile.as_ref().map(|p| p.display_name.as_str()),
            Some("Ana")
        );
        assert_eq!(surface.messages(), vec![LOAD_FAILED_MESSAGE]);
    }

    #[tokio::test]
    async fn save_success_updates_profile_and_leaves_edit_mode() {
        let backend = signed_in();
        let surface = RecordingSurface::shared();
        let mut state = loaded_state(&backend, &surface).await;

        assert!(state.begin_edit());
        assert!(state.set_display_name("Ana Paula"));
        assert!(state.set_bio(""));
        let request = state
            .begin_save()
            .expect("valid form should save")
            .expect("request should be issued");
        assert!(state.saving);

        let outcome = save_profile(&backend, request).await;
        state.apply_save(outcome, &*surface);

        assert!(!state.saving);
        assert!(!state.editing);
        let profile = state.profile.as_ref().expect("profile should remain");
        assert_eq!(profile.display_name, "Ana Paula");
        assert_eq!(profile.bio_text(), "");
        let shown = surface.notifications();
        assert_eq!(shown[0].title.as_deref(), Some("Perfil atualizado"));
        assert_eq!(shown[0].message, SAVED_MESSAGE);
        assert_eq!(
            backend
                .updates
                .lock()
                .expect("update log lock should not be poisoned")
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn save_failure_keeps_edit_mode_and_form() {
        let backend = ScriptedBackend {
            update_fails: true,
            ..signed_in()
        };
        let surface = RecordingSurface::shared();
        let mut state = loaded_state(&backend, &surface).await;
        state.begin_edit();
        state.set_display_name("Outro nome");

        let request = state
            .begin_save()
            .expect("valid form should save")
            .expect("request should be issued");
        let outcome = save_profile(&backend, request).await;
        assert!(matches!(outcome, SaveOutcome::Failed(_)));
        state.apply_save(outcome, &*surface);

        assert!(state.editing);
        assert!(!state.saving);
        assert_eq!(state.form.display_name, "Outro nome");
        assert_eq!(
            state.profile.as_ref().map(|p| p.display_name.as_str()),
            Some("Ana")
        );
        assert_eq!(surface.messages(), vec![SAVE_FAILED_MESSAGE]);
    }

    #[tokio::test]
    async fn second_save_is_refused_while_one_is_running() {
        let surface = RecordingSurface::shared();
        let mut state = loaded_state(&signed_in(), &surface).await;
        state.begin_edit();

        let first = state.begin_save().expect("first save should start");
        assert!(first.is_some());
        let second = state.begin_save().expect("guard should not error");
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn empty_display_name_is_rejected() {
        let surface = RecordingSurface::shared();
        let mut state = loaded_state(&signed_in(), &surface).await;
        state.begin_edit();
        state.set_display_name("   ");

        assert!(state.begin_save().is_err());
        assert!(!state.saving);
    }

    #[tokio::test]
    async fn save_sends_the_display_name_as_typed() {
        let surface = RecordingSurface::shared();
        let mut state = loaded_state(&signed_in(), &surface).await;
        state.begin_edit();
        state.set_display_name(" Ana Paula ");

        let request = state
            .begin_save()
            .expect("non-blank name should be accepted")
            .expect("save should start");
        assert_eq!(request.patch.display_name, " Ana Paula ");
    }

    #[tokio::test]
    async fn reload_during_edit_keeps_the_unsaved_form() {
        let backend = signed_in();
        let surface = RecordingSurface::shared();
        let mut state = loaded_state(&backend, &surface).await;
        state.begin_edit();
        state.set_display_name("Ana Rascunho");
        state.set_bio("ainda editando");

        state.apply_load(load_profile(&backend).await, &*surface);

        assert!(state.editing);
        assert_eq!(state.view, ProfileView::Ready);
        assert_eq!(state.form.display_name, "Ana Rascunho");
        assert_eq!(state.form.bio, "ainda editando");
        assert_eq!(
            state.profile.as_ref().map(|p| p.display_name.as_str()),
            Some("Ana")
        );
    }

    #[test]
    fn save_without_profile_is_a_no_op() {
        let mut state = ProfileState::default();
        assert!(!state.begin_edit());
        assert!(
            state
                .begin_save()
                .expect("missing profile should not error")
                .is_none()
        );
    }

    #[tokio::test]
    async fn toggle_edit_discards_unsaved_changes() {
        let surface = RecordingSurface::shared();
        let mut state = loaded_state(&signed_in(), &surface).await;

        assert!(state.toggle_edit());
        assert!(state.editing);
        state.set_bio("rascunho");
        assert!(state.toggle_edit());
        assert!(!state.editing);
        assert_eq!(state.form.bio, "Estudante");
        assert!(!state.set_bio("fora do modo de edição"));
    }

    #[test]
    fn avatar_change_is_announced_as_coming_soon() {
        let surface = RecordingSurface::shared();
        announce_avatar_soon(&*surface);

        let shown = surface.notifications();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title.as_deref(), Some("Em breve"));
        assert_eq!(shown[0].style, StyleSpec::INFO);
    }
}
