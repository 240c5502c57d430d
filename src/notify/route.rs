//! Route transition notifier.
//!
//! Watches the active location and announces leaving the previous route right away,
//! then announces entering the new one after a short delay so the exit toast shows
//! up first. The very first location seen after mount is only recorded.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::notification::{Icon, Notification, StyleSpec};
use super::surface::NotificationSurface;

pub const EXIT_DURATION_MS: u64 = 2000;
pub const ENTER_DURATION_MS: u64 = 3000;
pub const FEATURE_DURATION_MS: u64 = 2500;
pub const ACTIVITY_DURATION_MS: u64 = 2000;
pub const DEFAULT_ENTER_DELAY: Duration = Duration::from_millis(300);

/// Path of a navigable location, e.g. `/forum`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey(String);

impl RouteKey {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTable {
    messages: HashMap<RouteKey, String>,
}

impl MessageTable {
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            messages: pairs
                .into_iter()
                .map(|(route, message)| (RouteKey::new(route), message.into()))
                .collect(),
        }
    }

    pub fn get(&self, route: &RouteKey) -> Option<&str> {
        self.messages.get(route).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        for (route, message) in overrides {
            self.messages
                .insert(RouteKey::new(route.as_str()), message.clone());
        }
        self
    }
}

/// Enter and exit tables, built once and shared read-only with pending timers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMessages {
    pub enter: MessageTable,
    pub exit: MessageTable,
}

impl RouteMessages {
    pub fn new(enter: MessageTable, exit: MessageTable) -> Self {
        Self { enter, exit }
    }

    #[must_use]
    pub fn with_overrides(
        self,
        enter: &BTreeMap<String, String>,
        exit: &BTreeMap<String, String>,
    ) -> Self {
        Self {
            enter: self.enter.with_overrides(enter),
            exit: self.exit.with_overrides(exit),
        }
    }
}

/// What happens to a delayed enter check when a newer navigation arrives first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaleEnterPolicy {
    /// Every scheduled check fires with the route it captured, even if the
    /// user has moved on since. Rapid navigation can show stale enter toasts.
    #[default]
    Overlap,
    /// A newer navigation aborts checks that have not fired yet.
    CancelPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureAction {
    Enter,
    Exit,
}

impl FeatureAction {
    pub fn id(self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::Exit => "exit",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "enter" => Some(Self::Enter),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct NavigationState {
    previous: Option<RouteKey>,
}

pub struct RouteNotifier {
    messages: Arc<RouteMessages>,
    surface: Arc<dyn NotificationSurface>,
    enter_delay: Duration,
    policy: StaleEnterPolicy,
    state: NavigationState,
    pending: Vec<JoinHandle<()>>,
}

impl RouteNotifier {
    pub fn new(messages: Arc<RouteMessages>, surface: Arc<dyn NotificationSurface>) -> Self {
        Self {
            messages,
            surface,
            enter_delay: DEFAULT_ENTER_DELAY,
            policy: StaleEnterPolicy::default(),
            state: NavigationState::default(),
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_enter_delay(mut self, delay: Duration) -> Self {
        self.enter_delay = delay;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: StaleEnterPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn previous(&self) -> Option<&RouteKey> {
        self.state.previous.as_ref()
    }

    /// Number of enter checks scheduled and not yet finished.
    pub fn pending_enter_checks(&self) -> usize {
        self.pending.iter().filter(|task| !task.is_finished()).count()
    }

    /// Forgets handles of enter checks that already ran.
    pub fn prune_finished(&mut self) {
        self.pending.retain(|task| !task.is_finished());
    }

    pub fn observe(&mut self, current: RouteKey) {
        let Some(previous) = self.state.previous.take() else {
            debug!(route = %current, "first route after mount; nothing announced");
            self.state.previous = Some(current);
            return;
        };
        if previous == current {
            self.state.previous = Some(current);
            return;
        }

        if let Some(message) = self.messages.exit.get(&previous) {
            self.surface.display(exit_notification(message));
        }

        self.prune_finished();
        if self.policy == StaleEnterPolicy::CancelPending {
            for task in self.pending.drain(..) {
                task.abort();
            }
        }
        self.schedule_enter(current.clone());

        self.state.previous = Some(current);
    }

    pub fn emit_feature_toast(&self, feature: &str, action: FeatureAction) {
        let notification = match action {
            FeatureAction::Enter => Notification::new(format!("Você acessou: {feature}"))
                .with_icon(Some(Icon::Check))
                .with_style(StyleSpec::ENTER),
            FeatureAction::Exit => {
                Notification::new(format!("Você fechou: {feature}")).with_style(StyleSpec::MUTED)
            }
        };
        self.surface
            .display(notification.lasting_ms(FEATURE_DURATION_MS));
    }

    pub fn emit_activity_toast(&self, activity: &str, entering: bool) {
        let notification = if entering {
            Notification::new(format!("Entrando em: {activity}"))
                .with_title("Funcionalidade Ativada")
                .with_style(StyleSpec::ENTER)
        } else {
            Notification::new(format!("Saindo de: {activity}"))
                .with_title("Funcionalidade Desativada")
                .with_style(StyleSpec::MUTED)
        };
        self.surface
            .display(notification.lasting_ms(ACTIVITY_DURATION_MS));
    }

    /// Stops announcing: pending enter checks are aborted and the next
    /// observation is treated as the first one again.
    pub fn unmount(&mut self) {
        for task in self.pending.drain(..) {
            task.abort();
        }
        self.state = NavigationState::default();
    }

    fn schedule_enter(&mut self, route: RouteKey) {
        let messages = Arc::clone(&self.messages);
        let surface = Arc::clone(&self.surface);
        // The delay counts from the navigation, not from when the task is first polled.
        let deadline = tokio::time::Instant::now() + self.enter_delay;

        match Handle::try_current() {
            Ok(handle) => {
                let task = handle.spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    announce_enter(&messages, surface.as_ref(), &route);
                });
                self.pending.push(task);
            }
            Err(_) => {
                warn!(route = %route, "no async runtime; enter message shown without delay");
                announce_enter(&messages, surface.as_ref(), &route);
            }
        }
    }
}

impl Drop for RouteNotifier {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn announce_enter(messages: &RouteMessages, surface: &dyn NotificationSurface, route: &RouteKey) {
    if let Some(message) = messages.enter.get(route) {
        debug!(route = %route, "announcing route entry");
        surface.display(enter_notification(message));
    }
}

fn exit_notification(message: &str) -> Notification {
    Notification::new(message)
        .with_style(StyleSpec::MUTED)
        .lasting_ms(EXIT_DURATION_MS)
}

fn enter_notification(message: &str) -> Notification {
    Notification::new(message)
        .with_icon(Some(Icon::Check))
        .with_style(StyleSpec::ENTER)
        .lasting_ms(ENTER_DURATION_MS)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::time::{Instant, advance};

    use super::{
        DEFAULT_ENTER_DELAY, FeatureAction, RouteKey, RouteNotifier, StaleEnterPolicy,
    };
    use crate::notify::testing::RecordingSurface;
    use crate::notify::{Icon, StyleSpec, default_route_messages};

    fn notifier(surface: &Arc<RecordingSurface>) -> RouteNotifier {
        RouteNotifier::new(Arc::new(default_route_messages()), surface.clone())
    }

    async fn settle(duration: Duration) {
        advance(duration).await;
        // Let woken timer tasks run to completion.
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn first_route_after_mount_is_silent_even_with_table_entries() {
        let surface = RecordingSurface::shared();
        let mut notifier = notifier(&surface);

        notifier.observe(RouteKey::new("/forum"));
        settle(Duration::from_secs(1)).await;

        assert!(surface.messages().is_empty());
        assert_eq!(notifier.previous(), Some(&RouteKey::new("/forum")));
    }

    #[tokio::test(start_paused = true)]
    async fn exit_message_precedes_delayed_enter_message() {
        let surface = RecordingSurface::shared();
        let mut notifier = notifier(&surface);
        let started = Instant::now();

        notifier.observe(RouteKey::new("/"));
        notifier.observe(RouteKey::new("/forum"));
        assert_eq!(surface.messages(), vec!["Você saiu do: Painel Principal"]);

        settle(DEFAULT_ENTER_DELAY).await;
        let timed = surface.timed();
        assert_eq!(timed.len(), 2);
        assert_eq!(timed[1].1.message, "Você entrou nos: Fóruns de Discussão");
        assert!(timed[1].0 - started >= DEFAULT_ENTER_DELAY);

        let exit = &timed[0].1;
        assert_eq!(exit.style, StyleSpec::MUTED);
        assert_eq!(exit.duration, Duration::from_millis(2000));
        assert_eq!(exit.icon, None);
        let enter = &timed[1].1;
        assert_eq!(enter.style, StyleSpec::ENTER);
        assert_eq!(enter.duration, Duration::from_millis(3000));
        assert_eq!(enter.icon, Some(Icon::Check));
    }

    #[tokio::test(start_paused = true)]
    async fn every_enter_table_route_is_announced_with_its_message() {
        let messages = default_route_messages();
        for path in ["/", "/forum", "/study-groups", "/ranking"] {
            let surface = RecordingSurface::shared();
            let mut notifier = notifier(&surface);
            notifier.observe(RouteKey::new("/profile"));
            notifier.observe(RouteKey::new(path));
            settle(DEFAULT_ENTER_DELAY).await;

            let expected = messages
                .enter
                .get(&RouteKey::new(path))
                .expect("route should have an enter message");
            assert_eq!(surface.messages(), vec![expected.to_string()]);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn routes_without_entries_stay_silent() {
        let surface = RecordingSurface::shared();
        let mut notifier = notifier(&surface);

        notifier.observe(RouteKey::new("/profile"));
        notifier.observe(RouteKey::new("/settings"));
        settle(Duration::from_secs(1)).await;

        assert!(surface.messages().is_empty());
        assert_eq!(notifier.previous(), Some(&RouteKey::new("/settings")));
    }

    #[tokio::test(start_paused = true)]
    async fn previous_route_updates_before_the_delay_elapses() {
        let surface = RecordingSurface::shared();
        let mut notifier = notifier(&surface);

        notifier.observe(RouteKey::new("/"));
        notifier.observe(RouteKey::new("/ranking"));
        assert_eq!(notifier.previous(), Some(&RouteKey::new("/ranking")));
        assert_eq!(notifier.pending_enter_checks(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn enter_delay_counts_from_the_navigation_event() {
        let surface = RecordingSurface::shared();
        let mut notifier = notifier(&surface);

        notifier.observe(RouteKey::new("/"));
        notifier.observe(RouteKey::new("/forum"));
        // The clock moves before the enter task ever gets polled.
        advance(Duration::from_millis(200)).await;
        settle(Duration::from_millis(100)).await;

        assert_eq!(
            surface.messages(),
            vec![
                "Você saiu do: Painel Principal",
                "Você entrou nos: Fóruns de Discussão",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn overlap_policy_keeps_stale_enter_checks() {
        let surface = RecordingSurface::shared();
        let mut notifier = notifier(&surface);

        notifier.observe(RouteKey::new("/"));
        notifier.observe(RouteKey::new("/forum"));
        settle(Duration::from_millis(100)).await;
        notifier.observe(RouteKey::new("/ranking"));
        settle(Duration::from_secs(1)).await;

        assert_eq!(
            surface.messages(),
            vec![
                "Você saiu do: Painel Principal",
                "Você saiu dos: Fóruns de Discussão",
                "Você entrou nos: Fóruns de Discussão",
                "Você entrou no: Ranking da Comunidade",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_pending_policy_drops_stale_enter_checks() {
        let surface = RecordingSurface::shared();
        let mut notifier = notifier(&surface).with_policy(StaleEnterPolicy::CancelPending);

        notifier.observe(RouteKey::new("/"));
        notifier.observe(RouteKey::new("/forum"));
        settle(Duration::from_millis(100)).await;
        notifier.observe(RouteKey::new("/ranking"));
        settle(Duration::from_secs(1)).await;

        assert_eq!(
            surface.messages(),
            vec![
                "Você saiu do: Painel Principal",
                "Você saiu dos: Fóruns de Discussão",
                "Você entrou no: Ranking da Comunidade",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_cancels_pending_checks_and_resets_state() {
        let surface = RecordingSurface::shared();
        let mut notifier = notifier(&surface);

        notifier.observe(RouteKey::new("/"));
        notifier.observe(RouteKey::new("/forum"));
        notifier.unmount();
        settle(Duration::from_secs(1)).await;

        assert_eq!(surface.messages(), vec!["Você saiu do: Painel Principal"]);
        assert_eq!(notifier.previous(), None);

        notifier.observe(RouteKey::new("/ranking"));
        settle(Duration::from_secs(1)).await;
        assert_eq!(surface.messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn custom_enter_delay_is_respected() {
        let surface = RecordingSurface::shared();
        let mut notifier = notifier(&surface).with_enter_delay(Duration::from_millis(50));

        notifier.observe(RouteKey::new("/forum"));
        notifier.observe(RouteKey::new("/"));
        settle(Duration::from_millis(50)).await;

        assert_eq!(surface.messages().len(), 2);
    }

    #[test]
    fn feature_toast_formats_enter_and_exit() {
        let surface = RecordingSurface::shared();
        let notifier = notifier(&surface);

        notifier.emit_feature_toast("Notificações", FeatureAction::Enter);
        notifier.emit_feature_toast("Notificações", FeatureAction::Exit);

        let shown = surface.notifications();
        assert_eq!(shown[0].message, "Você acessou: Notificações");
        assert_eq!(shown[0].style, StyleSpec::ENTER);
        assert_eq!(shown[0].icon, Some(Icon::Check));
        assert_eq!(shown[1].message, "Você fechou: Notificações");
        assert_eq!(shown[1].style, StyleSpec::MUTED);
        assert_eq!(shown[1].icon, None);
    }

    #[test]
    fn activity_toast_carries_a_title() {
        let surface = RecordingSurface::shared();
        let notifier = notifier(&surface);

        notifier.emit_activity_toast("Grupos de Estudo", true);
        notifier.emit_activity_toast("Grupos de Estudo", false);

        let shown = surface.notifications();
        assert_eq!(shown[0].title.as_deref(), Some("Funcionalidade Ativada"));
        assert_eq!(shown[0].message, "Entrando em: Grupos de Estudo");
        assert_eq!(shown[1].title.as_deref(), Some("Funcionalidade Desativada"));
        assert_eq!(shown[1].message, "Saindo de: Grupos de Estudo");
        assert_eq!(shown[1].duration, Duration::from_millis(2000));
    }

    #[test]
    fn feature_action_parse_accepts_enter_and_exit() {
        assert_eq!(FeatureAction::parse("enter"), Some(FeatureAction::Enter));
        assert_eq!(FeatureAction::parse("exit"), Some(FeatureAction::Exit));
        assert_eq!(FeatureAction::parse("open"), None);
    }
}
