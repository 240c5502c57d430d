use tracing::debug;

use crate::app::AppState;
use crate::event::AppEvent;
use crate::notify::RouteNotifier;

use super::traits::{Extension, ExtensionEnv};

/// Subscribes the route notifier to `RouteChanged`.
pub struct NavigationExtension;

impl Extension for NavigationExtension {
    type State = RouteNotifier;

    fn init_state(env: &ExtensionEnv) -> Self::State {
        RouteNotifier::new(env.route_messages.clone(), env.surface.clone())
            .with_enter_delay(env.enter_delay)
            .with_policy(env.stale_enter)
    }

    fn handle_event(state: &mut Self::State, event: &AppEvent, _app: &mut AppState) {
        if let AppEvent::RouteChanged { from, to } = event {
            debug!(from = ?from.as_ref().map(|route| route.as_str()), to = %to, "route changed");
            state.observe(to.clone());
        }
    }

    fn on_background(state: &mut Self::State, _app: &mut AppState) -> bool {
        state.prune_finished();
        false
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::NavigationExtension;
    use crate::app::AppState;
    use crate::event::AppEvent;
    use crate::extension::{Extension, ExtensionEnv};
    use crate::notify::testing::RecordingSurface;
    use crate::notify::{
        RouteKey, StaleEnterPolicy, default_route_messages, default_tooltip_table,
    };

    fn env(surface: Arc<RecordingSurface>) -> ExtensionEnv {
        ExtensionEnv {
            surface,
            route_messages: Arc::new(default_route_messages()),
            tooltips: Arc::new(default_tooltip_table()),
            enter_delay: Duration::from_millis(300),
            stale_enter: StaleEnterPolicy::Overlap,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn route_changed_events_drive_the_notifier() {
        let surface = RecordingSurface::shared();
        let mut state = NavigationExtension::init_state(&env(surface.clone()));
        let mut app = AppState::default();

        NavigationExtension::handle_event(
            &mut state,
            &AppEvent::RouteChanged {
                from: None,
                to: RouteKey::new("/"),
            },
            &mut app,
        );
        NavigationExtension::handle_event(
            &mut state,
            &AppEvent::RouteChanged {
                from: Some(RouteKey::new("/")),
                to: RouteKey::new("/forum"),
            },
            &mut app,
        );
        assert_eq!(surface.messages(), vec!["Você saiu do: Painel Principal"]);

        tokio::time::advance(Duration::from_millis(301)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        assert_eq!(
            surface.messages(),
            vec![
                "Você saiu do: Painel Principal",
                "Você entrou nos: Fóruns de Discussão",
            ]
        );
        assert_eq!(state.previous(), Some(&RouteKey::new("/forum")));
    }

    #[test]
    fn other_events_are_ignored() {
        let surface = RecordingSurface::shared();
        let mut state = NavigationExtension::init_state(&env(surface.clone()));
        let mut app = AppState::default();

        NavigationExtension::handle_event(
            &mut state,
            &AppEvent::ModeChanged {
                from: crate::app::Mode::Normal,
                to: crate::app::Mode::Palette,
            },
            &mut app,
        );
        assert!(state.previous().is_none());
        assert!(surface.messages().is_empty());
    }
}
