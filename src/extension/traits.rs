use std::sync::Arc;
use std::time::Duration;

use crate::app::AppState;
use crate::event::AppEvent;
use crate::input::{AppInputEvent, InputHookResult};
use crate::notify::{NotificationSurface, RouteMessages, StaleEnterPolicy, TooltipTable};

/// Shared services handed to every extension when the host mounts it.
#[derive(Clone)]
pub struct ExtensionEnv {
    pub surface: Arc<dyn NotificationSurface>,
    pub route_messages: Arc<RouteMessages>,
    pub tooltips: Arc<TooltipTable>,
    pub enter_delay: Duration,
    pub stale_enter: StaleEnterPolicy,
}

pub trait Extension {
    type State: Send;

    fn init_state(env: &ExtensionEnv) -> Self::State;

    fn handle_input(
        state: &mut Self::State,
        event: AppInputEvent,
        app: &mut AppState,
    ) -> InputHookResult {
        let _ = (state, event, app);
        InputHookResult::Ignored
    }

    fn handle_event(state: &mut Self::State, event: &AppEvent, app: &mut AppState) {
        let _ = (state, event, app);
    }

    fn on_background(state: &mut Self::State, app: &mut AppState) -> bool {
        let _ = (state, app);
        false
    }
}
