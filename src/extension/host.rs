use std::sync::Arc;

use tracing::debug;

use crate::app::AppState;
use crate::event::AppEvent;
use crate::input::{AppInputEvent, InputHookResult};
use crate::notify::{
    ChannelSurface, DEFAULT_ENTER_DELAY, FeatureAction, NotificationSurface, RouteNotifier,
    StaleEnterPolicy, TooltipResolver, default_route_messages, default_tooltip_table,
};

use super::header::HeaderExtension;
use super::navigation::NavigationExtension;
use super::traits::{Extension, ExtensionEnv};

/// Owns extension state and the dispatchers commands reach through it.
/// Dropping the host unmounts the route notifier.
pub struct ExtensionHost {
    navigation: RouteNotifier,
    header: (),
    tooltips: TooltipResolver,
    surface: Arc<dyn NotificationSurface>,
}

impl ExtensionHost {
    pub fn new(env: ExtensionEnv) -> Self {
        Self {
            navigation: NavigationExtension::init_state(&env),
            header: HeaderExtension::init_state(&env),
            tooltips: TooltipResolver::new(env.tooltips.clone(), env.surface.clone()),
            surface: env.surface,
        }
    }

    /// Host over the built-in tables, with a surface nobody reads from.
    pub fn detached() -> Self {
        let (surface, _rx) = ChannelSurface::new();
        Self::new(ExtensionEnv {
            surface: Arc::new(surface),
            route_messages: Arc::new(default_route_messages()),
            tooltips: Arc::new(default_tooltip_table()),
            enter_delay: DEFAULT_ENTER_DELAY,
            stale_enter: StaleEnterPolicy::default(),
        })
    }

    pub fn handle_input(&mut self, event: AppInputEvent, app: &mut AppState) -> InputHookResult {
        let header_result = HeaderExtension::handle_input(&mut self.header, event, app);
        if header_result != InputHookResult::Ignored {
            return header_result;
        }

        NavigationExtension::handle_input(&mut self.navigation, event, app)
    }

    pub fn handle_event(&mut self, event: &AppEvent, app: &mut AppState) {
        NavigationExtension::handle_event(&mut self.navigation, event, app);
        HeaderExtension::handle_event(&mut self.header, event, app);
    }

    pub fn drain_background(&mut self, app: &mut AppState) -> bool {
        let navigation_changed = NavigationExtension::on_background(&mut self.navigation, app);
        let header_changed = HeaderExtension::on_background(&mut self.header, app);
        navigation_changed || header_changed
    }

    /// A blank label with a message shows it as-is; anything else goes through the table.
    pub fn show_tooltip(&self, action: &str, custom_message: Option<&str>) {
        match custom_message {
            Some(message) if action.trim().is_empty() && !message.is_empty() => {
                debug!("showing custom tooltip");
                self.tooltips.show_custom_tooltip(message, None, None);
            }
            _ => {
                debug!(action, "showing action tooltip");
                self.tooltips.show_tooltip(action, custom_message);
            }
        }
    }

    pub fn emit_feature_toast(&self, feature: &str, action: FeatureAction) {
        self.navigation.emit_feature_toast(feature, action);
    }

    pub fn emit_activity_toast(&self, activity: &str, action: FeatureAction) {
        self.navigation
            .emit_activity_toast(activity, action == FeatureAction::Enter);
    }

    pub fn surface(&self) -> &dyn NotificationSurface {
        self.surface.as_ref()
    }

    pub fn route_notifier(&self) -> &RouteNotifier {
        &self.navigation
    }
}

impl Default for ExtensionHost {
    fn default() -> Self {
        Self::detached()
    }
}
