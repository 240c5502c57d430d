use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::backend::CommunityBackend;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::extension::{ExtensionEnv, ExtensionHost};
use crate::notify::{
    ChannelSurface, Notification, NotificationSurface, RouteKey, RouteMessages, ToastQueue,
    default_route_messages, default_tooltip_table,
};
use crate::palette::{PaletteManager, PaletteRegistry};

use super::state::{AppState, PaletteRequest};

#[derive(Default)]
pub struct ExtensionSubsystem {
    pub host: ExtensionHost,
}

#[derive(Default)]
pub struct PaletteSubsystem {
    pub registry: PaletteRegistry,
    pub manager: PaletteManager,
    pub pending_requests: VecDeque<PaletteRequest>,
}

#[derive(Default)]
pub struct InteractionSubsystem {
    pub extensions: ExtensionSubsystem,
    pub palette: PaletteSubsystem,
}

/// Receiving end of the notification surface plus the toasts currently on screen.
pub struct NotificationSubsystem {
    pub inbox: flume::Receiver<Notification>,
    pub toasts: ToastQueue,
}

impl NotificationSubsystem {
    /// Moves everything the surface has received into the toast queue.
    pub(crate) fn pump(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for notification in self.inbox.try_iter() {
            self.toasts.push(notification, now);
            changed = true;
        }
        changed
    }
}

pub struct App {
    pub state: AppState,
    pub interaction: InteractionSubsystem,
    pub notifications: NotificationSubsystem,
    pub backend: Arc<dyn CommunityBackend>,
    pub config: Config,
}

impl App {
    pub fn new(backend: Arc<dyn CommunityBackend>) -> AppResult<Self> {
        let config = Config::load()?;
        Self::new_with_config(config, backend)
    }

    pub fn new_with_config(config: Config, backend: Arc<dyn CommunityBackend>) -> AppResult<Self> {
        let initial_route = config.navigation.initial_route.trim();
        if !initial_route.starts_with('/') {
            return Err(AppError::invalid_argument(format!(
                "initial route must start with '/': {initial_route}"
            )));
        }

        let (surface, inbox) = ChannelSurface::new();
        let surface: Arc<dyn NotificationSurface> = Arc::new(surface);
        let route_messages: RouteMessages = default_route_messages().with_overrides(
            &config.navigation.enter_messages,
            &config.navigation.exit_messages,
        );
        let tooltips = Arc::new(default_tooltip_table());
        let env = ExtensionEnv {
            surface,
            route_messages: Arc::new(route_messages),
            tooltips: tooltips.clone(),
            enter_delay: Duration::from_millis(config.navigation.enter_delay_ms),
            stale_enter: config.navigation.stale_enter,
        };

        Ok(Self {
            state: AppState::at_route(RouteKey::new(initial_route)),
            interaction: InteractionSubsystem {
                extensions: ExtensionSubsystem {
                    host: ExtensionHost::new(env),
                },
                palette: PaletteSubsystem {
                    registry: PaletteRegistry::new(tooltips),
                    manager: PaletteManager::default(),
                    pending_requests: VecDeque::new(),
                },
            },
            notifications: NotificationSubsystem {
                inbox,
                toasts: ToastQueue::new(config.toast.max_visible),
            },
            backend,
            config,
        })
    }
}
