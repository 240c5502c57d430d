use crate::command::ActionId;
use crate::notify::RouteKey;
use crate::palette::PaletteKind;
use crate::profile::ProfileState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Palette,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteRequest {
    Open {
        kind: PaletteKind,
        seed: Option<String>,
    },
    Close,
}

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_action_id: Option<ActionId>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub route: RouteKey,
    pub mode: Mode,
    pub status: StatusState,
    pub profile: ProfileState,
}

impl AppState {
    pub fn at_route(route: RouteKey) -> Self {
        Self {
            route,
            ..Self::default()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            route: RouteKey::new("/"),
            mode: Mode::Normal,
            status: StatusState::default(),
            profile: ProfileState::default(),
        }
    }
}
