mod actors;
mod core;
mod event_bus;
mod event_loop;
mod input_ops;
mod nav;
mod state;
pub(crate) mod terminal_session;
mod view_ops;

#[cfg(test)]
mod tests;

pub use core::{App, ExtensionSubsystem, InteractionSubsystem, NotificationSubsystem, PaletteSubsystem};
pub use nav::{
    NOT_FOUND_TITLE, PROFILE_PATH, ROUTES, RouteEntry, route_at, route_index, route_title,
    step_route,
};
pub use state::{AppState, Mode, PaletteRequest, StatusState};
