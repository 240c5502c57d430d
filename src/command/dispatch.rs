use std::collections::VecDeque;

use tracing::debug;

use crate::app::{AppState, Mode, PROFILE_PATH, PaletteRequest};
use crate::error::{AppError, AppResult};
use crate::event::AppEvent;
use crate::extension::ExtensionHost;
use crate::notify::RouteKey;
use crate::palette::PaletteKind;
use crate::profile::{SaveRequest, announce_avatar_soon};

use super::core::{
    begin_save, cancel_edit, edit_profile, goto_route, reload_profile, set_bio,
    set_display_name, step, toggle_edit,
};
use super::types::{ActionId, Command, CommandOutcome};

/// Work the event loop performs on behalf of a command after dispatch returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    LoadProfile,
    SaveProfile(SaveRequest),
    DismissToasts,
}

#[derive(Debug, Clone)]
pub struct CommandDispatchResult {
    pub outcome: CommandOutcome,
    pub emitted_events: Vec<AppEvent>,
    pub side_effects: Vec<SideEffect>,
}

pub fn dispatch(
    app: &mut AppState,
    cmd: Command,
    extension_host: &mut ExtensionHost,
    palette_requests: &mut VecDeque<PaletteRequest>,
) -> AppResult<CommandDispatchResult> {
    let previous_route = app.route.clone();
    let prev_mode = app.mode;
    let action_id = cmd.action_id();
    let mut side_effects = Vec::new();
    debug!(command = action_id.as_str(), "dispatching command");

    let outcome = match cmd {
        Command::GotoRoute { route } => goto_route(app, route, ActionId::GotoRoute),
        Command::NextRoute => step(app, true),
        Command::PrevRoute => step(app, false),
        Command::ShowTooltip { action, custom } => {
            extension_host.show_tooltip(&action, custom.as_deref());
            app.status.last_action_id = Some(ActionId::ShowTooltip);
            app.status.message = format!("tooltip: {action}");
            Ok(CommandOutcome::Applied)
        }
        Command::FeatureToast { feature, action } => {
            extension_host.emit_feature_toast(&feature, action);
            app.status.last_action_id = Some(ActionId::FeatureToast);
            app.status.message = format!("{} {feature}", action.id());
            Ok(CommandOutcome::Applied)
        }
        Command::ActivityToast { activity, action } => {
            extension_host.emit_activity_toast(&activity, action);
            app.status.last_action_id = Some(ActionId::ActivityToast);
            app.status.message = format!("{} {activity}", action.id());
            Ok(CommandOutcome::Applied)
        }
        Command::DismissToasts => {
            side_effects.push(SideEffect::DismissToasts);
            app.status.last_action_id = Some(ActionId::DismissToasts);
            app.status.message = "toasts dismissed".to_string();
            Ok(CommandOutcome::Applied)
        }
        Command::EditProfile => edit_profile(app),
        Command::CancelEdit => Ok(cancel_edit(app)),
        Command::ToggleEdit => toggle_edit(app),
        Command::SetDisplayName { value } => set_display_name(app, value),
        Command::SetBio { value } => set_bio(app, value),
        Command::SaveProfile => begin_save(app).map(|(outcome, request)| {
            if let Some(request) = request {
                side_effects.push(SideEffect::SaveProfile(request));
            }
            outcome
        }),
        Command::ReloadProfile => {
            side_effects.push(SideEffect::LoadProfile);
            Ok(reload_profile(app))
        }
        Command::ChangeAvatar => {
            announce_avatar_soon(extension_host.surface());
            app.status.last_action_id = Some(ActionId::ChangeAvatar);
            app.status.message = "avatar upload is not available yet".to_string();
            Ok(CommandOutcome::Applied)
        }
        Command::OpenPalette { kind, seed } => open_palette(app, kind, seed, palette_requests),
        Command::ClosePalette => {
            palette_requests.push_back(PaletteRequest::Close);
            app.status.last_action_id = Some(ActionId::ClosePalette);
            app.status.message = "closing palette".to_string();
            Ok(CommandOutcome::Applied)
        }
        Command::Cancel => {
            if app.mode == Mode::Palette {
                palette_requests.push_back(PaletteRequest::Close);
                app.status.message = "canceled current mode".to_string();
            } else if app.profile.editing {
                app.profile.cancel_edit();
                app.status.message = "edit canceled".to_string();
            } else {
                app.mode = Mode::Normal;
                app.status.message = "canceled current mode".to_string();
            }
            app.status.last_action_id = Some(ActionId::Cancel);
            Ok(CommandOutcome::Applied)
        }
        Command::Quit => {
            app.status.last_action_id = Some(ActionId::Quit);
            app.status.message = "quit requested".to_string();
            Ok(CommandOutcome::QuitRequested)
        }
    }?;

    let mut emitted_events = collect_transition_events(app, &previous_route, prev_mode);
    if app.route != previous_route && app.route.as_str() == PROFILE_PATH {
        side_effects.push(SideEffect::LoadProfile);
    }
    emitted_events.push(AppEvent::CommandExecuted {
        id: action_id,
        outcome,
    });

    Ok(CommandDispatchResult {
        outcome,
        emitted_events,
        side_effects,
    })
}

pub fn drain_background_events(app: &mut AppState, extension_host: &mut ExtensionHost) -> bool {
    extension_host.drain_background(app)
}

/// Field palettes only open while editing, seeded with the current form value.
fn open_palette(
    app: &mut AppState,
    kind: PaletteKind,
    seed: Option<String>,
    palette_requests: &mut VecDeque<PaletteRequest>,
) -> AppResult<CommandOutcome> {
    app.status.last_action_id = Some(ActionId::OpenPalette);
    let seed = match kind {
        PaletteKind::ProfileName | PaletteKind::ProfileBio if !app.profile.editing => {
            return Err(AppError::invalid_argument("profile is not in edit mode"));
        }
        PaletteKind::ProfileName => seed.or_else(|| Some(app.profile.form.display_name.clone())),
        PaletteKind::ProfileBio => seed.or_else(|| Some(app.profile.form.bio.clone())),
        PaletteKind::Command | PaletteKind::Action => seed,
    };

    palette_requests.push_back(PaletteRequest::Open { kind, seed });
    app.status.message = "opening palette".to_string();
    Ok(CommandOutcome::Applied)
}

fn collect_transition_events(
    app: &AppState,
    previous_route: &RouteKey,
    prev_mode: Mode,
) -> Vec<AppEvent> {
    let mut events = Vec::new();
    if &app.route != previous_route {
        events.push(AppEvent::RouteChanged {
            from: Some(previous_route.clone()),
            to: app.route.clone(),
        });
    }

    if app.mode != prev_mode {
        events.push(AppEvent::ModeChanged {
            from: prev_mode,
            to: app.mode,
        });
    }
    events
}
