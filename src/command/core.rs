use crate::app::{AppState, step_route};
use crate::error::{AppError, AppResult};
use crate::notify::RouteKey;
use crate::profile::{ProfileView, SaveRequest};

use super::types::{ActionId, CommandOutcome};

pub(crate) fn goto_route(
    app: &mut AppState,
    route: RouteKey,
    action_id: ActionId,
) -> AppResult<CommandOutcome> {
    app.status.last_action_id = Some(action_id);
    if !route.as_str().starts_with('/') {
        return Err(AppError::invalid_argument("route path must start with '/'"));
    }

    if app.route == route {
        app.status.message = format!("already at {route}");
        return Ok(CommandOutcome::Noop);
    }

    app.status.message = format!("route {route}");
    app.route = route;
    Ok(CommandOutcome::Applied)
}

pub(crate) fn step(app: &mut AppState, forward: bool) -> AppResult<CommandOutcome> {
    let action_id = if forward {
        ActionId::NextRoute
    } else {
        ActionId::PrevRoute
    };
    let target = step_route(&app.route, forward);
    goto_route(app, target, action_id)
}

pub(crate) fn edit_profile(app: &mut AppState) -> AppResult<CommandOutcome> {
    app.status.last_action_id = Some(ActionId::EditProfile);
    if app.profile.editing {
        app.status.message = "already editing profile".to_string();
        return Ok(CommandOutcome::Noop);
    }
    if !app.profile.begin_edit() {
        return Err(no_profile_error(app));
    }
    app.status.message = "editing profile".to_string();
    Ok(CommandOutcome::Applied)
}

pub(crate) fn cancel_edit(app: &mut AppState) -> CommandOutcome {
    app.status.last_action_id = Some(ActionId::CancelEdit);
    if !app.profile.editing {
        app.status.message = "not editing".to_string();
        return CommandOutcome::Noop;
    }
    app.profile.cancel_edit();
    app.status.message = "edit canceled".to_string();
    CommandOutcome::Applied
}

pub(crate) fn toggle_edit(app: &mut AppState) -> AppResult<CommandOutcome> {
    app.status.last_action_id = Some(ActionId::ToggleEdit);
    if !app.profile.toggle_edit() {
        return Err(no_profile_error(app));
    }
    app.status.message = if app.profile.editing {
        "editing profile".to_string()
    } else {
        "edit canceled".to_string()
    };
    Ok(CommandOutcome::Applied)
}

pub(crate) fn set_display_name(app: &mut AppState, value: String) -> AppResult<CommandOutcome> {
    app.status.last_action_id = Some(ActionId::SetDisplayName);
    if !app.profile.set_display_name(value) {
        return Err(not_editing_error());
    }
    app.status.message = format!("name: {}", app.profile.form.display_name);
    Ok(CommandOutcome::Applied)
}

pub(crate) fn set_bio(app: &mut AppState, value: String) -> AppResult<CommandOutcome> {
    app.status.last_action_id = Some(ActionId::SetBio);
    if !app.profile.set_bio(value) {
        return Err(not_editing_error());
    }
    app.status.message = "bio updated (unsaved)".to_string();
    Ok(CommandOutcome::Applied)
}

pub(crate) fn begin_save(app: &mut AppState) -> AppResult<(CommandOutcome, Option<SaveRequest>)> {
    app.status.last_action_id = Some(ActionId::SaveProfile);
    if !app.profile.editing {
        return Err(not_editing_error());
    }

    match app.profile.begin_save()? {
        Some(request) => {
            app.status.message = "saving profile...".to_string();
            Ok((CommandOutcome::Applied, Some(request)))
        }
        None => {
            app.status.message = if app.profile.saving {
                "save already in progress".to_string()
            } else {
                "nothing to save".to_string()
            };
            Ok((CommandOutcome::Noop, None))
        }
    }
}

pub(crate) fn reload_profile(app: &mut AppState) -> CommandOutcome {
    app.status.last_action_id = Some(ActionId::ReloadProfile);
    if app.profile.profile.is_none() {
        app.profile.view = ProfileView::Loading;
    }
    app.status.message = "loading profile...".to_string();
    CommandOutcome::Applied
}

fn no_profile_error(app: &AppState) -> AppError {
    match app.profile.view {
        ProfileView::Loading => AppError::unsupported("profile is still loading"),
        ProfileView::SignedOut => AppError::unsupported("sign in to edit the profile"),
        ProfileView::NotFound | ProfileView::Ready => {
            AppError::unsupported("no profile to edit")
        }
    }
}

fn not_editing_error() -> AppError {
    AppError::invalid_argument("profile is not in edit mode")
}
