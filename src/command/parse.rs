use crate::error::{AppError, AppResult};
use crate::notify::{FeatureAction, RouteKey};
use crate::palette::PaletteKind;

use super::spec::all_command_specs;
use super::types::Command;

pub fn parse_command_text(input: &str) -> AppResult<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_argument("command must not be empty"));
    }

    let (id, args_text) = match trimmed.find(char::is_whitespace) {
        Some(index) => (&trimmed[..index], trimmed[index..].trim_start()),
        None => (trimmed, ""),
    };

    if !all_command_specs().iter().any(|spec| spec.id == id) {
        return Err(AppError::invalid_argument("unknown command id"));
    }

    match id {
        "goto-route" => parse_goto_route(args_text),
        "next-route" => parse_no_args(id, args_text, Command::NextRoute),
        "prev-route" => parse_no_args(id, args_text, Command::PrevRoute),
        "tooltip" => parse_tooltip(args_text),
        "feature" => parse_toggle_toast(id, args_text).map(|(action, feature)| {
            Command::FeatureToast { feature, action }
        }),
        "activity" => parse_toggle_toast(id, args_text).map(|(action, activity)| {
            Command::ActivityToast { activity, action }
        }),
        "dismiss-toasts" => parse_no_args(id, args_text, Command::DismissToasts),
        "edit-profile" => parse_no_args(id, args_text, Command::EditProfile),
        "cancel-edit" => parse_no_args(id, args_text, Command::CancelEdit),
        "toggle-edit" => parse_no_args(id, args_text, Command::ToggleEdit),
        "set-name" => parse_set_name(args_text),
        "set-bio" => Ok(Command::SetBio {
            value: args_text.trim().to_string(),
        }),
        "save-profile" => parse_no_args(id, args_text, Command::SaveProfile),
        "reload-profile" => parse_no_args(id, args_text, Command::ReloadProfile),
        "change-avatar" => parse_no_args(id, args_text, Command::ChangeAvatar),
        "open-palette" => parse_open_palette(args_text),
        "close-palette" => parse_no_args(id, args_text, Command::ClosePalette),
        "cancel" => parse_no_args(id, args_text, Command::Cancel),
        "quit" => parse_no_args(id, args_text, Command::Quit),
        _ => Err(AppError::unsupported(
            "command parser is out of sync with registry",
        )),
    }
}

fn parse_no_args(id: &str, args_text: &str, cmd: Command) -> AppResult<Command> {
    if args_text.is_empty() {
        return Ok(cmd);
    }

    Err(AppError::invalid_argument(format!(
        "{id} does not accept arguments"
    )))
}

fn parse_goto_route(args_text: &str) -> AppResult<Command> {
    let mut parts = args_text.split_whitespace();
    let Some(path) = parts.next() else {
        return Err(AppError::invalid_argument(
            "goto-route requires 1 argument: path",
        ));
    };
    if parts.next().is_some() {
        return Err(AppError::invalid_argument(
            "goto-route accepts exactly 1 argument",
        ));
    }
    if !path.starts_with('/') {
        return Err(AppError::invalid_argument("route path must start with '/'"));
    }

    Ok(Command::GotoRoute {
        route: RouteKey::new(path),
    })
}

/// `tooltip <action>[| custom message]`. The action label may contain spaces; a bare
/// `| message` skips the table lookup.
fn parse_tooltip(args_text: &str) -> AppResult<Command> {
    let (action, custom) = match args_text.split_once('|') {
        Some((action, custom)) => {
            let custom = custom.trim();
            let custom = if custom.is_empty() {
                None
            } else {
                Some(custom.to_string())
            };
            (action.trim(), custom)
        }
        None => (args_text.trim(), None),
    };
    if action.is_empty() && custom.is_none() {
        return Err(AppError::invalid_argument(
            "tooltip requires an action or a | message",
        ));
    }

    Ok(Command::ShowTooltip {
        action: action.to_string(),
        custom,
    })
}

fn parse_toggle_toast(id: &str, args_text: &str) -> AppResult<(FeatureAction, String)> {
    let trimmed = args_text.trim();
    let (action_text, name) = match trimmed.find(char::is_whitespace) {
        Some(index) => (&trimmed[..index], trimmed[index..].trim()),
        None => (trimmed, ""),
    };
    if action_text.is_empty() || name.is_empty() {
        return Err(AppError::invalid_argument(format!(
            "{id} requires 2 arguments: enter|exit name"
        )));
    }

    let action = FeatureAction::parse(action_text).ok_or_else(|| {
        AppError::invalid_argument(format!("{id} action must be 'enter' or 'exit'"))
    })?;
    Ok((action, name.to_string()))
}

fn parse_set_name(args_text: &str) -> AppResult<Command> {
    let value = args_text.trim();
    if value.is_empty() {
        return Err(AppError::invalid_argument(
            "set-name requires 1 argument: name",
        ));
    }
    Ok(Command::SetDisplayName {
        value: value.to_string(),
    })
}

fn parse_open_palette(args_text: &str) -> AppResult<Command> {
    let trimmed = args_text.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_argument(
            "open-palette requires 1 argument: kind",
        ));
    }

    let (kind_text, seed) = match trimmed.find(char::is_whitespace) {
        Some(index) => {
            let kind = trimmed[..index].trim();
            let seed = trimmed[index..].trim_start();
            let seed = if seed.is_empty() {
                None
            } else {
                Some(seed.to_string())
            };
            (kind, seed)
        }
        None => (trimmed, None),
    };

    let kind =
        PaletteKind::parse(kind_text).ok_or(AppError::invalid_argument("unknown palette kind"))?;

    Ok(Command::OpenPalette { kind, seed })
}
