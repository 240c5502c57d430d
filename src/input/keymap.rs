use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{Mode, route_at};
use crate::command::Command;
use crate::palette::PaletteKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Emacs,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "emacs" => Self::Emacs,
            _ => Self::Default,
        }
    }
}

pub fn map_key_to_command_with_preset(
    key: KeyEvent,
    mode: Mode,
    preset: KeymapPreset,
) -> Option<Command> {
    match mode {
        Mode::Normal => match preset {
            KeymapPreset::Default => map_normal_mode_key_default(key),
            KeymapPreset::Emacs => map_normal_mode_key_emacs(key),
        },
        Mode::Palette => None,
    }
}

/// Palettes opened from a key start empty; field palettes get their seed at dispatch.
fn open(kind: PaletteKind) -> Option<Command> {
    Some(Command::OpenPalette { kind, seed: None })
}

fn map_normal_mode_key_default(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('l') => Some(Command::DismissToasts),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(':') => open(PaletteKind::Command),
        KeyCode::Char('a') => open(PaletteKind::Action),
        KeyCode::Char(digit @ '1'..='5') => {
            let index = digit as usize - '1' as usize;
            route_at(index).map(|route| Command::GotoRoute { route })
        }
        KeyCode::Tab => Some(Command::NextRoute),
        KeyCode::BackTab => Some(Command::PrevRoute),
        KeyCode::Char('e') => Some(Command::ToggleEdit),
        KeyCode::Char('n') => open(PaletteKind::ProfileName),
        KeyCode::Char('d') => open(PaletteKind::ProfileBio),
        KeyCode::Char('s') => Some(Command::SaveProfile),
        KeyCode::Char('r') => Some(Command::ReloadProfile),
        KeyCode::Char('v') => Some(Command::ChangeAvatar),
        KeyCode::Char('x') => Some(Command::DismissToasts),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Cancel),
        _ => None,
    }
}

fn map_normal_mode_key_emacs(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char('x') => open(PaletteKind::Command),
            KeyCode::Char('a') => open(PaletteKind::Action),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') => Some(Command::NextRoute),
            KeyCode::Char('p') => Some(Command::PrevRoute),
            KeyCode::Char('g') => Some(Command::Cancel),
            KeyCode::Char('s') => Some(Command::SaveProfile),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => map_normal_mode_key_default(key),
        };
    }

    match key.code {
        KeyCode::PageDown => Some(Command::NextRoute),
        KeyCode::PageUp => Some(Command::PrevRoute),
        _ => map_normal_mode_key_default(key),
    }
}
