use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::Command;

/// Input offered to extensions before the keymap sees it.
#[derive(Debug, Clone, Copy)]
pub enum AppInputEvent {
    Key(KeyEvent),
}

impl AppInputEvent {
    /// The typed character, when no Ctrl or Alt chord is held. Shift only changes case.
    pub fn plain_char(&self) -> Option<char> {
        let Self::Key(key) = self;
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        match key.code {
            KeyCode::Char(ch) => Some(ch),
            _ => None,
        }
    }
}

/// What an extension did with an input event. `EmitCommand` hands a command to the
/// dispatcher in place of the keymap lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum InputHookResult {
    Ignored,
    Consumed,
    EmitCommand(Command),
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::AppInputEvent;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> AppInputEvent {
        AppInputEvent::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn plain_char_ignores_chords_but_not_shift() {
        assert_eq!(
            key(KeyCode::Char('B'), KeyModifiers::SHIFT).plain_char(),
            Some('B')
        );
        assert_eq!(
            key(KeyCode::Char('b'), KeyModifiers::CONTROL).plain_char(),
            None
        );
        assert_eq!(key(KeyCode::Char('m'), KeyModifiers::ALT).plain_char(), None);
        assert_eq!(key(KeyCode::Tab, KeyModifiers::NONE).plain_char(), None);
    }
}
