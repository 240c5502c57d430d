use crossterm::event::{Event, KeyEventKind};

use crate::app::App;
use crate::command::Command;
use crate::error::AppResult;

#[derive(Debug, Default)]
pub(crate) struct InputEventOutcome {
    pub(crate) redraw: bool,
    pub(crate) clear_terminal: bool,
    pub(crate) quit_requested: bool,
    pub(crate) command: Option<Command>,
}

impl App {
    pub(crate) fn handle_input_event(&mut self, event: Event) -> AppResult<InputEventOutcome> {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                self.interaction
                    .handle_key_event(&mut self.state, key, &self.config.keymap.preset)
            }
            Event::Resize(_, _) => Ok(InputEventOutcome {
                redraw: true,
                ..InputEventOutcome::default()
            }),
            _ => Ok(InputEventOutcome::default()),
        }
    }
}
