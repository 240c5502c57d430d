use crossterm::event::KeyEvent;

use crate::command::{ActionId, Command, CommandDispatchResult, dispatch, drain_background_events};
use crate::error::AppResult;
use crate::event::AppEvent;
use crate::input::InputEventOutcome;
use crate::input::keymap::{KeymapPreset, map_key_to_command_with_preset};
use crate::input::{AppInputEvent, InputHookResult};
use crate::palette::{PaletteKeyResult, PaletteKind, PaletteSubmitEffect, PaletteView};

use super::core::InteractionSubsystem;
use super::state::{AppState, Mode, PaletteRequest};

impl InputEventOutcome {
    fn repaint(redraw: bool) -> Self {
        Self {
            redraw,
            ..Self::default()
        }
    }

    /// A palette that closed leaves its overlay behind unless the terminal is cleared.
    fn palette_changed(changed: bool, command: Option<Command>) -> Self {
        Self {
            redraw: changed,
            clear_terminal: changed,
            command,
            ..Self::default()
        }
    }
}

impl InteractionSubsystem {
    pub(crate) fn handle_key_event(
        &mut self,
        state: &mut AppState,
        key: KeyEvent,
        keymap_preset: &str,
    ) -> AppResult<InputEventOutcome> {
        if state.mode == Mode::Palette {
            return self.palette_key(state, key);
        }

        let command = match self.extensions.host.handle_input(AppInputEvent::Key(key), state) {
            InputHookResult::Consumed => return Ok(InputEventOutcome::repaint(true)),
            InputHookResult::EmitCommand(command) => Some(command),
            InputHookResult::Ignored => {
                map_key_to_command_with_preset(key, state.mode, KeymapPreset::parse(keymap_preset))
            }
        };

        Ok(match command {
            None => InputEventOutcome::default(),
            Some(Command::Quit) => InputEventOutcome {
                quit_requested: true,
                ..InputEventOutcome::default()
            },
            Some(command) => InputEventOutcome {
                command: Some(command),
                ..InputEventOutcome::default()
            },
        })
    }

    fn palette_key(&mut self, state: &mut AppState, key: KeyEvent) -> AppResult<InputEventOutcome> {
        let result = self
            .palette
            .manager
            .handle_key(&self.palette.registry, state, key)?;
        match result {
            PaletteKeyResult::Consumed { redraw } => Ok(InputEventOutcome::repaint(redraw)),
            PaletteKeyResult::CloseRequested { session_id } => {
                let closed = self.close_session(state, session_id);
                Ok(InputEventOutcome::palette_changed(closed, None))
            }
            PaletteKeyResult::Submit(action) => {
                if !self.close_session(state, action.session_id) {
                    return Ok(InputEventOutcome::default());
                }
                let command = match action.effect {
                    PaletteSubmitEffect::Dispatch(command) => Some(command),
                    PaletteSubmitEffect::Reopen { kind, seed } => {
                        self.palette
                            .pending_requests
                            .push_back(PaletteRequest::Open { kind, seed });
                        None
                    }
                };
                self.apply_palette_requests(state);
                Ok(InputEventOutcome::palette_changed(true, command))
            }
        }
    }

    fn close_session(&mut self, state: &mut AppState, session_id: u64) -> bool {
        let closed = self.palette.manager.close_if_matches(session_id);
        if closed {
            state.mode = Mode::Normal;
        }
        closed
    }

    pub(crate) fn drain_background_events(&mut self, state: &mut AppState) -> bool {
        drain_background_events(state, &mut self.extensions.host)
    }

    pub(crate) fn palette_view(&self) -> Option<PaletteView> {
        self.palette.manager.view()
    }

    /// Applies queued open/close requests in order. Returns whether the mode or the
    /// overlay changed.
    pub(crate) fn apply_palette_requests(&mut self, state: &mut AppState) -> bool {
        let mut changed = false;
        while let Some(request) = self.palette.pending_requests.pop_front() {
            changed |= match request {
                PaletteRequest::Open { kind, seed } => self.open_requested(state, kind, seed),
                PaletteRequest::Close => {
                    let closed = self.palette.manager.close();
                    if closed {
                        state.mode = Mode::Normal;
                        state.status.last_action_id = Some(ActionId::ClosePalette);
                        state.status.message = "palette closed".to_string();
                    }
                    closed
                }
            };
        }

        if state.mode == Mode::Palette && !self.palette.manager.is_open() {
            state.mode = Mode::Normal;
            changed = true;
        }
        changed
    }

    fn open_requested(
        &mut self,
        state: &mut AppState,
        kind: PaletteKind,
        seed: Option<String>,
    ) -> bool {
        state.status.last_action_id = Some(ActionId::OpenPalette);
        let opened = self
            .palette
            .manager
            .open(&self.palette.registry, state, kind, seed);
        match opened {
            Ok(()) => {
                state.mode = Mode::Palette;
                state.status.message = format!("palette opened: {}", kind.id());
                true
            }
            Err(err) => {
                tracing::warn!(kind = kind.id(), error = %err, "palette failed to open");
                state.status.message = format!("failed to open palette: {err}");
                false
            }
        }
    }

    pub(crate) fn dispatch_command(
        &mut self,
        state: &mut AppState,
        command: Command,
    ) -> AppResult<CommandDispatchResult> {
        dispatch(
            state,
            command,
            &mut self.extensions.host,
            &mut self.palette.pending_requests,
        )
    }

    pub(crate) fn handle_app_event(&mut self, state: &mut AppState, event: &AppEvent) {
        self.extensions.host.handle_event(event, state);
    }
}
