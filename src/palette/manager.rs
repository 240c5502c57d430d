use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::app::AppState;
use crate::error::AppResult;

use super::kind::PaletteKind;
use super::registry::{PaletteProviderRef, PaletteRegistry};
use super::types::{
    PaletteCandidate, PaletteContext, PaletteInputMode, PaletteItemView, PaletteKeyResult,
    PaletteSubmitAction, PaletteTabEffect, PaletteView,
};

#[derive(Debug)]
struct PaletteSession {
    id: u64,
    kind: PaletteKind,
    seed: Option<String>,
    mode: PaletteInputMode,
    input: Input,
    title: String,
    candidates: Vec<PaletteCandidate>,
    cursor: usize,
    assistive_text: Option<String>,
}

impl PaletteSession {
    fn context<'a>(&'a self, app: &'a AppState) -> PaletteContext<'a> {
        PaletteContext {
            app,
            kind: self.kind,
            input: self.input.value(),
            seed: self.seed.as_deref(),
        }
    }

    fn selected(&self) -> Option<&PaletteCandidate> {
        self.candidates.get(self.cursor)
    }

    /// Re-queries the provider after the input changed. The cursor is clamped, not reset,
    /// so narrowing keeps the highlighted row when it survives.
    fn refresh(&mut self, provider: PaletteProviderRef<'_>, app: &AppState) -> AppResult<()> {
        let ctx = self.context(app);
        let title = provider.title(&ctx);
        let candidates = match self.mode {
            PaletteInputMode::Suggest => provider.list(&ctx)?,
            PaletteInputMode::FreeText => Vec::new(),
        };
        let cursor = self.cursor.min(candidates.len().saturating_sub(1));
        let assistive_text = provider.assistive_text(&ctx, candidates.get(cursor));

        self.title = title;
        self.candidates = candidates;
        self.cursor = cursor;
        self.assistive_text = assistive_text;
        Ok(())
    }

    /// Moves the highlight by one row, wrapping at both ends.
    fn step_cursor(&mut self, forward: bool) -> bool {
        let len = self.candidates.len();
        if len == 0 {
            return false;
        }
        self.cursor = if forward {
            (self.cursor + 1) % len
        } else {
            (self.cursor + len - 1) % len
        };
        true
    }

    fn apply_tab(&mut self, effect: PaletteTabEffect) -> bool {
        match effect {
            PaletteTabEffect::Noop => false,
            PaletteTabEffect::Complete(value) => {
                self.input = Input::new(value);
                true
            }
        }
    }
}

/// Owns at most one open palette. Every open gets a fresh id so late results from a
/// previous session cannot close the current one.
#[derive(Default)]
pub struct PaletteManager {
    issued: u64,
    active: Option<PaletteSession>,
}

impl PaletteManager {
    pub fn open(
        &mut self,
        registry: &PaletteRegistry,
        app: &AppState,
        kind: PaletteKind,
        seed: Option<String>,
    ) -> AppResult<()> {
        let provider = registry.get(kind);
        self.issued = self.issued.saturating_add(1);
        let mut session = PaletteSession {
            id: self.issued,
            kind,
            input: Input::new(provider.initial_input(seed.as_deref())),
            seed,
            mode: provider.input_mode(),
            title: String::new(),
            candidates: Vec::new(),
            cursor: 0,
            assistive_text: None,
        };
        session.refresh(provider, app)?;
        tracing::debug!(?kind, session = session.id, "palette opened");
        self.active = Some(session);
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn close(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn close_if_matches(&mut self, session_id: u64) -> bool {
        if self.active.as_ref().map(|session| session.id) != Some(session_id) {
            return false;
        }
        self.active = None;
        true
    }

    pub fn handle_key(
        &mut self,
        registry: &PaletteRegistry,
        app: &AppState,
        key: KeyEvent,
    ) -> AppResult<PaletteKeyResult> {
        let Some(session) = self.active.as_mut() else {
            return Ok(PaletteKeyResult::Consumed { redraw: false });
        };
        let provider = registry.get(session.kind);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        let redraw = match key.code {
            KeyCode::Esc => {
                return Ok(PaletteKeyResult::CloseRequested {
                    session_id: session.id,
                });
            }
            KeyCode::Enter => {
                let effect = provider.on_submit(&session.context(app), session.selected())?;
                return Ok(PaletteKeyResult::Submit(PaletteSubmitAction {
                    session_id: session.id,
                    effect,
                }));
            }
            KeyCode::Up => session.step_cursor(false),
            KeyCode::Down => session.step_cursor(true),
            KeyCode::Char('p') if ctrl => session.step_cursor(false),
            KeyCode::Char('n') if ctrl => session.step_cursor(true),
            KeyCode::Tab => {
                let effect = provider.on_tab(&session.context(app), session.selected())?;
                if session.apply_tab(effect) {
                    session.refresh(provider, app)?;
                }
                true
            }
            _ => {
                let changed = session
                    .input
                    .handle_event(&Event::Key(key))
                    .is_some_and(|change| change.value);
                if changed {
                    session.refresh(provider, app)?;
                }
                true
            }
        };
        Ok(PaletteKeyResult::Consumed { redraw })
    }

    pub fn view(&self) -> Option<PaletteView> {
        let session = self.active.as_ref()?;
        let items = session
            .candidates
            .iter()
            .enumerate()
            .map(|(row, candidate)| PaletteItemView {
                label: candidate.label.clone(),
                detail: candidate.detail.clone(),
                selected: row == session.cursor,
            })
            .collect();
        Some(PaletteView {
            title: session.title.clone(),
            kind: session.kind,
            input: session.input.value().to_string(),
            cursor: session.input.visual_cursor(),
            assistive_text: session.assistive_text.clone(),
            selected_idx: session.cursor,
            items,
        })
    }
}
