use super::kind::PaletteKind;
use crate::app::AppState;
use crate::command::Command;
use crate::error::AppResult;

/// `Suggest` lists the provider's candidates under the input and lets the arrows pick
/// one; `FreeText` is a bare text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteInputMode {
    Suggest,
    FreeText,
}

/// One row under the input. `id` is what submit and Tab act on; `label` is what is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteCandidate {
    pub id: String,
    pub label: String,
    pub detail: Option<String>,
}

/// Result of Enter. The session closes in every case; `Reopen` opens a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteSubmitEffect {
    Reopen {
        kind: PaletteKind,
        seed: Option<String>,
    },
    Dispatch(Command),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteTabEffect {
    Noop,
    /// Replace the input and put the cursor at its end.
    Complete(String),
}

pub struct PaletteContext<'a> {
    pub app: &'a AppState,
    pub kind: PaletteKind,
    pub input: &'a str,
    pub seed: Option<&'a str>,
}

pub trait PaletteProvider: Send + Sync {
    fn kind(&self) -> PaletteKind;
    fn title(&self, ctx: &PaletteContext<'_>) -> String;
    fn input_mode(&self) -> PaletteInputMode;
    fn list(&self, ctx: &PaletteContext<'_>) -> AppResult<Vec<PaletteCandidate>>;
    fn on_submit(
        &self,
        ctx: &PaletteContext<'_>,
        selected: Option<&PaletteCandidate>,
    ) -> AppResult<PaletteSubmitEffect>;

    fn on_tab(
        &self,
        _ctx: &PaletteContext<'_>,
        _selected: Option<&PaletteCandidate>,
    ) -> AppResult<PaletteTabEffect> {
        Ok(PaletteTabEffect::Noop)
    }

    fn assistive_text(
        &self,
        _ctx: &PaletteContext<'_>,
        _selected: Option<&PaletteCandidate>,
    ) -> Option<String> {
        None
    }

    /// Text placed in the input when the palette opens; the seed by default.
    fn initial_input(&self, seed: Option<&str>) -> String {
        seed.map(str::to_string).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteItemView {
    pub label: String,
    pub detail: Option<String>,
    pub selected: bool,
}

/// Snapshot handed to the overlay renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteView {
    pub title: String,
    pub kind: PaletteKind,
    pub input: String,
    pub cursor: usize,
    pub assistive_text: Option<String>,
    pub items: Vec<PaletteItemView>,
    pub selected_idx: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaletteSubmitAction {
    pub session_id: u64,
    pub effect: PaletteSubmitEffect,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaletteKeyResult {
    Consumed { redraw: bool },
    CloseRequested { session_id: u64 },
    Submit(PaletteSubmitAction),
}
