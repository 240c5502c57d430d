use crate::command::Command;
use crate::error::AppResult;
use crate::palette::{
    PaletteCandidate, PaletteContext, PaletteInputMode, PaletteKind, PaletteProvider,
    PaletteSubmitEffect,
};

/// One free-text field of the profile edit form, seeded with its current value.
pub struct ProfileFieldPaletteProvider {
    kind: PaletteKind,
}

impl ProfileFieldPaletteProvider {
    pub fn display_name() -> Self {
        Self {
            kind: PaletteKind::ProfileName,
        }
    }

    pub fn bio() -> Self {
        Self {
            kind: PaletteKind::ProfileBio,
        }
    }

    fn is_name(&self) -> bool {
        self.kind == PaletteKind::ProfileName
    }
}

impl PaletteProvider for ProfileFieldPaletteProvider {
    fn kind(&self) -> PaletteKind {
        self.kind
    }

    fn title(&self, _ctx: &PaletteContext<'_>) -> String {
        if self.is_name() {
            "Nome de exibição".to_string()
        } else {
            "Bio".to_string()
        }
    }

    fn input_mode(&self) -> PaletteInputMode {
        PaletteInputMode::FreeText
    }

    fn list(&self, _ctx: &PaletteContext<'_>) -> AppResult<Vec<PaletteCandidate>> {
        Ok(Vec::new())
    }

    fn on_submit(
        &self,
        ctx: &PaletteContext<'_>,
        _selected: Option<&PaletteCandidate>,
    ) -> AppResult<PaletteSubmitEffect> {
        let value = ctx.input.trim().to_string();
        let command = if self.is_name() {
            if value.is_empty() {
                return Ok(PaletteSubmitEffect::Reopen {
                    kind: self.kind,
                    seed: Some(ctx.input.to_string()),
                });
            }
            Command::SetDisplayName { value }
        } else {
            Command::SetBio { value }
        };

        Ok(PaletteSubmitEffect::Dispatch(command))
    }

    fn assistive_text(
        &self,
        ctx: &PaletteContext<'_>,
        _selected: Option<&PaletteCandidate>,
    ) -> Option<String> {
        if self.is_name() && ctx.input.trim().is_empty() {
            return Some("display name must not be empty".to_string());
        }
        Some("Enter: apply  Esc: cancel  (s saves)".to_string())
    }
}
