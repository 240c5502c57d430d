use std::sync::Arc;

use crate::command::Command;
use crate::error::AppResult;
use crate::notify::TooltipTable;
use crate::palette::{
    PaletteCandidate, PaletteContext, PaletteInputMode, PaletteKind, PaletteProvider,
    PaletteSubmitEffect, PaletteTabEffect,
};

/// Free-text action labels resolved through the tooltip table. `label | message`
/// overrides the resolved message.
pub struct ActionPaletteProvider {
    table: Arc<TooltipTable>,
}

impl ActionPaletteProvider {
    pub fn new(table: Arc<TooltipTable>) -> Self {
        Self { table }
    }
}

impl PaletteProvider for ActionPaletteProvider {
    fn kind(&self) -> PaletteKind {
        PaletteKind::Action
    }

    fn title(&self, _ctx: &PaletteContext<'_>) -> String {
        "Action".to_string()
    }

    fn input_mode(&self) -> PaletteInputMode {
        PaletteInputMode::Suggest
    }

    fn list(&self, ctx: &PaletteContext<'_>) -> AppResult<Vec<PaletteCandidate>> {
        let (label, _) = split_custom(ctx.input);
        Ok(self
            .table
            .matches(label)
            .map(|entry| PaletteCandidate {
                id: entry.key.clone(),
                label: entry.key.clone(),
                detail: Some(format!("{} {}", entry.icon.glyph(), entry.message)),
            })
            .collect())
    }

    /// Completes the label and keeps any `| message` already typed.
    fn on_tab(
        &self,
        ctx: &PaletteContext<'_>,
        selected: Option<&PaletteCandidate>,
    ) -> AppResult<PaletteTabEffect> {
        let Some(candidate) = selected else {
            return Ok(PaletteTabEffect::Noop);
        };
        let value = match split_custom(ctx.input).1 {
            Some(custom) => format!("{} | {custom}", candidate.label),
            None => candidate.label.clone(),
        };
        Ok(PaletteTabEffect::Complete(value))
    }

    fn on_submit(
        &self,
        ctx: &PaletteContext<'_>,
        selected: Option<&PaletteCandidate>,
    ) -> AppResult<PaletteSubmitEffect> {
        let (label, custom) = split_custom(ctx.input);
        let action = if label.is_empty() {
            match selected {
                Some(candidate) => candidate.label.clone(),
                None => {
                    return Ok(PaletteSubmitEffect::Reopen {
                        kind: self.kind(),
                        seed: Some(ctx.input.to_string()),
                    });
                }
            }
        } else {
            label.to_string()
        };

        Ok(PaletteSubmitEffect::Dispatch(Command::ShowTooltip {
            action,
            custom: custom.map(str::to_string),
        }))
    }

    fn assistive_text(
        &self,
        ctx: &PaletteContext<'_>,
        _selected: Option<&PaletteCandidate>,
    ) -> Option<String> {
        let (label, custom) = split_custom(ctx.input);
        if label.is_empty() {
            return Some("type an action label  Tab: complete  | message: override".to_string());
        }

        let entry = self.table.resolve(label);
        let key = if std::ptr::eq(entry, self.table.default_entry()) {
            "(default)"
        } else {
            entry.key.as_str()
        };
        let message = custom.unwrap_or(entry.message.as_str());
        Some(format!("-> {key}: {} {message}", entry.icon.glyph()))
    }
}

fn split_custom(input: &str) -> (&str, Option<&str>) {
    match input.split_once('|') {
        Some((label, custom)) => {
            let custom = custom.trim();
            (label.trim(), (!custom.is_empty()).then_some(custom))
        }
        None => (input.trim(), None),
    }
}
