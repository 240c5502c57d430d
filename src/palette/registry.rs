use std::sync::Arc;

use crate::error::AppResult;
use crate::notify::{TooltipTable, default_tooltip_table};

use super::providers::{ActionPaletteProvider, CommandPaletteProvider, ProfileFieldPaletteProvider};
use super::{
    PaletteCandidate, PaletteContext, PaletteInputMode, PaletteKind, PaletteProvider,
    PaletteSubmitEffect, PaletteTabEffect,
};

pub struct PaletteRegistry {
    command: CommandPaletteProvider,
    action: ActionPaletteProvider,
    profile_name: ProfileFieldPaletteProvider,
    profile_bio: ProfileFieldPaletteProvider,
}

#[derive(Clone, Copy)]
pub enum PaletteProviderRef<'a> {
    Command(&'a CommandPaletteProvider),
    Action(&'a ActionPaletteProvider),
    ProfileField(&'a ProfileFieldPaletteProvider),
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::new(Arc::new(default_tooltip_table()))
    }
}

impl PaletteRegistry {
    pub fn new(tooltips: Arc<TooltipTable>) -> Self {
        Self {
            command: CommandPaletteProvider,
            action: ActionPaletteProvider::new(tooltips),
            profile_name: ProfileFieldPaletteProvider::display_name(),
            profile_bio: ProfileFieldPaletteProvider::bio(),
        }
    }

    pub fn get(&self, kind: PaletteKind) -> PaletteProviderRef<'_> {
        match kind {
            PaletteKind::Command => PaletteProviderRef::Command(&self.command),
            PaletteKind::Action => PaletteProviderRef::Action(&self.action),
            PaletteKind::ProfileName => PaletteProviderRef::ProfileField(&self.profile_name),
            PaletteKind::ProfileBio => PaletteProviderRef::ProfileField(&self.profile_bio),
        }
    }
}

impl<'a> PaletteProviderRef<'a> {
    fn provider(&self) -> &'a dyn PaletteProvider {
        match *self {
            Self::Command(provider) => provider,
            Self::Action(provider) => provider,
            Self::ProfileField(provider) => provider,
        }
    }

    pub fn kind(&self) -> PaletteKind {
        self.provider().kind()
    }

    pub fn title(&self, ctx: &PaletteContext<'_>) -> String {
        self.provider().title(ctx)
    }

    pub fn input_mode(&self) -> PaletteInputMode {
        self.provider().input_mode()
    }

    pub fn list(&self, ctx: &PaletteContext<'_>) -> AppResult<Vec<PaletteCandidate>> {
        self.provider().list(ctx)
    }

    pub fn on_tab(
        &self,
        ctx: &PaletteContext<'_>,
        selected: Option<&PaletteCandidate>,
    ) -> AppResult<PaletteTabEffect> {
        self.provider().on_tab(ctx, selected)
    }

    pub fn on_submit(
        &self,
        ctx: &PaletteContext<'_>,
        selected: Option<&PaletteCandidate>,
    ) -> AppResult<PaletteSubmitEffect> {
        self.provider().on_submit(ctx, selected)
    }

    pub fn assistive_text(
        &self,
        ctx: &PaletteContext<'_>,
        selected: Option<&PaletteCandidate>,
    ) -> Option<String> {
        self.provider().assistive_text(ctx, selected)
    }

    pub fn initial_input(&self, seed: Option<&str>) -> String {
        self.provider().initial_input(seed)
    }
}
