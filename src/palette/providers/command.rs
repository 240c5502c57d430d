use std::cmp::Reverse;

use crate::command::{ArgSpec, CommandSpec, all_command_specs, parse_command_text};
use crate::error::AppResult;
use crate::palette::{
    PaletteCandidate, PaletteContext, PaletteInputMode, PaletteKind, PaletteProvider,
    PaletteSubmitEffect, PaletteTabEffect,
};

const HINT: &str = "Enter: run  Tab: complete";

pub struct CommandPaletteProvider;

impl PaletteProvider for CommandPaletteProvider {
    fn kind(&self) -> PaletteKind {
        PaletteKind::Command
    }

    fn title(&self, _ctx: &PaletteContext<'_>) -> String {
        "Command".to_string()
    }

    fn input_mode(&self) -> PaletteInputMode {
        PaletteInputMode::Suggest
    }

    fn list(&self, ctx: &PaletteContext<'_>) -> AppResult<Vec<PaletteCandidate>> {
        if has_argument_phase(ctx.input) {
            return Ok(Vec::new());
        }

        let query = ctx.input.trim().to_ascii_lowercase();
        let mut ranked = all_command_specs()
            .into_iter()
            .filter(|spec| is_visible(spec.id, ctx))
            .filter_map(|spec| {
                let rank = if query.is_empty() {
                    MatchRank::Listed
                } else {
                    rank_spec(&query, &spec)?
                };
                Some((rank, spec))
            })
            .collect::<Vec<_>>();
        if !query.is_empty() {
            ranked.sort_by_key(|(rank, spec)| (Reverse(*rank), spec.id.len(), spec.id));
        }

        Ok(ranked
            .into_iter()
            .map(|(_, spec)| PaletteCandidate {
                id: spec.id.to_string(),
                label: spec.id.to_string(),
                detail: Some(detail_text(&spec)),
            })
            .collect())
    }

    fn on_submit(
        &self,
        ctx: &PaletteContext<'_>,
        selected: Option<&PaletteCandidate>,
    ) -> AppResult<PaletteSubmitEffect> {
        let input = ctx.input.trim();

        // Typed text wins when it is already a complete command.
        if !input.is_empty()
            && let Ok(command) = parse_command_text(input)
        {
            return Ok(PaletteSubmitEffect::Dispatch(command));
        }

        if let Some(spec) = selected.and_then(|candidate| find_spec(&candidate.id)) {
            if !spec.args.is_empty() {
                return Ok(PaletteSubmitEffect::Reopen {
                    kind: self.kind(),
                    seed: Some(format!("{} ", spec.id)),
                });
            }
            if let Ok(command) = parse_command_text(spec.id) {
                return Ok(PaletteSubmitEffect::Dispatch(command));
            }
        }

        Ok(PaletteSubmitEffect::Reopen {
            kind: self.kind(),
            seed: Some(ctx.input.to_string()),
        })
    }

    fn on_tab(
        &self,
        _ctx: &PaletteContext<'_>,
        selected: Option<&PaletteCandidate>,
    ) -> AppResult<PaletteTabEffect> {
        Ok(selected.map_or(PaletteTabEffect::Noop, |candidate| {
            PaletteTabEffect::Complete(candidate.id.clone())
        }))
    }

    fn assistive_text(
        &self,
        ctx: &PaletteContext<'_>,
        _selected: Option<&PaletteCandidate>,
    ) -> Option<String> {
        let trimmed = ctx.input.trim();
        let id = if has_argument_phase(ctx.input) {
            first_token(trimmed)
        } else {
            trimmed
        };

        let line = find_spec(id).map_or_else(|| HINT.to_string(), |spec| usage_line(&spec));
        Some(line)
    }
}

/// `goto-route <path> | Go to Route`
fn usage_line(spec: &CommandSpec) -> String {
    let usage = usage_text(spec.args);
    if usage.is_empty() {
        format!("{} | {}", spec.id, spec.title)
    } else {
        format!("{} {usage} | {}", spec.id, spec.title)
    }
}

fn detail_text(spec: &CommandSpec) -> String {
    let usage = usage_text(spec.args);
    if usage.is_empty() {
        format!("| {}", spec.title)
    } else {
        format!("{usage} | {}", spec.title)
    }
}

fn usage_text(args: &[ArgSpec]) -> String {
    args.iter()
        .map(|arg| {
            if arg.required {
                format!("<{}>", arg.name)
            } else {
                format!("[{}]", arg.name)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn has_argument_phase(input: &str) -> bool {
    input.trim_start().contains(char::is_whitespace)
}

fn first_token(input: &str) -> &str {
    input.split_whitespace().next().unwrap_or_default()
}

fn find_spec(id: &str) -> Option<CommandSpec> {
    all_command_specs().into_iter().find(|spec| spec.id == id)
}

/// Commands that only make sense with an open profile form.
fn is_visible(id: &str, ctx: &PaletteContext<'_>) -> bool {
    match id {
        "cancel-edit" | "set-name" | "set-bio" | "save-profile" => ctx.app.profile.editing,
        _ => true,
    }
}

/// How a query matched a command. Later variants rank higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchRank {
    Listed,
    TitleContains,
    TitlePrefix,
    IdSubsequence,
    IdContains,
    IdAcronym,
    IdTokenPrefix,
    IdPrefix,
    IdExact,
}

fn rank_spec(query: &str, spec: &CommandSpec) -> Option<MatchRank> {
    let id_rank = rank_id(query, spec.id);
    let title_rank = rank_title(query, &spec.title.to_ascii_lowercase());
    id_rank.max(title_rank)
}

fn rank_id(query: &str, id: &str) -> Option<MatchRank> {
    let mut tokens = id.split('-').filter(|token| !token.is_empty());
    let acronym = tokens
        .clone()
        .filter_map(|token| token.chars().next())
        .collect::<String>();

    if id == query {
        Some(MatchRank::IdExact)
    } else if id.starts_with(query) {
        Some(MatchRank::IdPrefix)
    } else if tokens.any(|token| token.starts_with(query)) {
        Some(MatchRank::IdTokenPrefix)
    } else if acronym.starts_with(query) {
        Some(MatchRank::IdAcronym)
    } else if id.contains(query) {
        Some(MatchRank::IdContains)
    } else if is_subsequence(query, id) {
        Some(MatchRank::IdSubsequence)
    } else {
        None
    }
}

fn rank_title(query: &str, title: &str) -> Option<MatchRank> {
    if title.starts_with(query) {
        Some(MatchRank::TitlePrefix)
    } else if title.contains(query) {
        Some(MatchRank::TitleContains)
    } else {
        None
    }
}

fn is_subsequence(query: &str, text: &str) -> bool {
    let mut remaining = text.chars();
    query
        .chars()
        .all(|wanted| remaining.by_ref().any(|ch| ch == wanted))
}
