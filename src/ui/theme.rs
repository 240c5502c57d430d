use ratatui::style::{Color, Style};

use crate::notify::{ColorToken, StyleSpec};

pub fn token_color(token: ColorToken) -> Color {
    match token {
        ColorToken::Background => Color::Reset,
        ColorToken::Foreground => Color::White,
        ColorToken::Border => Color::DarkGray,
        ColorToken::Muted => Color::Rgb(38, 38, 44),
        ColorToken::MutedForeground => Color::Gray,
        ColorToken::Primary => Color::Rgb(99, 102, 241),
        ColorToken::Success => Color::Green,
        ColorToken::Warning => Color::Yellow,
        ColorToken::Destructive => Color::Red,
    }
}

pub(crate) fn body_style(spec: StyleSpec) -> Style {
    Style::default()
        .fg(token_color(spec.foreground))
        .bg(token_color(spec.background))
}

pub(crate) fn border_style(spec: StyleSpec) -> Style {
    Style::default()
        .fg(token_color(spec.border))
        .bg(token_color(spec.background))
}
