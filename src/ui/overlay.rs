use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::notify::{ColorToken, Notification, Toast};
use crate::palette::{PaletteItemView, PaletteView};

use super::layout::centered_rect;
use super::theme::{body_style, border_style, token_color};

const TOAST_WIDTH: u16 = 44;

/// Visible toasts stacked upwards from the bottom-right corner, oldest on top.
pub fn draw_toast_stack<'a>(
    frame: &mut Frame<'_>,
    area: Rect,
    toasts: impl DoubleEndedIterator<Item = &'a Toast>,
) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let width = area.width.min(TOAST_WIDTH);
    let x = area.x + area.width - width;
    let mut bottom = area.y + area.height;

    for toast in toasts.rev() {
        let lines = toast_lines(&toast.notification, width.saturating_sub(2) as usize);
        let height = lines.len() as u16 + 2;
        if bottom < area.y + height {
            break;
        }
        bottom -= height;

        let rect = Rect::new(x, bottom, width, height);
        let style = toast.notification.style;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(style))
            .style(body_style(style));
        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(lines).block(block), rect);
    }
}

fn toast_lines(notification: &Notification, width: usize) -> Vec<Line<'static>> {
    let glyph = notification
        .icon
        .map(|icon| format!("{} ", icon.glyph()))
        .unwrap_or_default();
    let body = body_style(notification.style);

    let mut lines = Vec::new();
    match &notification.title {
        Some(title) => {
            lines.push(Line::from(Span::styled(
                truncate_to_width(&format!("{glyph}{title}"), width),
                body.add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                truncate_to_width(&notification.message, width),
                body,
            )));
        }
        None => lines.push(Line::from(Span::styled(
            truncate_to_width(&format!("{glyph}{}", notification.message), width),
            body,
        ))),
    }
    lines
}

fn truncate_to_width(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }

    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for grapheme in text.graphemes(true) {
        let grapheme_width = UnicodeWidthStr::width(grapheme);
        if used + grapheme_width > budget {
            break;
        }
        used += grapheme_width;
        out.push_str(grapheme);
    }
    out.push('…');
    out
}

const PALETTE_WIDTH: u16 = 72;
const INPUT_PREFIX_WIDTH: usize = 3;

/// Centered palette: input row, a rule, then the assistive line and the candidate rows.
pub fn draw_palette_overlay(frame: &mut Frame<'_>, area: Rect, view: &PaletteView) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let popup = centered_rect(
        area,
        area.width.min(PALETTE_WIDTH),
        area.height.clamp(7, 24),
    );
    let block = Block::default()
        .title(format!(" {} ", view.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(token_color(ColorToken::Border)));
    let inner = block.inner(popup);
    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);
    if inner.width == 0 || inner.height < 3 {
        return;
    }

    let [input_row, rule_row, body] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
        .areas(inner);

    let width = inner.width as usize;
    frame.render_widget(
        Paragraph::new(build_palette_input_line(&view.input, view.cursor, width)),
        input_row,
    );
    frame.render_widget(
        Paragraph::new("─".repeat(width)).style(muted()),
        rule_row,
    );
    frame.render_widget(Paragraph::new(palette_body(view, body.height as usize, width)), body);
}

fn muted() -> Style {
    Style::default().fg(token_color(ColorToken::Border))
}

fn palette_body(view: &PaletteView, rows: usize, width: usize) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    if let Some(text) = view.assistive_text.as_deref().filter(|text| !text.is_empty()) {
        lines.push(Line::from(vec![Span::raw("   "), Span::styled(text, muted())]));
    }

    let capacity = rows.saturating_sub(lines.len());
    let start = window_start(view.items.len(), view.selected_idx, capacity);
    lines.extend(
        view.items
            .iter()
            .skip(start)
            .take(capacity)
            .map(|item| candidate_line(item, width)),
    );
    lines
}

/// First row to show so `selected` sits near the middle of a `capacity`-row window.
fn window_start(total: usize, selected: usize, capacity: usize) -> usize {
    if capacity == 0 || total <= capacity {
        return 0;
    }
    let selected = selected.min(total - 1);
    selected
        .saturating_sub(capacity / 2)
        .min(total - capacity)
}

fn candidate_line(item: &PaletteItemView, width: usize) -> Line<'_> {
    let marker = if item.selected {
        Span::styled(" ┃ ", Style::default().fg(token_color(ColorToken::Primary)))
    } else {
        Span::raw("   ")
    };
    let mut spans = vec![marker, Span::raw(item.label.as_str())];
    if let Some(detail) = &item.detail {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(detail.as_str(), muted()));
    }

    let used: usize = spans.iter().map(|span| span.width()).sum();
    spans.push(Span::raw(" ".repeat(width.saturating_sub(used))));

    let line = Line::from(spans);
    if item.selected {
        line.style(Style::default().bg(token_color(ColorToken::Muted)))
    } else {
        line
    }
}

/// Input row with a software caret: one span per cell so the caret cell can be reversed.
/// The text scrolls horizontally to keep the caret in view.
fn build_palette_input_line(input: &str, cursor: usize, width: usize) -> Line<'static> {
    let cells = width.saturating_sub(INPUT_PREFIX_WIDTH).max(1);
    let chars: Vec<char> = input.chars().collect();
    let cursor = cursor.min(chars.len());
    let start = (cursor + 1).saturating_sub(cells);
    let caret = cursor - start;

    let mut spans = vec![
        Span::raw(" "),
        Span::styled("> ", Style::default().fg(token_color(ColorToken::Foreground))),
    ];
    let shown = chars.iter().copied().skip(start).chain(std::iter::repeat(' '));
    for (idx, ch) in shown.take(cells).enumerate() {
        let span = Span::raw(ch.to_string());
        spans.push(if idx == caret {
            span.style(Style::default().reversed())
        } else {
            span
        });
    }
    Line::from(spans)
}
