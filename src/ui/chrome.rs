use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::{AppState, Mode, ROUTES, route_index};

use super::layout::UiLayout;

pub fn draw_chrome(frame: &mut Frame<'_>, layout: UiLayout, app: &AppState, toast_count: usize) {
    frame.render_widget(Paragraph::new(nav_line(app)), layout.nav);

    let mode = match app.mode {
        Mode::Normal => "NORMAL",
        Mode::Palette => "PALETTE",
    };
    let edit = if app.profile.saving {
        " | SAVING"
    } else if app.profile.editing {
        " | EDIT"
    } else {
        ""
    };
    let message = if app.status.message.is_empty() {
        "-"
    } else {
        app.status.message.as_str()
    };
    let status_text = format!(
        "{} | {mode}{edit} | toasts {toast_count} | {message}",
        app.route
    );

    let status = Paragraph::new(status_text)
        .style(Style::default())
        .wrap(Wrap { trim: true });
    frame.render_widget(status, layout.status);
}

fn nav_line(app: &AppState) -> Line<'static> {
    let active = route_index(&app.route);
    let mut spans = vec![Span::styled(
        " EnglishOne ",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for (index, entry) in ROUTES.iter().enumerate() {
        let label = format!(" {} {} ", index + 1, entry.tab);
        let style = if active == Some(index) {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
    }
    spans.push(Span::styled(
        "  [b] Notificações  [m] Mensagens",
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}
