use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{AppState, PROFILE_PATH, route_index, route_title};
use crate::profile::{ProfileState, ProfileView, StatKind};

pub fn draw_page(frame: &mut Frame<'_>, area: Rect, app: &AppState) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let block = Block::default()
        .title(format!(" {} ", route_title(&app.route)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = if app.route.as_str() == PROFILE_PATH {
        profile_lines(&app.profile)
    } else if route_index(&app.route).is_some() {
        vec![Line::from(Span::styled(
            format!("Conteúdo de {}", route_title(&app.route)),
            Style::default().fg(Color::Gray),
        ))]
    } else {
        vec![Line::from(format!("404: {} não existe", app.route))]
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

pub(crate) fn profile_lines(state: &ProfileState) -> Vec<Line<'static>> {
    let profile = match (state.view, state.profile.as_ref()) {
        (ProfileView::Loading, _) => return vec![Line::from("Carregando perfil...")],
        (ProfileView::SignedOut, _) => {
            return vec![Line::from("Faça login para ver seu perfil")];
        }
        (ProfileView::NotFound, _) | (ProfileView::Ready, None) => {
            return vec![Line::from("Perfil não encontrado")];
        }
        (ProfileView::Ready, Some(profile)) => profile,
    };

    let label = Style::default().fg(Color::DarkGray);
    let (name, bio) = if state.editing {
        (state.form.display_name.as_str(), state.form.bio.as_str())
    } else {
        (profile.display_name.as_str(), profile.bio_text())
    };
    let bio = if bio.is_empty() {
        "Adicione uma bio para se apresentar à comunidade".to_string()
    } else {
        bio.to_string()
    };

    let mut lines = vec![
        Line::from(Span::styled(
            name.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(bio),
        Line::from(Span::styled(profile.member_since(), label)),
        Line::default(),
        Line::from(format!(
            "Nível {} | {} / {} pts ({:.0}%)",
            profile.level,
            profile.total_points,
            profile.next_level_points(),
            profile.level_progress()
        )),
        Line::from(format!(
            "Este mês: {} pts | Ranking: {} | Sequência: {} dias",
            profile.monthly_points,
            profile
                .ranking_position
                .map(|position| format!("#{position}"))
                .unwrap_or_else(|| "-".to_string()),
            profile.study_streak
        )),
        Line::from(
            StatKind::ALL
                .iter()
                .map(|kind| format!("{} {}", state.stats.get(*kind), kind.label()))
                .collect::<Vec<_>>()
                .join(" | "),
        ),
        Line::default(),
    ];

    let hint = if state.saving {
        "Salvando..."
    } else if state.editing {
        "n: nome  d: bio  s: salvar  Esc: cancelar"
    } else {
        "e: editar perfil  v: alterar avatar  r: recarregar"
    };
    lines.push(Line::from(Span::styled(hint, label)));
    lines
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::profile_lines;
    use crate::backend::UserId;
    use crate::profile::{ProfileState, ProfileView, UserProfile};

    fn text(lines: &[ratatui::text::Line<'_>]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn missing_profile_reads_not_found() {
        let state = ProfileState {
            view: ProfileView::NotFound,
            ..ProfileState::default()
        };
        assert_eq!(text(&profile_lines(&state)), vec!["Perfil não encontrado"]);
    }

    #[test]
    fn editing_shows_form_values() {
        let mut state = ProfileState {
            view: ProfileView::Ready,
            profile: Some(UserProfile {
                id: "p1".to_string(),
                user_id: UserId::new("u1"),
                display_name: "Ana".to_string(),
                avatar_url: None,
                bio: None,
                total_points: 1500,
                monthly_points: 0,
                ranking_position: Some(3),
                monthly_ranking_position: None,
                study_streak: 2,
                level: 2,
                created_at: Utc
                    .with_ymd_and_hms(2024, 3, 1, 0, 0, 0)
                    .single()
                    .expect("fixed date should be valid"),
            }),
            ..ProfileState::default()
        };
        assert!(state.begin_edit());
        assert!(state.set_display_name("Ana Clara"));

        let lines = text(&profile_lines(&state));
        assert_eq!(lines[0], "Ana Clara");
        assert_eq!(lines[2], "Membro desde março de 2024");
        assert_eq!(lines[4], "Nível 2 | 1500 / 2000 pts (50%)");
        assert!(lines.last().is_some_and(|hint| hint.contains("s: salvar")));
    }
}
