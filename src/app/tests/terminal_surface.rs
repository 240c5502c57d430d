use std::convert::Infallible;
use std::io;

use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use std::sync::Arc;
use std::time::Instant;

use crate::app::App;
use crate::backend::{Dataset, LocalStore};
use crate::config::Config;
use crate::notify::Notification;

use super::super::terminal_session::TerminalSurface;

struct TestTerminalSurface {
    terminal: Terminal<TestBackend>,
}

impl TestTerminalSurface {
    fn new(width: u16, height: u16) -> io::Result<Self> {
        let terminal = infallible_to_io(Terminal::new(TestBackend::new(width, height)))?;
        Ok(Self { terminal })
    }
}

impl TerminalSurface for TestTerminalSurface {
    fn clear(&mut self) -> io::Result<()> {
        infallible_to_io(self.terminal.clear())
    }

    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        infallible_to_io(self.terminal.draw(render)).map(|_| ())
    }
}

fn infallible_to_io<T>(result: Result<T, Infallible>) -> io::Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(err) => match err {},
    }
}

#[test]
fn present_with_wipe_replaces_the_previous_frame() {
    let mut session = TestTerminalSurface::new(40, 6).expect("test terminal should initialize");
    session
        .draw(|frame| {
            frame.render_widget(Paragraph::new("palette"), Rect::new(0, 2, 7, 1));
        })
        .expect("draw should succeed");
    assert!(buffer_text(&session).contains("palette"));

    session
        .present(true, |frame| {
            frame.render_widget(Paragraph::new("ok"), Rect::new(0, 0, 2, 1));
        })
        .expect("present should succeed");
    let text = buffer_text(&session);
    assert!(text.contains("ok"));
    assert!(!text.contains("palette"));
}

fn buffer_text(session: &TestTerminalSurface) -> String {
    let buffer = session.terminal.backend().buffer();
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn app_frame_shows_tabs_page_title_and_toasts() {
    let backend = Arc::new(LocalStore::in_memory(Dataset::demo()));
    let mut app = App::new_with_config(Config::default(), backend).expect("app init");
    app.notifications
        .toasts
        .push(Notification::new("Você entrou no: Painel Principal"), Instant::now());

    let mut session = TestTerminalSurface::new(100, 20).expect("test terminal should initialize");
    app.render_frame(&mut session, false).expect("frame should render");

    let text = buffer_text(&session);
    assert!(text.contains("Fóruns"));
    assert!(text.contains("Painel Principal"));
    assert!(text.contains("Você entrou no: Painel Principal"));
    assert!(text.contains("toasts 1"));
}
