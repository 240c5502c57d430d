use std::io::{self, Stdout};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use crate::error::AppResult;

/// Where the shell paints frames.
pub(crate) trait TerminalSurface {
    fn clear(&mut self) -> io::Result<()>;

    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>);

    /// Draws one frame, wiping the screen first when asked. A closed palette can leave
    /// overlay cells behind that the frame diff does not repaint.
    fn present<F>(&mut self, wipe: bool, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        if wipe {
            self.clear()?;
        }
        self.draw(render)
    }
}

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode plus the alternate screen for the lifetime of the shell. The hardware cursor
/// stays hidden because the palette draws its own caret.
pub(crate) struct TerminalSession {
    terminal: CrosstermTerminal,
    restored: bool,
}

impl TerminalSession {
    pub(crate) fn enter() -> AppResult<Self> {
        enable_raw_mode()?;
        match open_screen() {
            Ok(terminal) => {
                debug!("terminal session entered");
                Ok(Self {
                    terminal,
                    restored: false,
                })
            }
            Err(err) => {
                leave_screen(&mut io::stdout());
                Err(err.into())
            }
        }
    }

    /// Idempotent; also runs on drop so a panic or early return leaves a usable terminal.
    pub(crate) fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        let screen = execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show);
        disable_raw_mode()?;
        screen?;
        debug!("terminal session restored");
        Ok(())
    }
}

fn open_screen() -> io::Result<CrosstermTerminal> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

fn leave_screen(stdout: &mut Stdout) {
    let _ = execute!(stdout, LeaveAlternateScreen, Show);
    let _ = disable_raw_mode();
}

impl TerminalSurface for TerminalSession {
    fn clear(&mut self) -> io::Result<()> {
        self.terminal.clear()
    }

    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal.draw(render).map(|_| ())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
