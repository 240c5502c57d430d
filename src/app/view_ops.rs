use crate::error::AppResult;
use crate::ui;

use super::core::App;
use super::terminal_session::TerminalSurface;

impl App {
    /// Paints one frame: chrome, then the routed page, then toasts, then the palette on top.
    /// `wipe` clears the screen first.
    pub(crate) fn render_frame(
        &self,
        session: &mut impl TerminalSurface,
        wipe: bool,
    ) -> AppResult<()> {
        let palette_view = self.interaction.palette_view();
        let state = &self.state;
        let toasts = &self.notifications.toasts;
        let toast_count = toasts.visible_count() + toasts.queued_count();

        session.present(wipe, |frame| {
            let layout = ui::split_layout(frame.area());
            ui::draw_chrome(frame, layout, state, toast_count);
            ui::draw_page(frame, layout.page, state);
            ui::draw_toast_stack(frame, layout.page, toasts.visible());
            if let Some(view) = palette_view.as_ref() {
                ui::draw_palette_overlay(frame, layout.page, view);
            }
        })?;
        Ok(())
    }
}
