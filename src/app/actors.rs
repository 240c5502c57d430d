pub(crate) struct UiActor {
    needs_redraw: bool,
    clear_before_draw: bool,
}

impl UiActor {
    pub(crate) fn new() -> Self {
        Self {
            needs_redraw: true,
            clear_before_draw: false,
        }
    }

    pub(crate) fn mark_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Full repaint on the next frame, used after an overlay closes.
    pub(crate) fn mark_clear(&mut self) {
        self.needs_redraw = true;
        self.clear_before_draw = true;
    }

    pub(crate) fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub(crate) fn take_clear(&mut self) -> bool {
        std::mem::take(&mut self.clear_before_draw)
    }

    pub(crate) fn clear_redraw(&mut self) {
        self.needs_redraw = false;
    }
}

#[cfg(test)]
mod tests {
    use super::UiActor;

    #[test]
    fn ui_actor_redraw_flag_roundtrip() {
        let mut actor = UiActor::new();
        assert!(actor.needs_redraw());
        actor.clear_redraw();
        assert!(!actor.needs_redraw());
        actor.mark_redraw();
        assert!(actor.needs_redraw());
    }

    #[test]
    fn clear_request_is_consumed_once() {
        let mut actor = UiActor::new();
        assert!(!actor.take_clear());
        actor.mark_clear();
        assert!(actor.needs_redraw());
        assert!(actor.take_clear());
        assert!(!actor.take_clear());
    }
}
