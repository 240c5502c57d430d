use crossterm::event::Event;

use crate::app::Mode;
use crate::command::{ActionId, Command, CommandOutcome};
use crate::notify::{Notification, RouteKey};
use crate::profile::{ProfileLoad, SaveOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    CommandExecuted {
        id: ActionId,
        outcome: CommandOutcome,
    },
    /// `from` is `None` only for the route the shell starts on.
    RouteChanged {
        from: Option<RouteKey>,
        to: RouteKey,
    },
    ModeChanged {
        from: Mode,
        to: Mode,
    },
}

#[derive(Debug)]
pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
    Command(Command),
    App(AppEvent),
    ProfileLoaded(ProfileLoad),
    ProfileSaved(SaveOutcome),
    Notification(Notification),
    ToastTick,
    Wake,
}
