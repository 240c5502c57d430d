use std::time::{Duration, Instant};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::{debug, info, warn};

use crate::command::{ActionId, CommandOutcome, SideEffect};
use crate::error::AppResult;
use crate::event::{AppEvent, DomainEvent};
use crate::notify::Notification;
use crate::profile::{load_profile, save_profile};

use super::actors::UiActor;
use super::core::App;
use super::event_bus::EventBusRuntime;
use super::nav::PROFILE_PATH;
use super::terminal_session::{TerminalSession, TerminalSurface};

struct LoopRuntime {
    ui_actor: UiActor,
    session: TerminalSession,
    wake_timeout: Duration,
    loop_event_tx: UnboundedSender<DomainEvent>,
    loop_event_rx: UnboundedReceiver<DomainEvent>,
    loop_event_runtime: EventBusRuntime,
}

enum WaitEvent {
    Event(DomainEvent),
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Break,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut runtime = self.initialize_loop_runtime()?;
        self.start(&runtime.loop_event_tx);

        loop {
            if self.drain_background() {
                runtime.ui_actor.mark_redraw();
            }
            self.draw_if_needed(&mut runtime.session, &mut runtime.ui_actor)?;

            let waited = wait_next_event(
                &mut runtime.loop_event_rx,
                &self.notifications.inbox,
                runtime.wake_timeout,
            )
            .await;
            let control = match waited {
                WaitEvent::Event(event) => self.handle_domain_event(
                    event,
                    &runtime.loop_event_tx,
                    &mut runtime.ui_actor,
                )?,
                WaitEvent::Closed => LoopControl::Break,
            };
            if control == LoopControl::Break {
                break;
            }
        }

        info!("shutting down");
        runtime.loop_event_runtime.shutdown();
        runtime.session.restore()?;
        Ok(())
    }

    fn initialize_loop_runtime(&mut self) -> AppResult<LoopRuntime> {
        let session = TerminalSession::enter()?;
        let (loop_event_tx, loop_event_rx, loop_event_runtime) =
            EventBusRuntime::spawn(Duration::from_millis(self.config.toast.tick_ms));

        Ok(LoopRuntime {
            ui_actor: UiActor::new(),
            session,
            wake_timeout: Duration::from_millis(self.config.toast.input_poll_timeout_ms),
            loop_event_tx,
            loop_event_rx,
            loop_event_runtime,
        })
    }

    /// Announces the starting route to the extensions and loads the profile when starting on it.
    pub(crate) fn start(&mut self, tx: &UnboundedSender<DomainEvent>) {
        info!(route = %self.state.route, "shell started");
        let _ = tx.send(DomainEvent::App(AppEvent::RouteChanged {
            from: None,
            to: self.state.route.clone(),
        }));
        if self.state.route.as_str() == PROFILE_PATH {
            self.apply_side_effects(vec![SideEffect::LoadProfile], tx);
        }
    }

    pub(crate) fn drain_background(&mut self) -> bool {
        let mut changed = false;
        if self.interaction.drain_background_events(&mut self.state) {
            changed = true;
        }
        if self.interaction.apply_palette_requests(&mut self.state) {
            changed = true;
        }
        if self.notifications.pump(Instant::now()) {
            changed = true;
        }
        changed
    }

    fn draw_if_needed(
        &mut self,
        session: &mut impl TerminalSurface,
        ui_actor: &mut UiActor,
    ) -> AppResult<()> {
        if !ui_actor.needs_redraw() {
            return Ok(());
        }
        self.render_frame(session, ui_actor.take_clear())?;
        ui_actor.clear_redraw();
        Ok(())
    }

    pub(crate) fn handle_domain_event(
        &mut self,
        event: DomainEvent,
        tx: &UnboundedSender<DomainEvent>,
        ui_actor: &mut UiActor,
    ) -> AppResult<LoopControl> {
        match event {
            DomainEvent::Input(event) => {
                let outcome = self.handle_input_event(event)?;
                if outcome.clear_terminal {
                    ui_actor.mark_clear();
                } else if outcome.redraw {
                    ui_actor.mark_redraw();
                }
                if outcome.quit_requested {
                    return Ok(LoopControl::Break);
                }
                if let Some(command) = outcome.command {
                    let _ = tx.send(DomainEvent::Command(command));
                }
            }
            DomainEvent::InputError(message) => {
                warn!(error = %message, "terminal input failed");
                self.state.status.last_action_id = Some(ActionId::Input);
                self.state.status.message = format!("input error: {message}");
                ui_actor.mark_redraw();
            }
            DomainEvent::Command(command) => {
                let action_id = command.action_id();
                match self.interaction.dispatch_command(&mut self.state, command) {
                    Ok(dispatch) => {
                        for event in dispatch.emitted_events {
                            let _ = tx.send(DomainEvent::App(event));
                        }
                        self.apply_side_effects(dispatch.side_effects, tx);
                        if self.interaction.apply_palette_requests(&mut self.state) {
                            ui_actor.mark_clear();
                        }
                        ui_actor.mark_redraw();
                        if dispatch.outcome == CommandOutcome::QuitRequested {
                            return Ok(LoopControl::Break);
                        }
                    }
                    Err(err) => {
                        debug!(command = action_id.as_str(), error = %err, "command rejected");
                        self.state.status.last_action_id = Some(action_id);
                        self.state.status.message = err.to_string();
                        ui_actor.mark_redraw();
                    }
                }
            }
            DomainEvent::App(event) => {
                self.interaction.handle_app_event(&mut self.state, &event);
                ui_actor.mark_redraw();
            }
            DomainEvent::ProfileLoaded(load) => {
                self.state
                    .profile
                    .apply_load(load, self.interaction.extensions.host.surface());
                self.state.status.last_action_id = Some(ActionId::ProfileLoad);
                self.state.status.message = "profile loaded".to_string();
                ui_actor.mark_redraw();
            }
            DomainEvent::ProfileSaved(outcome) => {
                self.state
                    .profile
                    .apply_save(outcome, self.interaction.extensions.host.surface());
                self.state.status.last_action_id = Some(ActionId::ProfileSave);
                self.state.status.message = if self.state.profile.editing {
                    "save failed".to_string()
                } else {
                    "profile saved".to_string()
                };
                ui_actor.mark_redraw();
            }
            DomainEvent::Notification(notification) => {
                self.show_toast(notification);
                ui_actor.mark_redraw();
            }
            DomainEvent::ToastTick => {
                if self.notifications.toasts.tick(Instant::now()) {
                    ui_actor.mark_redraw();
                }
            }
            DomainEvent::Wake => {}
        }
        Ok(LoopControl::Continue)
    }

    fn show_toast(&mut self, notification: Notification) {
        debug!(message = %notification.message, "toast shown");
        self.notifications.toasts.push(notification, Instant::now());
    }

    fn apply_side_effects(&mut self, effects: Vec<SideEffect>, tx: &UnboundedSender<DomainEvent>) {
        for effect in effects {
            match effect {
                SideEffect::LoadProfile => {
                    let backend = self.backend.clone();
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let load = load_profile(backend.as_ref()).await;
                        let _ = tx.send(DomainEvent::ProfileLoaded(load));
                    });
                }
                SideEffect::SaveProfile(request) => {
                    let backend = self.backend.clone();
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let outcome = save_profile(backend.as_ref(), request).await;
                        let _ = tx.send(DomainEvent::ProfileSaved(outcome));
                    });
                }
                SideEffect::DismissToasts => {
                    self.notifications.pump(Instant::now());
                    self.notifications.toasts.dismiss_all();
                }
            }
        }
    }
}

async fn wait_next_event(
    loop_event_rx: &mut UnboundedReceiver<DomainEvent>,
    inbox: &flume::Receiver<Notification>,
    wake_timeout: Duration,
) -> WaitEvent {
    tokio::select! {
        biased;
        maybe_loop = loop_event_rx.recv() => {
            match maybe_loop {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        notification = inbox.recv_async() => {
            match notification {
                Ok(notification) => WaitEvent::Event(DomainEvent::Notification(notification)),
                Err(_) => WaitEvent::Closed,
            }
        },
        _ = time::sleep(wake_timeout) => {
            WaitEvent::Event(DomainEvent::Wake)
        }
    }
}
