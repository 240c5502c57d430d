use std::time::Duration;

use crossterm::event::EventStream;
use futures_util::StreamExt;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::trace;

use crate::event::DomainEvent;

/// Long-lived producers feeding the loop channel: terminal input and the toast expiry
/// clock. Profile tasks are spawned per request and hold their own sender.
pub(crate) struct EventBusRuntime {
    tasks: Vec<JoinHandle<()>>,
}

impl EventBusRuntime {
    pub(crate) fn spawn(
        toast_tick: Duration,
    ) -> (
        UnboundedSender<DomainEvent>,
        UnboundedReceiver<DomainEvent>,
        Self,
    ) {
        let (tx, rx) = unbounded_channel();
        let tasks = vec![
            spawn_input_task(tx.clone()),
            spawn_toast_clock(tx.clone(), toast_tick),
        ];
        (tx, rx, Self { tasks })
    }

    pub(crate) fn shutdown(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

fn spawn_input_task(tx: UnboundedSender<DomainEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut input = EventStream::new();
        while let Some(event) = input.next().await {
            let event = event
                .map(DomainEvent::Input)
                .unwrap_or_else(|err| DomainEvent::InputError(err.to_string()));
            if tx.send(event).is_err() {
                trace!("input task stopping: event loop is gone");
                return;
            }
        }
    })
}

/// Ticks drive toast expiry; a late tick is skipped rather than replayed in a burst.
fn spawn_toast_clock(tx: UnboundedSender<DomainEvent>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval(period.max(Duration::from_millis(1)));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(DomainEvent::ToastTick).is_err() {
                trace!("toast clock stopping: event loop is gone");
                return;
            }
        }
    })
}
