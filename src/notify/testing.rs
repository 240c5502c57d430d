use std::sync::{Arc, Mutex};

use tokio::time::Instant;

use super::notification::Notification;
use super::surface::NotificationSurface;

/// Surface that keeps every notification together with the (tokio) instant it arrived.
#[derive(Default)]
pub(crate) struct RecordingSurface {
    seen: Mutex<Vec<(Instant, Notification)>>,
}

impl RecordingSurface {
    pub(crate) fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .map(|notification| notification.message)
            .collect()
    }

    pub(crate) fn notifications(&self) -> Vec<Notification> {
        self.timed().into_iter().map(|(_, n)| n).collect()
    }

    pub(crate) fn timed(&self) -> Vec<(Instant, Notification)> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

impl NotificationSurface for RecordingSurface {
    fn display(&self, notification: Notification) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push((Instant::now(), notification));
        }
    }
}
