use tracing::{debug, trace};

use super::notification::Notification;

/// Global transient-message sink. Fire-and-forget: nothing is returned and
/// a display request can never fail from the caller's point of view.
pub trait NotificationSurface: Send + Sync {
    fn display(&self, notification: Notification);
}

/// Surface that forwards notifications to whoever owns the receiving end,
/// usually the event loop feeding the toast queue.
#[derive(Debug, Clone)]
pub struct ChannelSurface {
    tx: flume::Sender<Notification>,
}

impl ChannelSurface {
    pub fn new() -> (Self, flume::Receiver<Notification>) {
        let (tx, rx) = flume::unbounded();
        (Self { tx }, rx)
    }
}

impl NotificationSurface for ChannelSurface {
    fn display(&self, notification: Notification) {
        trace!(message = %notification.message, "notification queued");
        if self.tx.send(notification).is_err() {
            debug!("notification dropped: surface receiver is gone");
        }
    }
}
