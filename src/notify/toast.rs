//! On-screen side of the notification surface: a capped stack of visible toasts
//! with a FIFO backlog.

use std::collections::VecDeque;
use std::time::Instant;

use super::notification::Notification;

pub const DEFAULT_MAX_VISIBLE: usize = 3;

pub type ToastId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub notification: Notification,
    /// Set when the toast becomes visible; its duration counts from here.
    pub shown_at: Instant,
}

impl Toast {
    fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.notification.duration
    }
}

#[derive(Debug)]
pub struct ToastQueue {
    max_visible: usize,
    next_id: ToastId,
    /// Oldest first.
    visible: VecDeque<Toast>,
    backlog: VecDeque<(ToastId, Notification)>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VISIBLE)
    }
}

impl ToastQueue {
    pub fn new(max_visible: usize) -> Self {
        Self {
            max_visible: max_visible.max(1),
            next_id: 0,
            visible: VecDeque::new(),
            backlog: VecDeque::new(),
        }
    }

    pub fn push(&mut self, notification: Notification, now: Instant) -> ToastId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        if self.visible.len() < self.max_visible {
            self.visible.push_back(Toast {
                id,
                notification,
                shown_at: now,
            });
        } else {
            self.backlog.push_back((id, notification));
        }
        id
    }

    /// Drops expired toasts and promotes queued ones. Returns true when anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.visible.len();
        self.visible.retain(|toast| !toast.expired(now));
        let expired = before != self.visible.len();
        let promoted = self.promote(now);
        expired || promoted
    }

    pub fn dismiss(&mut self, id: ToastId, now: Instant) -> bool {
        if let Some(pos) = self.visible.iter().position(|toast| toast.id == id) {
            self.visible.remove(pos);
            self.promote(now);
            return true;
        }
        if let Some(pos) = self.backlog.iter().position(|(queued, _)| *queued == id) {
            self.backlog.remove(pos);
            return true;
        }
        false
    }

    pub fn dismiss_all(&mut self) {
        self.visible.clear();
        self.backlog.clear();
    }

    pub fn visible(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.visible.iter()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn queued_count(&self) -> usize {
        self.backlog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.backlog.is_empty()
    }

    fn promote(&mut self, now: Instant) -> bool {
        let mut promoted = false;
        while self.visible.len() < self.max_visible {
            let Some((id, notification)) = self.backlog.pop_front() else {
                break;
            };
            self.visible.push_back(Toast {
                id,
                notification,
                shown_at: now,
            });
            promoted = true;
        }
        promoted
    }
}
