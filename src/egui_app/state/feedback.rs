use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// Visual tone shared by toasts and dialogs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackTone {
    Success,
    Info,
    Warning,
    Error,
}

/// A transient notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub tone: FeedbackTone,
    pub created_at: Instant,
}

impl Toast {
    pub fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= TOAST_TTL
    }

    /// Remaining display time as a 1.0 → 0.0 fraction.
    pub fn remaining_fraction(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.created_at);
        1.0 - (elapsed.as_secs_f32() / TOAST_TTL.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Stack of visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, text: impl Into<String>, tone: FeedbackTone, now: Instant) {
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push(Toast {
            id: self.next_id,
            text: text.into(),
            tone,
            created_at: now,
        });
    }

    /// Drop expired toasts.
    pub fn expire(&mut self, now: Instant) {
        self.entries.retain(|toast| !toast.expired(now));
    }

    /// Close a toast before it expires.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A blocking message the user must acknowledge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialog {
    pub id: u64,
    pub tone: FeedbackTone,
    pub title: String,
    pub text: String,
}

/// Dialogs shown one at a time in arrival order.
#[derive(Clone, Debug, Default)]
pub struct DialogState {
    queue: VecDeque<Dialog>,
    next_id: u64,
}

impl DialogState {
    pub fn show(&mut self, tone: FeedbackTone, title: impl Into<String>, text: impl Into<String>) {
        self.next_id = self.next_id.wrapping_add(1);
        self.queue.push_back(Dialog {
            id: self.next_id,
            tone,
            title: title.into(),
            text: text.into(),
        });
    }

    pub fn current(&self) -> Option<&Dialog> {
        self.queue.front()
    }

    /// Acknowledge the front dialog.
    pub fn dismiss(&mut self) {
        self.queue.pop_front();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
