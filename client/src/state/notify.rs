//! Toast notification queue.
//!
//! DESIGN
//! ======
//! The queue is plain data inside an `RwSignal` context. The toast component
//! schedules expiry with `gloo-timers`; expiry and manual close both call
//! `dismiss`, which is a no-op for ids that are already gone.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// How long a toast stays up before auto-dismissing.
pub const NOTICE_TTL_MS: u32 = 4_500;

/// Oldest toasts are dropped past this many.
pub const MAX_NOTICES: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NotificationQueue {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: NoticeKind, message: &str, description: Option<&str>) -> u64 {
        self.next_id += 1;
        self.notices.push(Notice {
            id: self.next_id,
            kind,
            message: message.to_owned(),
            description: description.map(str::to_owned),
        });
        if self.notices.len() > MAX_NOTICES {
            let overflow = self.notices.len() - MAX_NOTICES;
            self.notices.drain(..overflow);
        }
        self.next_id
    }

    pub fn success(&mut self, message: &str) -> u64 {
        self.push(NoticeKind::Success, message, None)
    }

    pub fn error(&mut self, message: &str, description: Option<&str>) -> u64 {
        self.push(NoticeKind::Error, message, description)
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
