//! Trailing-edge debounce bookkeeping.
//!
//! DESIGN
//! ======
//! Timers live in the component (`gloo-timers`); this type only decides which
//! timer is still current. Every `push` bumps a generation and returns its
//! ticket. When a timer fires it calls `settle` with its ticket, and only the
//! latest ticket gets the pending value. N pushes inside one window therefore
//! settle exactly once, with the last value.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Identifies one scheduled settle attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debounce<T> {
    pending: Option<T>,
    generation: u64,
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self { pending: None, generation: 0 }
    }
}

impl<T> Debounce<T> {
    /// Record a new value and invalidate every earlier ticket.
    pub fn push(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value);
        DebounceTicket(self.generation)
    }

    /// Take the pending value if `ticket` is the latest one.
    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drop any pending value; outstanding tickets will settle to nothing.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
