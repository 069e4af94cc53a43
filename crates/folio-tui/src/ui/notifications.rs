// Toast queue for status feedback: one notification shown at a time,
// auto-dismissed after its duration.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

impl NotificationLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "ℹ",
            NotificationLevel::Success => "✓",
            NotificationLevel::Error => "✗",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration: Duration,
    shown_at: Option<Instant>,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
            duration: Duration::from_secs(3),
            shown_at: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
            duration: Duration::from_secs(3),
            shown_at: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
            duration: Duration::from_secs(5),
            shown_at: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct NotificationQueue {
    queue: VecDeque<Notification>,
    current: Option<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        // Errors preempt whatever is currently showing
        if notification.level == NotificationLevel::Error {
            self.current = None;
            self.queue.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Advance the queue: expire the current toast, promote the next one.
    pub fn tick(&mut self) {
        if let Some(current) = &self.current {
            let expired = current
                .shown_at
                .map(|shown| shown.elapsed() >= current.duration)
                .unwrap_or(true);
            if expired {
                self.current = None;
            }
        }
        if self.current.is_none() {
            if let Some(mut next) = self.queue.pop_front() {
                next.shown_at = Some(Instant::now());
                self.current = Some(next);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_jump_the_queue() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::info("loaded"));
        queue.push(Notification::error("boom"));
        queue.tick();
        assert_eq!(queue.current().unwrap().message, "boom");
    }

    #[test]
    fn test_tick_promotes_next() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::info("first"));
        queue.tick();
        assert_eq!(queue.current().unwrap().message, "first");

        queue.dismiss();
        queue.push(Notification::success("second"));
        queue.tick();
        assert_eq!(queue.current().unwrap().message, "second");
    }
}
