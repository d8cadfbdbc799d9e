use chrono::{DateTime, Duration, Utc};

use coach_core::Severity;
use coach_core::effects::NOTIFICATION_DISMISS_MS;

/// One transient toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub text: String,
    pub severity: Severity,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self.severity {
            Severity::Info => "\u{2139}\u{fe0f}",
            Severity::Success => "\u{2705}",
            Severity::Warning => "\u{26a0}\u{fe0f}",
        }
    }
}

/// The display-message interface: a stack of auto-dismissing notifications.
///
/// Pushes never fail and never limit stacking; expiry is driven entirely by
/// the caller's clock, so the whole lifecycle is testable without timers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifier {
    items: Vec<Notification>,
    next_id: u64,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a notification that stays visible for about four seconds.
    pub fn push(&mut self, text: impl Into<String>, severity: Severity, now: DateTime<Utc>) {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            text: text.into(),
            severity,
            expires_at: now + Duration::milliseconds(NOTIFICATION_DISMISS_MS),
        });
    }

    /// Drops expired notifications and returns the rest, oldest first.
    pub fn visible(&mut self, now: DateTime<Utc>) -> &[Notification] {
        self.items.retain(|item| item.expires_at > now);
        &self.items
    }

    /// Read-only view of the unexpired notifications, oldest first.
    ///
    /// Render paths use this so drawing the stack never mutates state.
    #[must_use]
    pub fn snapshot(&self, now: DateTime<Utc>) -> Vec<Notification> {
        self.items
            .iter()
            .filter(|item| item.expires_at > now)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_core::time::fixed_now;

    #[test]
    fn notifications_expire_after_four_seconds() {
        let now = fixed_now();
        let mut notifier = Notifier::new();
        notifier.push("hello", Severity::Info, now);

        assert_eq!(notifier.visible(now).len(), 1);
        let later = now + Duration::milliseconds(NOTIFICATION_DISMISS_MS);
        assert!(notifier.visible(later).is_empty());
    }

    #[test]
    fn notifications_stack_in_order() {
        let now = fixed_now();
        let mut notifier = Notifier::new();
        notifier.push("first", Severity::Info, now);
        notifier.push("second", Severity::Success, now);

        let visible = notifier.visible(now);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].text, "first");
        assert_eq!(visible[1].text, "second");
        assert_ne!(visible[0].id, visible[1].id);
    }

    #[test]
    fn icons_follow_severity() {
        let now = fixed_now();
        let mut notifier = Notifier::new();
        notifier.push("ok", Severity::Success, now);
        assert_eq!(notifier.visible(now)[0].icon(), "\u{2705}");
    }
}
