//! One-shot toast notifications with auto-dismiss

use std::time::{Duration, Instant};

/// How long a result toast stays on screen
pub const TOAST_TTL: Duration = Duration::from_millis(3000);

/// Toast severity, mapped to styling by the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
}

/// A fire-and-forget notification. Lives in `AppState` until its deadline
/// passes; the render pass shows whatever is unexpired.
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        kind: ToastKind,
        now: Instant,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
            expires_at: now + TOAST_TTL,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_ttl() {
        let now = Instant::now();
        let toast = Toast::new("Coin Flip", "Result: Heads", ToastKind::Success, now);
        assert!(!toast.is_expired(now));
        assert!(!toast.is_expired(now + TOAST_TTL - Duration::from_millis(1)));
        assert!(toast.is_expired(now + TOAST_TTL));
    }
}
