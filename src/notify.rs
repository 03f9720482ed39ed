use serde::Serialize;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use std::time::Duration;
use tokio::sync::Mutex;

pub const DISPLAY_FOR: Duration = Duration::from_secs(5);
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
    /// Set once the display time is over; the entry is dropped after the exit animation.
    pub leaving: bool,
}

/// Floating, self-dismissing messages. Each one owns its own timer task.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    next_id: Arc<AtomicU64>,
    active: Arc<Mutex<Vec<Notification>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn success(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, message.into()).await
    }

    pub async fn error(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, message.into()).await
    }

    pub async fn info(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Info, message.into()).await
    }

    pub async fn push(&self, kind: NoticeKind, message: String) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.active.lock().await.push(Notification {
            id,
            kind,
            message,
            leaving: false,
        });

        let active = Arc::clone(&self.active);
        tokio::spawn(async move {
            tokio::time::sleep(DISPLAY_FOR).await;
            if let Some(entry) = active.lock().await.iter_mut().find(|entry| entry.id == id) {
                entry.leaving = true;
            }
            tokio::time::sleep(EXIT_ANIMATION).await;
            active.lock().await.retain(|entry| entry.id != id);
        });

        id
    }

    pub async fn dismiss(&self, id: u64) -> bool {
        let mut active = self.active.lock().await;
        let before = active.len();
        active.retain(|entry| entry.id != id);
        active.len() != before
    }

    pub async fn snapshot(&self) -> Vec<Notification> {
        self.active.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn notification_leaves_after_five_seconds() {
        let notifier = Notifier::new();
        notifier.success("saved").await;

        tokio::time::sleep(Duration::from_millis(4_900)).await;
        let shown = notifier.snapshot().await;
        assert_eq!(shown.len(), 1);
        assert!(!shown[0].leaving);

        tokio::time::sleep(Duration::from_millis(200)).await;
        let leaving = notifier.snapshot().await;
        assert_eq!(leaving.len(), 1);
        assert!(leaving[0].leaving);

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(notifier.snapshot().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn notifications_stack_with_independent_timers() {
        let notifier = Notifier::new();
        notifier.error("first").await;
        tokio::time::sleep(Duration::from_secs(3)).await;
        notifier.success("second").await;

        let both = notifier.snapshot().await;
        assert_eq!(both.len(), 2);
        assert_eq!(both[0].kind, NoticeKind::Error);
        assert_eq!(both[1].kind, NoticeKind::Success);

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        let remaining = notifier.snapshot().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].message, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_removes_early() {
        let notifier = Notifier::new();
        let id = notifier.info("hello").await;
        assert!(notifier.dismiss(id).await);
        assert!(!notifier.dismiss(id).await);
        assert!(notifier.snapshot().await.is_empty());
    }
}
