/// User-facing notifications
///
/// The catalog state reports load results and watch-later changes through
/// the `Notifier` trait. The app renders them as short-lived toasts.
use chrono::{DateTime, Duration, Utc};

/// Fire-and-forget notification sink
pub trait Notifier {
    fn notify(&mut self, title: &str, description: &str);
}

/// A single notification as emitted by the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

/// Collects notifications in order (handy for tests and headless use)
impl Notifier for Vec<Notification> {
    fn notify(&mut self, title: &str, description: &str) {
        self.push(Notification {
            title: title.to_string(),
            description: description.to_string(),
        });
    }
}

/// A toast currently on screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Queue of on-screen toasts with automatic expiry
#[derive(Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    lifetime: Duration,
}

impl ToastQueue {
    pub fn new(lifetime: std::time::Duration) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            lifetime: Duration::from_std(lifetime).unwrap_or_else(|_| Duration::seconds(4)),
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop toasts older than the configured lifetime
    pub fn prune(&mut self, now: DateTime<Utc>) {
        let lifetime = self.lifetime;
        self.toasts.retain(|t| now - t.created_at < lifetime);
    }

    fn push_at(&mut self, title: &str, description: &str, now: DateTime<Utc>) {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            title: title.to_string(),
            description: description.to_string(),
            created_at: now,
        });
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, title: &str, description: &str) {
        tracing::debug!(title, description, "toast");
        self.push_at(title, description, Utc::now());
    }
}
