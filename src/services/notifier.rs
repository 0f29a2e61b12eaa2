use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Minimum gap between two displayed notifications, of any severity.
const SUPPRESS_WINDOW: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

pub trait NotificationSink: Send + Sync {
    fn show(&self, severity: Severity, message: &str);
}

/// Rate-limiting front for a [`NotificationSink`].
///
/// Owns the single "last shown" instant. The timestamp moves only when a
/// message is actually displayed; a suppressed message leaves the window
/// anchored to the previous display.
pub struct Notifier {
    sink: Arc<dyn NotificationSink>,
    min_interval: Duration,
    last_shown: Mutex<Option<Instant>>,
}

impl Notifier {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self::with_min_interval(sink, SUPPRESS_WINDOW)
    }

    pub fn with_min_interval(sink: Arc<dyn NotificationSink>, min_interval: Duration) -> Self {
        Self {
            sink,
            min_interval,
            last_shown: Mutex::new(None),
        }
    }

    /// Shows the message unless another notification of any kind was
    /// displayed within the suppression window. Returns whether the message
    /// was displayed.
    pub fn notify(&self, severity: Severity, message: &str) -> bool {
        let mut last_shown = self
            .last_shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        if let Some(last) = *last_shown {
            if now.duration_since(last) < self.min_interval {
                tracing::debug!(?severity, msg = message, "notification suppressed");
                return false;
            }
        }
        *last_shown = Some(now);
        self.sink.show(severity, message);
        true
    }
}
