pub mod clipboard;
pub mod notifier;
pub mod version_control;

pub use clipboard::ClipboardSink;
pub use notifier::{NotificationSink, Notifier, Severity};
pub use version_control::VersionControlService;
