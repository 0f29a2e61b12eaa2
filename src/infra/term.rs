use crate::services::{NotificationSink, Severity};

/// Surfaces notifications on the terminal: errors and warnings on stderr,
/// confirmations on stdout.
pub struct TerminalNotifier;

impl NotificationSink for TerminalNotifier {
    fn show(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Error => eprintln!("Error: {message}"),
            Severity::Warning => eprintln!("Warning: {message}"),
            Severity::Info => println!("{message}"),
        }
    }
}
