use tracing::debug;

use crate::interfaces::Notifier;

/// Prints notifications to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn show_error(&self, message: &str) {
        debug!("Notifying: {}", message);
        eprintln!("❌ {message}");
    }
}
