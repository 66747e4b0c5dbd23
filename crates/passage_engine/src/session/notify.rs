//! Player-facing notifications
//!
//! Short uppercase status lines describing the outcome of a command. The
//! host decides how to surface them (HUD, toast, console); the library only
//! posts through this seam.

/// Sink for player-facing status notifications
pub trait Notifier {
    /// Post one status line
    fn post(&mut self, message: &str);
}

/// Notifier that routes messages to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn post(&mut self, message: &str) {
        log::info!("notification: {message}");
    }
}

/// Notifier that records messages, for tests and headless hosts
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    /// Messages posted so far, oldest first
    pub messages: Vec<String>,
}

impl RecordingNotifier {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent message, if any
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl Notifier for RecordingNotifier {
    fn post(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
