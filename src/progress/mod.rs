//! Phase reporting for the agenda pipeline
//!
//! The pipeline pushes phase changes into a [`Progress`] sink and never reads
//! anything back, so a run behaves the same with any sink or with none.

use std::path::Path;

pub mod terminal;
pub use terminal::TerminalProgress;

#[derive(Debug, Clone)]
pub struct ProgressMessage {
    pub event_type: ProgressEventType,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEventType {
    Reading,
    Writing,
    Complete,
    Error,
}

impl ProgressMessage {
    pub fn new(event_type: ProgressEventType, message: String) -> Self {
        Self {
            event_type,
            message,
        }
    }

    /// Whether this message ends the run
    pub fn is_final(&self) -> bool {
        matches!(
            self.event_type,
            ProgressEventType::Complete | ProgressEventType::Error
        )
    }
}

pub trait Progress: Send + Sync {
    fn report(&self, message: ProgressMessage);

    fn report_reading(&self, input: &Path) {
        self.report(ProgressMessage::new(
            ProgressEventType::Reading,
            format!("reading {} data", input.display()),
        ));
    }

    fn report_writing(&self) {
        self.report(ProgressMessage::new(
            ProgressEventType::Writing,
            "writing agenda file".to_string(),
        ));
    }

    fn report_complete(&self, output: &Path, items: usize) {
        self.report(ProgressMessage::new(
            ProgressEventType::Complete,
            format!("wrote {} ({items} items)", output.display()),
        ));
    }

    fn report_error(&self, message: &str) {
        self.report(ProgressMessage::new(
            ProgressEventType::Error,
            message.to_string(),
        ));
    }
}

pub struct NoOpProgress;

impl Progress for NoOpProgress {
    fn report(&self, _message: ProgressMessage) {}
}
