//! Mock implementations and fixtures for testing

use crate::progress::{Progress, ProgressEventType, ProgressMessage};
use std::sync::Mutex;

/// Progress sink that keeps every message it receives
#[derive(Debug, Default)]
pub struct RecordingProgress {
    messages: Mutex<Vec<ProgressMessage>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<ProgressMessage> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn event_types(&self) -> Vec<ProgressEventType> {
        self.messages().iter().map(|m| m.event_type).collect()
    }
}

impl Progress for RecordingProgress {
    fn report(&self, message: ProgressMessage) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message),
            Err(poisoned) => poisoned.into_inner().push(message),
        }
    }
}

/// Header plus three submissions, two of them circulated
pub fn sample_csv() -> &'static str {
    "Author,Title,LogInDate,Reader,Todo,Circulate,Decision,ActionDate,LastName,FirstName,Salutation,Email,FileName,Notes\n\
     Jane Austen,Emma,2024-01-02,Kitty,review,Yes,,,Austen,Jane,Ms,ja@example.org,emma.pdf,\n\
     George Eliot,Middlemarch,2024-01-05,,,no,,,Eliot,George,Mr,ge@example.org,mm.pdf,resubmitted\n\
     \"Brontë, Charlotte\",\"Jane \"\"Eyre\"\"\",2024-01-09,Elizabeth Bennet-Darcy,,YES,,,,,,,,\n"
}
