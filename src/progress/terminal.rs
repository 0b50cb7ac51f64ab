//! Line-oriented phase reporter for interactive use

use super::{Progress, ProgressEventType, ProgressMessage};
use std::io::Write;
use std::sync::Mutex;

const SUFFIX: &str = "Agenda Maker";
const WORKING_CHARACTER: &str = "»";
const STOP_CHARACTER: &str = "✓";
const ERROR_CHARACTER: &str = "✗";

/// Writes one line per phase change, stderr by default
pub struct TerminalProgress<W: Write + Send = std::io::Stderr> {
    out: Mutex<W>,
}

impl TerminalProgress<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> TerminalProgress<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Render a message as a single terminal line (pure function)
    pub fn format_line(message: &ProgressMessage) -> String {
        let marker = match message.event_type {
            ProgressEventType::Reading | ProgressEventType::Writing => WORKING_CHARACTER,
            ProgressEventType::Complete => STOP_CHARACTER,
            ProgressEventType::Error => ERROR_CHARACTER,
        };
        format!("{marker} {SUFFIX}: {}", message.message)
    }
}

impl<W: Write + Send> Progress for TerminalProgress<W> {
    fn report(&self, message: ProgressMessage) {
        let line = Self::format_line(&message);
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Progress output is best effort.
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }
}
