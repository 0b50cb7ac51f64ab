//! Agenda Maker
//!
//! Turns a CSV file of board meeting submissions into a plain-text agenda.
//!
//! # Overview
//!
//! A run reads the submissions file, maps every data row onto an
//! [`AgendaItem`], splits the items by their circulate flag and writes a
//! tab-aligned document named after the current date:
//! - [`input`] parses the comma-separated records
//! - [`agenda`] holds the item model, sectioning, layout and assembly
//! - [`pipeline`] runs those stages in order and reports progress
//!
//! # Quick Start
//!
//! ```rust
//! use agenda_maker::agenda::{render_document, AgendaItem};
//! use agenda_maker::config::AgendaConfig;
//!
//! let config = AgendaConfig::default();
//! let items = vec![AgendaItem {
//!     author: "Jane Austen".to_string(),
//!     title: "Emma".to_string(),
//!     log_in_date: "2024-01-02".to_string(),
//!     circulate: true,
//!     ..Default::default()
//! }];
//!
//! let text = render_document(&items, &config.document, &config.layout);
//! assert!(text.contains("Read for Meeting\n\nJane Austen\n\t\"Emma\"\n"));
//! ```

pub mod agenda;
pub mod config;
pub mod error;
pub mod input;
pub mod observability;
pub mod pipeline;
pub mod progress;
pub mod testing;

pub use agenda::{AgendaItem, Section};
pub use config::*;
pub use error::{AgendaError, AgendaResult};
pub use input::RecordError;
pub use pipeline::AgendaPipeline;
pub use progress::{NoOpProgress, Progress, ProgressEventType, ProgressMessage, TerminalProgress};
