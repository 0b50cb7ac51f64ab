//! End-to-end agenda run: parse, map, section, render, write
//!
//! Each stage finishes before the next one starts. Phase changes go to the
//! injected progress sink; the result does not depend on it.

use crate::agenda::{map_records, write_agenda_file, AgendaItem};
use crate::config::AgendaConfig;
use crate::error::AgendaResult;
use crate::input::read_records;
use crate::progress::{NoOpProgress, Progress};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, info_span};

pub struct AgendaPipeline {
    config: AgendaConfig,
    progress: Arc<dyn Progress>,
}

impl AgendaPipeline {
    /// Create a pipeline that reports nothing
    pub fn new(config: AgendaConfig) -> Self {
        Self::with_progress(config, Arc::new(NoOpProgress))
    }

    pub fn with_progress(config: AgendaConfig, progress: Arc<dyn Progress>) -> Self {
        Self { config, progress }
    }

    pub fn config(&self) -> &AgendaConfig {
        &self.config
    }

    /// Read `input` and map every data row to an item
    pub fn load_items(&self, input: &Path) -> AgendaResult<Vec<AgendaItem>> {
        let records = read_records(input)?;
        let items = map_records(
            &records,
            &self.config.classification.circulation_affirmation,
        );

        info!(
            input = %input.display(),
            items = items.len(),
            "Loaded agenda items"
        );

        Ok(items)
    }

    /// Produce the agenda for `date` from `input`, returning the written path
    pub fn run(&self, input: &Path, date: NaiveDate) -> AgendaResult<PathBuf> {
        let span = info_span!("agenda_run", input = %input.display(), %date);
        let _enter = span.enter();

        self.progress.report_reading(input);
        let items = match self.load_items(input) {
            Ok(items) => items,
            Err(e) => {
                error!("Failed to read agenda input: {}", e);
                self.progress.report_error(&e.to_string());
                return Err(e);
            }
        };

        self.progress.report_writing();
        match write_agenda_file(&items, &self.config, date) {
            Ok(path) => {
                self.progress.report_complete(&path, items.len());
                Ok(path)
            }
            Err(e) => {
                error!("Failed to write agenda: {}", e);
                self.progress.report_error(&e.to_string());
                Err(e)
            }
        }
    }
}
