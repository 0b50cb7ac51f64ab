//! Document assembler: title block, date placeholder, then both sections

use super::item::AgendaItem;
use super::layout::render_section;
use super::section::Section;
use crate::config::{AgendaConfig, DocumentSection, LayoutSection, OutputSection};
use crate::error::{AgendaError, AgendaResult};
use chrono::NaiveDate;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Dated agenda file name, e.g. `Agenda-2024-03-07.txt`
pub fn agenda_file_name(prefix: &str, date: NaiveDate, extension: &str) -> String {
    format!("{prefix}{}.{extension}", date.format("%Y-%m-%d"))
}

/// Full path of the agenda file for `date`
pub fn agenda_path(output: &OutputSection, date: NaiveDate) -> PathBuf {
    output
        .directory
        .join(agenda_file_name(&output.file_prefix, date, &output.extension))
}

/// Render the whole agenda. Circulated items come first under the
/// "Read for Meeting" heading, the rest follow under "Preliminary Report".
pub fn render_document(
    items: &[AgendaItem],
    document: &DocumentSection,
    layout: &LayoutSection,
) -> String {
    let read_for_meeting = Section::new(&document.read_for_meeting_title, items, true);
    let preliminary_report = Section::new(&document.preliminary_report_title, items, false);

    debug!(
        read_for_meeting = read_for_meeting.len(),
        preliminary_report = preliminary_report.len(),
        "Sectioned agenda items"
    );

    let mut text = String::new();
    text.push_str(&document.title);
    text.push_str(&document.date_placeholder);
    text.push_str(&render_section(&read_for_meeting, layout));
    text.push_str(&render_section(&preliminary_report, layout));
    text
}

/// Render the agenda and write it to a newly created dated file
///
/// The document is rendered before the file is created, so a creation
/// failure leaves nothing behind.
pub fn write_agenda_file(
    items: &[AgendaItem],
    config: &AgendaConfig,
    date: NaiveDate,
) -> AgendaResult<PathBuf> {
    let text = render_document(items, &config.document, &config.layout);
    let path = agenda_path(&config.output, date);

    let mut file = File::create(&path).map_err(|e| AgendaError::output_create(&path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| AgendaError::output_write(&path, e))?;

    info!(
        path = %path.display(),
        bytes = text.len(),
        items = items.len(),
        "Agenda file written"
    );

    Ok(path)
}
