//! Agenda model, sectioning, layout and document assembly

pub mod document;
pub mod item;
pub mod layout;
pub mod section;

pub use document::{agenda_file_name, agenda_path, render_document, write_agenda_file};
pub use item::{map_records, AgendaItem, COLUMN_SCHEMA};
pub use layout::{build_tab_string, render_item, render_section, tab_count};
pub use section::{classify, Section};
