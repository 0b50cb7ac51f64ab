//! Layout engine: renders agenda items as tab-aligned text blocks
//!
//! The reader line pads with tabs so that `Login date: ` lands on the same
//! visual column whatever the reader's name length, assuming tab stops every
//! `tab_width` characters.
//!
//! The tab string always holds one tab more than the computed tab count.

use super::item::AgendaItem;
use super::section::Section;
use crate::config::LayoutSection;

const LOGIN_DATE_LABEL: &str = "Login date: ";

/// Tab-stop units occupied by text of `len` bytes, rounded up
pub fn character_count(len: usize, tab_width: usize) -> i64 {
    len.div_ceil(tab_width) as i64
}

/// Tabs needed after a reader name of `reader_len` bytes. Negative for
/// names longer than the line can hold.
pub fn tab_count(reader_len: usize, layout: &LayoutSection) -> i64 {
    layout.tab_size - character_count(reader_len, layout.tab_width)
}

/// `tab_count + 1` tabs, or nothing when that is not positive
pub fn build_tab_string(tab_count: i64) -> String {
    let tabs = tab_count.saturating_add(1).max(0) as usize;
    "\t".repeat(tabs)
}

/// Reader name (if any), alignment tabs, then the login date
pub fn render_reader_line(reader: &str, login_date: &str, layout: &LayoutSection) -> String {
    let tabs = build_tab_string(tab_count(reader.len(), layout));

    if reader.is_empty() {
        format!("{tabs}{LOGIN_DATE_LABEL}{login_date}\n\n")
    } else {
        format!("\t{reader}{tabs}{LOGIN_DATE_LABEL}{login_date}\n\n")
    }
}

/// Author line, quoted title line, reader/date line
pub fn render_item(item: &AgendaItem, layout: &LayoutSection) -> String {
    let mut block = format!("{}\n\t\"{}\"\n", item.author, item.title);
    block.push_str(&render_reader_line(&item.reader, &item.log_in_date, layout));
    block
}

/// Section title followed directly by each item block
pub fn render_section(section: &Section<'_>, layout: &LayoutSection) -> String {
    let mut text = section.title.to_string();
    for item in &section.items {
        text.push_str(&render_item(item, layout));
    }
    text
}
