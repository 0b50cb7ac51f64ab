//! Agenda items and the column schema that maps raw rows onto them

use crate::input::RawRecord;

/// One submitted item, built from a single input row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgendaItem {
    pub author: String,
    pub title: String,
    /// Free-form text, never parsed as a date
    pub log_in_date: String,
    pub reader: String,
    pub todo: String,
    pub circulate: bool,
    pub decision: String,
    pub action_date: String,
    pub last_name: String,
    pub first_name: String,
    pub salutation: String,
    pub email: String,
    pub file_name: String,
    pub notes: String,
}

/// Assigns one raw field to an item. The affirmation token is only read by
/// the circulate column.
pub type FieldSetter = fn(&mut AgendaItem, &str, &str);

/// Column name and setter, in input column order
pub const COLUMN_SCHEMA: [(&str, FieldSetter); 14] = [
    ("Author", |item, value, _| item.author = value.to_string()),
    ("Title", |item, value, _| item.title = value.to_string()),
    ("LogInDate", |item, value, _| item.log_in_date = value.to_string()),
    ("Reader", |item, value, _| item.reader = value.to_string()),
    ("Todo", |item, value, _| item.todo = value.to_string()),
    ("Circulate", |item, value, affirmation| {
        item.circulate = is_affirmative(value, affirmation)
    }),
    ("Decision", |item, value, _| item.decision = value.to_string()),
    ("ActionDate", |item, value, _| item.action_date = value.to_string()),
    ("LastName", |item, value, _| item.last_name = value.to_string()),
    ("FirstName", |item, value, _| item.first_name = value.to_string()),
    ("Salutation", |item, value, _| item.salutation = value.to_string()),
    ("Email", |item, value, _| item.email = value.to_string()),
    ("FileName", |item, value, _| item.file_name = value.to_string()),
    ("Notes", |item, value, _| item.notes = value.to_string()),
];

/// Raw circulate value equals the affirmation token, ignoring case
pub fn is_affirmative(value: &str, affirmation: &str) -> bool {
    value.to_lowercase() == affirmation.to_lowercase()
}

impl AgendaItem {
    /// Map one row positionally. Missing trailing fields keep their zero
    /// value and extra fields are ignored.
    pub fn from_record(record: &[String], affirmation: &str) -> Self {
        let mut item = AgendaItem::default();
        for ((_, set), value) in COLUMN_SCHEMA.iter().zip(record) {
            set(&mut item, value, affirmation);
        }
        item
    }
}

/// Skip the header row unconditionally and map every remaining row in order
pub fn map_records(records: &[RawRecord], affirmation: &str) -> Vec<AgendaItem> {
    records
        .iter()
        .skip(1)
        .map(|record| AgendaItem::from_record(record, affirmation))
        .collect()
}
