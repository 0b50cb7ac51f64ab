//! Splitting items into the two agenda sections

use super::item::AgendaItem;

/// Items whose circulate flag equals `circulate`, in their original order
pub fn classify(items: &[AgendaItem], circulate: bool) -> Vec<&AgendaItem> {
    items
        .iter()
        .filter(|item| item.circulate == circulate)
        .collect()
}

/// A titled run of items sharing the same circulate value
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub title: &'a str,
    pub circulate: bool,
    pub items: Vec<&'a AgendaItem>,
}

impl<'a> Section<'a> {
    pub fn new(title: &'a str, items: &'a [AgendaItem], circulate: bool) -> Self {
        Self {
            title,
            circulate,
            items: classify(items, circulate),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
