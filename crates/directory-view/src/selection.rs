//! Selection State
//!
//! List view or a single record's detail view.

use crate::record::Record;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    ListView,
    DetailView(Record),
}

impl Selection {
    pub fn record(&self) -> Option<&Record> {
        match self {
            Selection::ListView => None,
            Selection::DetailView(record) => Some(record),
        }
    }
}

/// Two-state machine gating list vs. detail view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionController {
    state: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Selection {
        &self.state
    }

    pub fn is_list_view(&self) -> bool {
        matches!(self.state, Selection::ListView)
    }

    /// Show the detail view for `record`.
    ///
    /// Callers pass a record taken from the base collection.
    pub fn select(&mut self, record: Record) {
        tracing::debug!("[SELECTION] detail view for user {}", record.id);
        self.state = Selection::DetailView(record);
    }

    /// Return to the list view, dropping the selected record.
    pub fn back(&mut self) {
        self.state = Selection::ListView;
    }
}
