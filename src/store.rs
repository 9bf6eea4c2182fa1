//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Each field is owned by one tracker; components go through the
//! helper functions below instead of writing fields directly.

use leptos::prelude::*;
use reactive_stores::Store;

use directory_view::{
    compose, BaseCollection, FetchError, Record, SearchTermTracker, SelectionController, SortKey,
    SortSpecTracker,
};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Fetched users plus the loading state (write-once)
    pub base: BaseCollection,
    /// Current free-text search term
    pub search: SearchTermTracker,
    /// Current sort key + direction
    pub sort: SortSpecTracker,
    /// List view or detail view
    pub selection: SelectionController,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Displayed collection, recomputed whenever base, search term or sort spec change
pub fn displayed_users(store: AppStore) -> Memo<Vec<Record>> {
    Memo::new(move |_| {
        let base = store.base().read();
        let search = store.search().read();
        let sort = store.sort().read();
        let shown: Vec<Record> = compose(base.records(), search.term(), sort.current())
            .into_iter()
            .cloned()
            .collect();
        shown
    })
}

// ========================
// Store Helper Functions
// ========================

// Helpers run from event handlers, so reads here stay untracked.
fn is_ready(store: &AppStore) -> bool {
    store.base().read_untracked().state().is_ready()
}

/// Apply the one-shot fetch result
pub fn store_apply_fetch(store: &AppStore, result: Result<Vec<Record>, FetchError>) {
    store.base().write().apply_fetch(result);
}

pub fn store_set_search_term(store: &AppStore, term: String) {
    if !is_ready(store) {
        return;
    }
    store.search().write().set_term(term);
}

pub fn store_request_sort(store: &AppStore, key: SortKey) {
    if !is_ready(store) {
        return;
    }
    store.sort().write().request_sort(key);
}

/// Open the detail view. Records outside the base collection are refused.
pub fn store_select_record(store: &AppStore, record: Record) {
    if !is_ready(store) {
        return;
    }
    if !store.base().read_untracked().contains(&record) {
        tracing::warn!("[STORE] user {} is not in the directory, ignoring", record.id);
        return;
    }
    store.selection().write().select(record);
}

pub fn store_back_to_list(store: &AppStore) {
    store.selection().write().back();
}
