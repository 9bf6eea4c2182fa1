//! Application Context
//!
//! Presentation boundary provided via Leptos Context API:
//! three read models and four commands.

use leptos::prelude::*;

use directory_view::{ListStatus, LoadingState, Record, Selection, SortKey, SortSpec};

use crate::store::{
    displayed_users, store_back_to_list, store_request_sort, store_select_record,
    store_set_search_term, AppStateStoreFields, AppStore,
};

/// App-wide read models and commands provided via context
#[derive(Clone, Copy)]
pub struct DirectoryContext {
    store: AppStore,
    /// Filtered + sorted users - read
    pub displayed: Memo<Vec<Record>>,
}

impl DirectoryContext {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            displayed: displayed_users(store),
        }
    }

    pub fn loading_state(&self) -> LoadingState {
        self.store.base().read().state().clone()
    }

    pub fn list_status(&self) -> ListStatus {
        let displayed_len = self.displayed.with(|users| users.len());
        ListStatus::from_parts(self.store.base().read().state(), displayed_len)
    }

    pub fn selection(&self) -> Selection {
        self.store.selection().read().current().clone()
    }

    /// Current term without subscribing to it
    pub fn search_term(&self) -> String {
        self.store.search().read_untracked().term().to_string()
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.store.sort().read().current()
    }

    pub fn on_search_term_changed(&self, term: String) {
        store_set_search_term(&self.store, term);
    }

    pub fn on_sort_requested(&self, key: SortKey) {
        store_request_sort(&self.store, key);
    }

    pub fn on_record_selected(&self, record: Record) {
        store_select_record(&self.store, record);
    }

    pub fn on_back_requested(&self) {
        store_back_to_list(&self.store);
    }
}

/// Get the directory context
pub fn use_directory() -> DirectoryContext {
    expect_context::<DirectoryContext>()
}
