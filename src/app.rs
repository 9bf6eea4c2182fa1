//! User Directory Frontend App
//!
//! Loads users once, then shows either the searchable list or one user's details.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use directory_view::{ListStatus, LoadingState, Selection};

use crate::commands;
use crate::config::APP_TITLE;
use crate::context::{use_directory, DirectoryContext};
use crate::components::{SearchBar, SortControls, UserDetails, UserTable};
use crate::store::{store_apply_fetch, AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store: AppStore = Store::new(AppState::new());
    let ctx = DirectoryContext::new(store);
    provide_context(ctx);

    // Load users once on mount
    Effect::new(move |_| {
        tracing::info!("[APP] Loading users");
        spawn_local(async move {
            let result = commands::fetch_users().await;
            store_apply_fetch(&store, result);
        });
    });

    let loading_state = Memo::new(move |_| ctx.loading_state());

    view! {
        {move || match loading_state.get() {
            LoadingState::Loading => view! {
                <div class="loading">"Loading users..."</div>
            }.into_any(),
            LoadingState::Failed(message) => view! {
                <div class="error">
                    <p>{format!("Error: {}", message)}</p>
                    <details class="error-log">
                        <summary>"Log"</summary>
                        <pre>{rolling_logger::recent_lines().join("\n")}</pre>
                    </details>
                </div>
            }.into_any(),
            LoadingState::Ready => view! { <DirectoryPage /> }.into_any(),
        }}
    }
}

/// Page shown once users are loaded
#[component]
fn DirectoryPage() -> impl IntoView {
    let ctx = use_directory();
    // Memo so only real selection changes swap the page
    let selection = Memo::new(move |_| ctx.selection());

    view! {
        <div class="app">
            <div class="title-holder">
                <h1 class="header">{APP_TITLE}</h1>
            </div>

            {move || match selection.get() {
                Selection::DetailView(user) => view! {
                    <UserDetails
                        user=user
                        on_back=move |_| ctx.on_back_requested()
                    />
                }.into_any(),
                Selection::ListView => view! { <ListPage /> }.into_any(),
            }}
        </div>
    }
}

/// Search/sort controls above the user table
#[component]
fn ListPage() -> impl IntoView {
    let ctx = use_directory();

    let initial_term = ctx.search_term();

    let count_label = move || match ctx.list_status() {
        ListStatus::Populated(count) => format!("{} users", count),
        _ => String::new(),
    };

    view! {
        <div class="controls">
            <SearchBar
                initial=initial_term
                on_search=move |term| ctx.on_search_term_changed(term)
            />
            <SortControls
                sort_spec=Signal::derive(move || ctx.sort_spec())
                on_sort=move |key| ctx.on_sort_requested(key)
            />
        </div>
        <UserTable
            users=ctx.displayed
            on_select=move |user| ctx.on_record_selected(user)
        />
        <p class="user-count">{count_label}</p>
    }
}
