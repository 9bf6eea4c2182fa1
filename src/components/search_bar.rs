//! Search Bar Component
//!
//! Text input that reports every keystroke upward.
//! Seeded with the current term so it survives a trip to the detail view.

use leptos::prelude::*;

#[component]
pub fn SearchBar(
    #[prop(into)] initial: String,
    #[prop(into)] on_search: Callback<String>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(initial);

    view! {
        <div class="search-bar">
            <span class="search-icon">"🔍"</span>
            <input
                type="text"
                class="search-input"
                placeholder="Search by name or email"
                autocomplete="off"
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    set_input_value.set(term.clone());
                    on_search.run(term);
                }
            />
        </div>
    }
}
