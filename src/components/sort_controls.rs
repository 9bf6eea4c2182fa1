//! Sort Controls Component
//!
//! One button per sort key; the active key shows its direction arrow.

use leptos::prelude::*;

use directory_view::{SortKey, SortSpec};

#[component]
pub fn SortControls(
    #[prop(into)] sort_spec: Signal<SortSpec>,
    #[prop(into)] on_sort: Callback<SortKey>,
) -> impl IntoView {
    view! {
        <div class="sort-controls">
            <span>"Sort by: "</span>
            {SortKey::ALL.into_iter().map(|key| {
                let is_active = move || sort_spec.get().key == key;
                let arrow = move || {
                    let spec = sort_spec.get();
                    if spec.key == key { spec.direction.arrow() } else { "" }
                };
                view! {
                    <button
                        class:active=is_active
                        on:click=move |_| on_sort.run(key)
                    >
                        {key.label()}
                        <span class="sort-arrow">{arrow}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
