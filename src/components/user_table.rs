//! User Table Component
//!
//! Displayed users as clickable rows, or an empty-state message.

use leptos::prelude::*;

use directory_view::Record;

#[component]
pub fn UserTable(
    users: Memo<Vec<Record>>,
    #[prop(into)] on_select: Callback<Record>,
) -> impl IntoView {
    view! {
        <div class="user-list">
            <Show
                when=move || !users.with(|u| u.is_empty())
                fallback=|| view! { <div class="no-results">"No users found"</div> }
            >
                <table class="user-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"More Details"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || users.get()
                            key=|user| user.id
                            children=move |user| {
                                let for_row = user.clone();
                                let for_button = user.clone();
                                let aria = format!("View details for {}", user.name);
                                view! {
                                    <tr
                                        class="user-row"
                                        title="Click for more details"
                                        on:click=move |_| on_select.run(for_row.clone())
                                    >
                                        <td>{user.name.clone()}</td>
                                        <td>{user.email.clone()}</td>
                                        <td>
                                            <button
                                                class="view-button"
                                                aria-label=aria
                                                on:click=move |ev| {
                                                    // Row handler would select a second time
                                                    ev.stop_propagation();
                                                    on_select.run(for_button.clone());
                                                }
                                            >
                                                "View Details"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
