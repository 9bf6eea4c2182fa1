//! User Details Component
//!
//! Detail view for the selected user with a way back to the list.

use leptos::prelude::*;

use directory_view::Record;

#[component]
pub fn UserDetails(
    user: Record,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let website_url = user.website_url();

    view! {
        <div class="user-details">
            <button
                class="back-button"
                aria-label="Return to user list"
                on:click=move |_| on_back.run(())
            >
                "← Back to list"
            </button>

            <h2>{user.name.clone()}</h2>

            <table class="details-table">
                <tbody>
                    <tr>
                        <td><strong>"Email:"</strong></td>
                        <td>{user.email.clone()}</td>
                    </tr>
                    <tr>
                        <td><strong>"Phone:"</strong></td>
                        <td>{user.phone.clone()}</td>
                    </tr>
                    <tr>
                        <td><strong>"Address:"</strong></td>
                        <td>{user.address.one_line()}</td>
                    </tr>
                    <tr>
                        <td><strong>"Company:"</strong></td>
                        <td>{user.company.name.clone()}</td>
                    </tr>
                    <tr>
                        <td><strong>"Website:"</strong></td>
                        <td>
                            <a href=website_url target="_blank" rel="noopener noreferrer">
                                {user.website.clone()}
                            </a>
                        </td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}
