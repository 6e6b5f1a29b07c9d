//! Dashboard Header Component

use leptos::prelude::*;

/// Top bar with the add-food entry point
#[component]
pub fn Header(#[prop(into)] on_open_add: Callback<()>) -> impl IntoView {
    view! {
        <header class="dashboard-header">
            <h1>"Food Dashboard"</h1>
            <button class="new-food-btn" on:click=move |_| on_open_add.run(())>
                "New food"
            </button>
        </header>
    }
}
