//! Modal Overlay Component
//!
//! Generic overlay gate. Visibility comes entirely from a caller-owned flag;
//! dismissal is reported upward and never handled locally, so the overlay can
//! never drift out of sync with the flag.

use leptos::prelude::*;

/// Overlay shown while `is_open` is true
///
/// Dismissal paths (overlay click, close button) only emit `on_close`; the
/// caller flips the flag in response.
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
