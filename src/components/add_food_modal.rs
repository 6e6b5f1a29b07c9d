//! Add Food Modal
//!
//! Creation form shown inside the modal gate. Field state is local to the
//! dialog; the draft leaves through the `on_add` callback only.

use leptos::prelude::*;

use crate::components::{input_value, Modal};
use crate::models::FoodDraft;

#[component]
pub fn AddFoodModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_request_close: Callback<()>,
    #[prop(into)] on_add: Callback<FoodDraft>,
) -> impl IntoView {
    let (image, set_image) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_add.run(FoodDraft {
            name: name.get(),
            description: description.get(),
            price: price.get(),
            image: image.get(),
        });
        set_image.set(String::new());
        set_name.set(String::new());
        set_price.set(String::new());
        set_description.set(String::new());
        on_request_close.run(());
    };

    view! {
        <Modal is_open=is_open on_close=on_request_close>
            <form class="food-form" on:submit=submit>
                <h2>"New food"</h2>
                <input
                    type="text"
                    placeholder="Image URL"
                    prop:value=move || image.get()
                    on:input=move |ev| set_image.set(input_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(input_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Price, e.g. 19.90"
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(input_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(input_value(&ev))
                />
                <button type="submit">"Add food"</button>
            </form>
        </Modal>
    }
}
