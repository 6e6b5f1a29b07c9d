//! Edit Food Modal
//!
//! Update form shown inside the modal gate, prefilled from the item the
//! dashboard is currently editing.

use leptos::prelude::*;

use crate::components::{input_value, Modal};
use crate::models::{Food, FoodDraft};

#[component]
pub fn EditFoodModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] editing_food: Signal<Option<Food>>,
    #[prop(into)] on_request_close: Callback<()>,
    #[prop(into)] on_update: Callback<FoodDraft>,
) -> impl IntoView {
    let (image, set_image) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (description, set_description) = signal(String::new());

    // Refill the form whenever the editing target changes
    Effect::new(move |_| {
        if let Some(food) = editing_food.get() {
            set_image.set(food.image);
            set_name.set(food.name);
            set_price.set(food.price);
            set_description.set(food.description);
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_update.run(FoodDraft {
            name: name.get(),
            description: description.get(),
            price: price.get(),
            image: image.get(),
        });
        on_request_close.run(());
    };

    view! {
        <Modal is_open=is_open on_close=on_request_close>
            <form class="food-form" on:submit=submit>
                <h2>"Edit food"</h2>
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
                <button type="submit">"Save changes"</button>
            </form>
        </Modal>
    }
}
