//! UI Components
//!
//! Reusable Leptos components.

use wasm_bindgen::JsCast;

mod add_food_modal;
mod edit_food_modal;
mod food_card;
mod header;
mod modal;

pub use add_food_modal::AddFoodModal;
pub use edit_food_modal::EditFoodModal;
pub use food_card::FoodCard;
pub use header::Header;
pub use modal::Modal;

/// Current value of the `<input>` behind an input event
pub(crate) fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|target| {
            target
                .dyn_ref::<web_sys::HtmlInputElement>()
                .map(|input| input.value())
        })
        .unwrap_or_default()
}
