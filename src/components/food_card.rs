//! Food Card Component
//!
//! One food in the dashboard grid with edit, availability toggle, and
//! inline-confirmed delete actions.

use leptos::prelude::*;

use crate::models::Food;

#[component]
pub fn FoodCard(
    food: Food,
    #[prop(into)] on_edit: Callback<Food>,
    #[prop(into)] on_toggle_available: Callback<Food>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    let id = food.id;
    let available = food.available;
    let edit_food = food.clone();
    let toggle_food = food.clone();

    view! {
        <article class="food-card">
            <img src=food.image.clone() alt=food.name.clone()/>
            <div class="food-body">
                <h3>{food.name.clone()}</h3>
                <p>{food.description.clone()}</p>
                <span class="food-price">"R$ " {food.price.clone()}</span>
            </div>
            <footer class="food-actions">
                <button class="edit-btn" on:click=move |_| on_edit.run(edit_food.clone())>
                    "Edit"
                </button>
                <button
                    class=if available { "availability-btn on" } else { "availability-btn off" }
                    on:click=move |_| on_toggle_available.run(toggle_food.clone())
                >
                    {if available { "Available" } else { "Unavailable" }}
                </button>
                <Show when=move || !confirm_delete.get()>
                    <button
                        class="delete-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirm_delete.set(true);
                        }
                    >
                        "×"
                    </button>
                </Show>
                <Show when=move || confirm_delete.get()>
                    <span class="delete-confirm">
                        <span class="delete-confirm-text">"Delete?"</span>
                        <button
                            class="confirm-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_delete.run(id);
                            }
                        >
                            "✓"
                        </button>
                        <button
                            class="cancel-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_confirm_delete.set(false);
                            }
                        >
                            "✗"
                        </button>
                    </span>
                </Show>
            </footer>
        </article>
    }
}
