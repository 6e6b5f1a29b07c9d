//! Food Dashboard App
//!
//! Page component owning the food list and the dialog flags. Children only
//! see signals for reads and callbacks for writes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::FoodsApi;
use crate::components::{AddFoodModal, EditFoodModal, FoodCard, Header};
use crate::config::Config;
use crate::models::{Food, FoodDraft};
use crate::store::{
    store_append_food, store_begin_edit, store_remove_food, store_replace_all,
    DashboardStateStoreFields,
    store_replace_food, store_toggle_add_modal, store_toggle_edit_modal, DashboardState,
    DashboardStore,
};

#[component]
pub fn App() -> impl IntoView {
    let config = Config::from_env();
    let delete_policy = config.delete_policy;
    // reqwest's wasm client is not Send, so it lives in local storage
    let api = StoredValue::new_local(FoodsApi::new(config.api_base));
    let store: DashboardStore = Store::new(DashboardState::default());

    // Load foods on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api.get_value().list().await {
                Ok(foods) => store_replace_all(&store, foods),
                Err(err) => {
                    web_sys::console::error_1(&format!("failed to load foods: {}", err).into());
                }
            }
        });
    });

    let handle_add = Callback::new(move |draft: FoodDraft| {
        spawn_local(async move {
            match api.get_value().create(&draft).await {
                Ok(food) => store_append_food(&store, food),
                Err(err) => {
                    web_sys::console::error_1(&format!("failed to create food: {}", err).into());
                }
            }
        });
    });

    let handle_update = Callback::new(move |draft: FoodDraft| {
        let Some(editing) = store.editing_food().get_untracked() else {
            return;
        };
        let merged = editing.merged(&draft);
        spawn_local(async move {
            match api.get_value().update(&merged).await {
                Ok(food) => store_replace_food(&store, food),
                Err(err) => {
                    web_sys::console::error_1(&format!("failed to update food: {}", err).into());
                }
            }
        });
    });

    let handle_toggle_available = Callback::new(move |food: Food| {
        let flipped = Food {
            available: !food.available,
            ..food
        };
        spawn_local(async move {
            match api.get_value().update(&flipped).await {
                Ok(food) => store_replace_food(&store, food),
                Err(err) => {
                    web_sys::console::error_1(&format!("failed to update food: {}", err).into());
                }
            }
        });
    });

    let handle_delete = Callback::new(move |id: u32| {
        spawn_local(async move {
            let result = api.get_value().delete(id).await;
            if let Err(err) = &result {
                web_sys::console::error_1(&format!("failed to delete food {}: {}", id, err).into());
            }
            if delete_policy.removes_locally(result.is_ok()) {
                store_remove_food(&store, id);
            }
        });
    });

    let handle_edit = Callback::new(move |food: Food| store_begin_edit(&store, food));
    let toggle_add = Callback::new(move |_: ()| store_toggle_add_modal(&store));
    let toggle_edit = Callback::new(move |_: ()| store_toggle_edit_modal(&store));

    view! {
        <Header on_open_add=toggle_add/>

        <AddFoodModal
            is_open=Signal::derive(move || store.add_modal_open().get())
            on_request_close=toggle_add
            on_add=handle_add
        />
        <EditFoodModal
            is_open=Signal::derive(move || store.edit_modal_open().get())
            editing_food=Signal::derive(move || store.editing_food().get())
            on_request_close=toggle_edit
            on_update=handle_update
        />

        <main class="foods-grid">
            {move || {
                store
                    .foods()
                    .get()
                    .into_iter()
                    .map(|food| {
                        view! {
                            <FoodCard
                                food=food
                                on_edit=handle_edit
                                on_toggle_available=handle_toggle_available
                                on_delete=handle_delete
                            />
                        }
                    })
                    .collect_view()
            }}
        </main>

        <p class="food-count">{move || format!("{} foods", store.foods().get().len())}</p>
    }
}
