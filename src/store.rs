//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. List transitions
//! are plain functions over `Vec<Food>` so they stay testable off the
//! reactive graph.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Food;

/// Everything the dashboard page owns
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Foods in server/display order
    pub foods: Vec<Food>,
    /// Item currently targeted by the edit dialog
    pub editing_food: Option<Food>,
    /// Add-dialog visibility flag
    pub add_modal_open: bool,
    /// Edit-dialog visibility flag
    pub edit_modal_open: bool,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

// ========================
// List Transitions (pure)
// ========================

/// Replace the whole list with a freshly loaded one
pub fn replace_all(foods: &mut Vec<Food>, loaded: Vec<Food>) {
    *foods = loaded;
}

/// Append a newly created food
pub fn append_food(foods: &mut Vec<Food>, food: Food) {
    foods.push(food);
}

/// Swap in the server's version of a food, matched by id
pub fn replace_food(foods: &mut Vec<Food>, updated: Food) {
    if let Some(entry) = foods.iter_mut().find(|f| f.id == updated.id) {
        *entry = updated;
    }
}

/// Drop the entry with the given id, if present
pub fn remove_food(foods: &mut Vec<Food>, id: u32) {
    foods.retain(|f| f.id != id);
}

// ========================
// Store Helper Functions
// ========================

/// Replace the food list in the store
pub fn store_replace_all(store: &DashboardStore, loaded: Vec<Food>) {
    replace_all(&mut store.foods().write(), loaded);
}

/// Append a food to the store
pub fn store_append_food(store: &DashboardStore, food: Food) {
    append_food(&mut store.foods().write(), food);
}

/// Update a food in the store by id
pub fn store_replace_food(store: &DashboardStore, updated: Food) {
    replace_food(&mut store.foods().write(), updated);
}

/// Remove a food from the store by id
pub fn store_remove_food(store: &DashboardStore, id: u32) {
    remove_food(&mut store.foods().write(), id);
}

/// Flip the add-dialog flag
pub fn store_toggle_add_modal(store: &DashboardStore) {
    store.add_modal_open().update(|open| *open = !*open);
}

/// Flip the edit-dialog flag
pub fn store_toggle_edit_modal(store: &DashboardStore) {
    store.edit_modal_open().update(|open| *open = !*open);
}

/// Target a food for editing and open the edit dialog
pub fn store_begin_edit(store: &DashboardStore, food: Food) {
    store.editing_food().set(Some(food));
    store.edit_modal_open().set(true);
}
