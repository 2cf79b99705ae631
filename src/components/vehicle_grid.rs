//! Card grid for the effective (filtered or full) vehicle list.

use leptos::prelude::*;

use crate::components::vehicle_card::VehicleCard;
use crate::state::inventory::InventoryState;
use crate::state::ui::UiState;

/// The main grid. Shows a placeholder when the effective list is empty,
/// otherwise one card per record.
#[component]
pub fn VehicleGrid() -> impl IntoView {
    let inventory = expect_context::<RwSignal<InventoryState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let visible = move || inventory.get().filtered(&ui.get().search_query);

    view! {
        <div class="vehicle-grid">
            {move || {
                let vehicles = visible();
                if vehicles.is_empty() {
                    view! {
                        <div class="vehicle-grid__empty">
                            <p class="vehicle-grid__empty-title">"No vehicles found"</p>
                            <p class="vehicle-grid__empty-hint">
                                "Add a vehicle or adjust your search."
                            </p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="vehicle-grid__cards">
                            {vehicles
                                .into_iter()
                                .map(|v| view! { <VehicleCard vehicle=v/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
