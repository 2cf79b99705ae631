//! Aggregate stats over the full roster: record count and total value.

use leptos::prelude::*;

use crate::state::inventory::InventoryState;
use crate::util::format::format_price;

/// Stat tiles above the grid.
///
/// Both figures come from the unfiltered roster, so an active search never
/// changes them; they refresh with every roster replacement.
#[component]
pub fn StatsBar() -> impl IntoView {
    let inventory = expect_context::<RwSignal<InventoryState>>();

    let count = move || inventory.get().stats().count;
    let total = move || format!("${}", format_price(inventory.get().stats().total_value));

    view! {
        <div class="stats-bar">
            <div class="stats-bar__stat">
                <span class="stats-bar__value">{count}</span>
                <span class="stats-bar__label">"Total Vehicles"</span>
            </div>
            <div class="stats-bar__stat">
                <span class="stats-bar__value">{total}</span>
                <span class="stats-bar__label">"Total Value"</span>
            </div>
        </div>
    }
}
