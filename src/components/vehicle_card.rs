//! Card for a single vehicle record with edit and delete affordances.

use leptos::prelude::*;

use crate::host::types::Vehicle;
use crate::state::confirm::ConfirmState;
use crate::state::inventory::InventoryState;
use crate::state::modal::ModalState;
use crate::util::format::format_price;

/// One roster record as a card: make/model title, year/color/price details,
/// and icon buttons keyed by the record id.
#[component]
pub fn VehicleCard(vehicle: Vehicle) -> impl IntoView {
    let inventory = expect_context::<RwSignal<InventoryState>>();
    let modal = expect_context::<RwSignal<ModalState>>();
    let confirm = expect_context::<RwSignal<ConfirmState>>();

    let id = vehicle.id;
    let price = format!("${}", format_price(vehicle.price));

    // Re-resolve the record at click time; a roster refresh may have removed
    // it, in which case edit is a no-op.
    let on_edit = move |_| {
        let Some(current) = inventory.with(|inv| inv.find(id).cloned()) else {
            return;
        };
        modal.update(|m| m.open_edit(&current));
    };

    let on_delete = move |_| confirm.update(|c| c.request(id));

    view! {
        <div class="vehicle-card">
            <div class="vehicle-card__header">
                <div class="vehicle-card__title">
                    <span class="vehicle-card__make">{vehicle.make.clone()}</span>
                    <span class="vehicle-card__model">{vehicle.model.clone()}</span>
                </div>
                <div class="vehicle-card__actions">
                    <button class="icon-btn icon-btn--edit" title="Edit" on:click=on_edit>
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
                            <path
                                d="M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            ></path>
                            <path
                                d="M18.5 2.5a2.121 2.121 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            ></path>
                        </svg>
                    </button>
                    <button class="icon-btn icon-btn--delete" title="Delete" on:click=on_delete>
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
                            <polyline
                                points="3 6 5 6 21 6"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            ></polyline>
                            <path
                                d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            ></path>
                        </svg>
                    </button>
                </div>
            </div>
            <dl class="vehicle-card__details">
                <div class="vehicle-card__detail">
                    <dt>"Year"</dt>
                    <dd>{vehicle.year}</dd>
                </div>
                <div class="vehicle-card__detail">
                    <dt>"Color"</dt>
                    <dd>{vehicle.color.clone()}</dd>
                </div>
                <div class="vehicle-card__detail vehicle-card__detail--price">
                    <dt>"Price"</dt>
                    <dd>{price}</dd>
                </div>
            </dl>
        </div>
    }
}
