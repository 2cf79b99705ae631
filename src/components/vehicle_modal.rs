//! Add/edit dialog for a vehicle record.

use leptos::prelude::*;

use crate::app::SharedBridge;
use crate::host::intent::Intent;
use crate::state::modal::ModalState;

/// Modal dialog over the board.
///
/// Submit assembles the draft from the current field values, relays it as a
/// create or update intent depending on whether an editing id is set, and
/// closes. Backdrop click and Cancel close without dispatching.
#[component]
pub fn VehicleModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();
    let bridge = expect_context::<SharedBridge>();

    let submit = Callback::new(move |_| {
        let draft = modal.with(|m| m.draft());
        let intent = if draft.id.is_some() {
            Intent::Update(draft)
        } else {
            Intent::Add(draft)
        };
        bridge.dispatch(&intent);
        modal.update(ModalState::close);
    });

    view! {
        <Show when=move || modal.get().is_open()>
            <div class="dialog-backdrop" on:click=move |_| modal.update(ModalState::close)>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <h2 class="dialog__title">{move || modal.get().title()}</h2>
                    <form on:submit=move |ev| {
                        ev.prevent_default();
                        submit.run(());
                    }>
                        <label class="dialog__label">
                            "Make"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || modal.get().fields.make
                                on:input=move |ev| {
                                    modal.update(|m| m.fields.make = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Model"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || modal.get().fields.model
                                on:input=move |ev| {
                                    modal.update(|m| m.fields.model = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Year"
                            <input
                                class="dialog__input"
                                type="number"
                                prop:value=move || modal.get().fields.year
                                on:input=move |ev| {
                                    modal.update(|m| m.fields.year = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Color"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || modal.get().fields.color
                                on:input=move |ev| {
                                    modal.update(|m| m.fields.color = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Price"
                            <input
                                class="dialog__input"
                                type="number"
                                step="0.01"
                                min="0"
                                prop:value=move || modal.get().fields.price
                                on:input=move |ev| {
                                    modal.update(|m| m.fields.price = event_target_value(&ev));
                                }
                            />
                        </label>
                        <div class="dialog__actions">
                            <button
                                type="button"
                                class="btn"
                                on:click=move |_| modal.update(ModalState::close)
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn--primary">
                                "Save"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
