//! Top bar with the board title, search field, theme toggle, and add button.

use leptos::prelude::*;

use crate::state::modal::ModalState;
use crate::state::ui::UiState;

/// Header toolbar.
///
/// Every keystroke in the search field updates the query and re-filters the
/// grid; there is no debounce.
#[component]
pub fn Toolbar() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_| {
        ui.update(|u| u.dark_mode = crate::util::dark_mode::toggle(u.dark_mode));
    };

    view! {
        <header class="toolbar">
            <h1 class="toolbar__title">"Vehicle Inventory"</h1>
            <input
                class="toolbar__search"
                type="search"
                placeholder="Search by make, model, color, or year"
                prop:value=move || ui.get().search_query
                on:input=move |ev| {
                    ui.update(|u| u.search_query = event_target_value(&ev));
                }
            />
            <span class="toolbar__spacer"></span>
            <button
                class="btn toolbar__theme"
                title="Toggle dark mode"
                on:click=on_toggle_theme
            >
                {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{263e}" }}
            </button>
            <button class="btn btn--primary" on:click=move |_| modal.update(ModalState::open_add)>
                "+ Add Vehicle"
            </button>
        </header>
    }
}
