//! Root component wiring state contexts to the host bridge.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::stats_bar::StatsBar;
use crate::components::toast::Toast;
use crate::components::toolbar::Toolbar;
use crate::components::vehicle_grid::VehicleGrid;
use crate::components::vehicle_modal::VehicleModal;
use crate::host::bridge::{HostBridge, StatusChannel};
use crate::state::confirm::ConfirmState;
use crate::state::inventory::InventoryState;
use crate::state::modal::ModalState;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;

/// Shared handle to the injected host adapter. Components dispatch intents
/// through this, never through the channel directly.
pub type SharedBridge = Arc<dyn HostBridge + Send + Sync>;

/// Root application component.
///
/// Provides all shared state contexts and the host bridge, registers the
/// inbound entry points, and composes the single board view. The roster
/// starts empty; the host pushes the real one once the page is up.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let inventory = RwSignal::new(InventoryState::default());
    let modal = RwSignal::new(ModalState::default());
    let confirm = RwSignal::new(ConfirmState::default());
    let toast = RwSignal::new(ToastState::default());
    let ui = RwSignal::new(UiState {
        dark_mode: crate::util::dark_mode::read_preference(),
        search_query: String::new(),
    });

    provide_context(inventory);
    provide_context(modal);
    provide_context(confirm);
    provide_context(toast);
    provide_context(ui);

    let bridge: SharedBridge = Arc::new(StatusChannel);
    provide_context(bridge);

    crate::util::dark_mode::apply(ui.get_untracked().dark_mode);

    #[cfg(feature = "csr")]
    crate::host::inbound::register(inventory, toast);

    // Escape closes the add/edit dialog. The delete confirmation only
    // closes through its explicit buttons.
    window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            modal.update(ModalState::close);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/vehicle-board.css"/>
        <Title text="Vehicle Inventory"/>

        <div class="vehicle-board">
            <Toolbar/>
            <StatsBar/>
            <VehicleGrid/>
            <VehicleModal/>
            <ConfirmDialog/>
            <Toast/>
        </div>
    }
}
