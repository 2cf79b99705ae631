//! Entry points the embedding shell invokes via script evaluation.
//!
//! The shell calls `updateVehicles(json)` with the full roster after load
//! and after every applied mutation, and `showToast(message, kind)` to
//! surface mutation outcomes. Both are exported under their original JS
//! names and route through a registry populated when the root component
//! mounts; calls before mount fail safely.
//!
//! All of this requires a browser environment and is gated behind `csr`.

#[cfg(feature = "csr")]
use std::cell::Cell;

#[cfg(feature = "csr")]
use leptos::prelude::{RwSignal, Update};
#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "csr")]
use crate::state::inventory::InventoryState;
#[cfg(feature = "csr")]
use crate::state::toast::{ToastKind, ToastState};

#[cfg(feature = "csr")]
#[derive(Clone, Copy)]
struct HostHandles {
    inventory: RwSignal<InventoryState>,
    toast: RwSignal<ToastState>,
}

#[cfg(feature = "csr")]
thread_local! {
    static HANDLES: Cell<Option<HostHandles>> = const { Cell::new(None) };
}

/// Register the signals host calls should land in. Called once from `App`.
#[cfg(feature = "csr")]
pub fn register(inventory: RwSignal<InventoryState>, toast: RwSignal<ToastState>) {
    HANDLES.with(|handles| handles.set(Some(HostHandles { inventory, toast })));
}

/// Replace the displayed roster with the host's serialized vehicle array.
///
/// # Errors
///
/// Rejects unparseable payloads with a JS exception and leaves the prior
/// roster untouched; the parse happens before any signal is written.
#[cfg(feature = "csr")]
#[wasm_bindgen(js_name = updateVehicles)]
pub fn update_vehicles(json: &str) -> Result<(), JsValue> {
    let Some(handles) = HANDLES.with(Cell::get) else {
        return Err(JsValue::from_str("vehicle board not mounted"));
    };

    let roster = InventoryState::parse_roster(json).map_err(|e| {
        leptos::logging::warn!("rejected inbound roster: {e}");
        JsValue::from_str(&e.to_string())
    })?;

    handles.inventory.update(|inventory| inventory.replace(roster));
    Ok(())
}

/// Show a transient notification, auto-dismissed after a fixed duration.
/// The dismissal timer is fire-and-forget; a newer toast reuses the surface
/// and the earlier timer simply hides it on schedule.
#[cfg(feature = "csr")]
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: &str) {
    let Some(handles) = HANDLES.with(Cell::get) else {
        return;
    };

    handles
        .toast
        .update(|toast| toast.show(message, ToastKind::from_label(kind)));

    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(ToastState::AUTO_DISMISS).await;
        handles.toast.update(ToastState::dismiss);
    });
}
