//! Dark theme preference, persisted in `localStorage` and applied as a
//! `.dark-mode` class on the root element. Browser-only; native builds see
//! inert fallbacks.

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "vehicle_board_dark";

/// Stored preference, or the system color scheme when none is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match stored_preference(&window) {
            Some(enabled) => enabled,
            None => window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
                .is_some_and(|mq| mq.matches()),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

#[cfg(feature = "csr")]
fn stored_preference(window: &web_sys::Window) -> Option<bool> {
    let storage = window.local_storage().ok().flatten()?;
    let value = storage.get_item(STORAGE_KEY).ok().flatten()?;
    Some(value == "true")
}

/// Set or clear the `.dark-mode` class on `<html>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(el) = root {
            let _ = if enabled {
                el.class_list().add_1("dark-mode")
            } else {
                el.class_list().remove_1("dark-mode")
            };
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it, and persist the choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}
