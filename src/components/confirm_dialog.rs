//! Delete confirmation dialog.

use leptos::prelude::*;

use crate::app::SharedBridge;
use crate::host::intent::Intent;
use crate::state::confirm::ConfirmState;

/// Confirmation surface for a pending delete.
///
/// Confirm relays a delete intent for the pending id and closes; Cancel
/// closes without a signal. There is no backdrop or Escape dismissal here;
/// only the explicit buttons resolve it.
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let confirm = expect_context::<RwSignal<ConfirmState>>();
    let bridge = expect_context::<SharedBridge>();

    let on_cancel = move |_| confirm.update(ConfirmState::cancel);

    let on_confirm = Callback::new(move |_: ()| {
        let mut target = None;
        confirm.update(|c| target = c.confirm());
        if let Some(id) = target {
            bridge.dispatch(&Intent::Delete(id));
        }
    });

    view! {
        <Show when=move || confirm.get().is_open()>
            <div class="dialog-backdrop">
                <div class="dialog dialog--confirm">
                    <h2 class="dialog__title">"Delete Vehicle"</h2>
                    <p class="dialog__body">
                        "Are you sure you want to delete this vehicle? This cannot be undone."
                    </p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
