//! Transient notification surface.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// The single toast element. Severity picks the modifier class; visibility
/// is driven entirely by [`ToastState`], including the auto-dismiss.
#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    let class = move || {
        let t = toast.get();
        if t.visible {
            format!("toast {} toast--visible", t.kind.css_class())
        } else {
            format!("toast {}", t.kind.css_class())
        }
    };

    view! { <div class=class role="status">{move || toast.get().message}</div> }
}
