#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use crate::host::intent::Intent;

/// Outbound seam between the UI and whatever mechanism the embedding shell
/// observes. Components depend on this trait, not on the channel itself, so
/// tests (and future hosts) can swap the transport.
pub trait HostBridge {
    /// Relay one intent to the host. Fire-and-forget: there is no delivery
    /// acknowledgment, and the host is expected to answer every applied
    /// mutation with a fresh roster push.
    fn dispatch(&self, intent: &Intent);
}

/// Production bridge: writes the encoded signal to `window.status`, which
/// the shell watches for status-change events. Each write overwrites any
/// unread prior value.
pub struct StatusChannel;

impl HostBridge for StatusChannel {
    fn dispatch(&self, intent: &Intent) {
        match intent.encode() {
            Ok(signal) => write_status(&signal),
            Err(e) => leptos::logging::warn!("intent dropped: {e}"),
        }
    }
}

fn write_status(signal: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            window.set_status(signal);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = signal;
    }
}
