#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// Delete confirmation state: `pending` holds the target id between the
/// delete request on a card and the user's confirm or cancel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfirmState {
    pub pending: Option<i64>,
}

impl ConfirmState {
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Record the target and open the confirmation surface.
    pub fn request(&mut self, id: i64) {
        self.pending = Some(id);
    }

    /// Explicit cancel: clear the pending id, no signal sent.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Explicit confirm: clear the pending id and yield it for intent
    /// dispatch. Yields `None` when nothing was pending.
    pub fn confirm(&mut self) -> Option<i64> {
        self.pending.take()
    }
}
