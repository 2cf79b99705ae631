#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

/// Severity of a host-reported outcome. The host sends a free-form label;
/// anything other than `success` or `error` renders as `Info`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    pub fn from_label(label: &str) -> Self {
        match label {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            _ => ToastKind::Info,
        }
    }

    /// BEM modifier for the toast surface.
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Info => "toast--info",
        }
    }
}

/// The single transient notification surface. The host triggers it after
/// acting on an intent; this layer only displays and auto-dismisses it.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
}

impl ToastState {
    /// How long a toast stays up before the fire-and-forget dismissal.
    pub const AUTO_DISMISS: Duration = Duration::from_secs(3);

    pub fn show(&mut self, message: &str, kind: ToastKind) {
        self.message = message.to_owned();
        self.kind = kind;
        self.visible = true;
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}
