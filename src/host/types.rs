//! Wire types shared with the embedding host.

/// A vehicle record as the host serializes it. The `id` is host-assigned
/// and stable; this layer never mints one.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: f64,
}

/// A candidate record assembled from the form, outbound only.
///
/// `id` is `Some` in edit mode and `None` (serialized as `null`) in add
/// mode. Unparseable year/price fields also serialize as `null`; the host
/// rejects those rather than this layer validating them.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VehicleDraft {
    pub id: Option<i64>,
    pub make: String,
    pub model: String,
    pub year: Option<i32>,
    pub color: String,
    pub price: Option<f64>,
}

/// Errors crossing the host boundary in either direction.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Inbound roster payload could not be parsed; prior state is kept.
    #[error("malformed vehicle payload: {0}")]
    MalformedInput(serde_json::Error),
    /// Outbound intent payload could not be serialized.
    #[error("intent serialization failed: {0}")]
    Encode(serde_json::Error),
}
