#[cfg(test)]
#[path = "intent_test.rs"]
mod intent_test;

use crate::host::types::{HostError, VehicleDraft};

/// A user-initiated mutation request, relayed to the host for it to apply
/// against its store of record.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    Add(VehicleDraft),
    Update(VehicleDraft),
    Delete(i64),
}

impl Intent {
    /// Action tag the host switches on.
    pub fn action(&self) -> &'static str {
        match self {
            Intent::Add(_) => "addVehicle",
            Intent::Update(_) => "updateVehicle",
            Intent::Delete(_) => "deleteVehicle",
        }
    }

    /// Encode as the host signal string: `<action>:<payload>`.
    ///
    /// Draft payloads are JSON, URL-encoded so the delimiter and any field
    /// content survive the string channel. Deletes carry the bare decimal id.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Encode`] if the draft cannot be serialized.
    pub fn encode(&self) -> Result<String, HostError> {
        let payload = match self {
            Intent::Add(draft) | Intent::Update(draft) => {
                let json = serde_json::to_string(draft).map_err(HostError::Encode)?;
                urlencoding::encode(&json).into_owned()
            }
            Intent::Delete(id) => id.to_string(),
        };
        Ok(format!("{}:{payload}", self.action()))
    }
}
