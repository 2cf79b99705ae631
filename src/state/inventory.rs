#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use crate::host::types::{HostError, Vehicle};

/// The displayed vehicle roster. Created empty at mount and replaced
/// wholesale on every host push; the host's store is the source of truth
/// and nothing here is merged incrementally or persisted.
#[derive(Clone, Debug, Default)]
pub struct InventoryState {
    pub vehicles: Vec<Vehicle>,
}

/// Aggregates over the full unfiltered roster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InventoryStats {
    pub count: usize,
    pub total_value: f64,
}

impl InventoryState {
    /// Parse a serialized roster without touching any state.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::MalformedInput`] if the payload is not a JSON
    /// array of vehicle records.
    pub fn parse_roster(json: &str) -> Result<Vec<Vehicle>, HostError> {
        serde_json::from_str(json).map_err(HostError::MalformedInput)
    }

    /// Replace the roster wholesale. One signal write covers both the grid
    /// and the stats, so they always refresh together.
    pub fn replace(&mut self, roster: Vec<Vehicle>) {
        self.vehicles = roster;
    }

    pub fn find(&self, id: i64) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// The records to render for a search query: a case-insensitive
    /// substring match against make, model, color, and the decimal form of
    /// year. An empty query yields the full roster. Never mutates the
    /// roster itself.
    pub fn filtered(&self, query: &str) -> Vec<Vehicle> {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return self.vehicles.clone();
        }

        self.vehicles
            .iter()
            .filter(|v| {
                v.make.to_lowercase().contains(&needle)
                    || v.model.to_lowercase().contains(&needle)
                    || v.color.to_lowercase().contains(&needle)
                    || v.year.to_string().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Record count and exact price sum over the unfiltered roster,
    /// independent of any active search.
    pub fn stats(&self) -> InventoryStats {
        InventoryStats {
            count: self.vehicles.len(),
            total_value: self.vehicles.iter().map(|v| v.price).sum(),
        }
    }
}
