#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::host::types::{Vehicle, VehicleDraft};

/// Which form the add/edit dialog is showing, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalMode {
    #[default]
    Closed,
    Add,
    Edit(i64),
}

/// Raw string values of the five form inputs. Numeric fields stay strings
/// until submit; parsing is part of draft assembly, not data entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VehicleForm {
    pub make: String,
    pub model: String,
    pub year: String,
    pub color: String,
    pub price: String,
}

/// State machine for the add/edit dialog.
#[derive(Clone, Debug, Default)]
pub struct ModalState {
    pub mode: ModalMode,
    pub fields: VehicleForm,
}

impl ModalState {
    /// Open in add mode with a cleared form.
    pub fn open_add(&mut self) {
        self.mode = ModalMode::Add;
        self.fields = VehicleForm::default();
    }

    /// Open in edit mode, populating the form from an existing record.
    /// Callers resolve the record first; an id absent from the roster never
    /// reaches here.
    pub fn open_edit(&mut self, vehicle: &Vehicle) {
        self.mode = ModalMode::Edit(vehicle.id);
        self.fields = VehicleForm {
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year.to_string(),
            color: vehicle.color.clone(),
            price: vehicle.price.to_string(),
        };
    }

    /// Close from any mode, clearing the editing id.
    pub fn close(&mut self) {
        self.mode = ModalMode::Closed;
    }

    pub fn is_open(&self) -> bool {
        self.mode != ModalMode::Closed
    }

    pub fn editing_id(&self) -> Option<i64> {
        match self.mode {
            ModalMode::Edit(id) => Some(id),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            ModalMode::Edit(_) => "Edit Vehicle",
            _ => "Add Vehicle",
        }
    }

    /// Assemble the outbound candidate record from the current field
    /// values. Year and price that fail to parse become `None`, which
    /// serializes as `null` for the host to reject.
    pub fn draft(&self) -> VehicleDraft {
        VehicleDraft {
            id: self.editing_id(),
            make: self.fields.make.clone(),
            model: self.fields.model.clone(),
            year: self.fields.year.trim().parse().ok(),
            color: self.fields.color.clone(),
            price: self.fields.price.trim().parse().ok(),
        }
    }
}
