use super::*;

fn ford() -> Vehicle {
    Vehicle {
        id: 1,
        make: "Ford".to_owned(),
        model: "F150".to_owned(),
        year: 2020,
        color: "Red".to_owned(),
        price: 35000.0,
    }
}

// =============================================================
// Mode transitions
// =============================================================

#[test]
fn default_is_closed() {
    let modal = ModalState::default();
    assert_eq!(modal.mode, ModalMode::Closed);
    assert!(!modal.is_open());
    assert!(modal.editing_id().is_none());
}

#[test]
fn open_add_clears_fields_and_uses_the_add_title() {
    let mut modal = ModalState::default();
    modal.fields.make = "left over".to_owned();

    modal.open_add();
    assert_eq!(modal.mode, ModalMode::Add);
    assert!(modal.is_open());
    assert_eq!(modal.fields, VehicleForm::default());
    assert_eq!(modal.title(), "Add Vehicle");
}

#[test]
fn open_edit_populates_fields_from_the_record() {
    let mut modal = ModalState::default();
    modal.open_edit(&ford());

    assert_eq!(modal.mode, ModalMode::Edit(1));
    assert_eq!(modal.editing_id(), Some(1));
    assert_eq!(modal.title(), "Edit Vehicle");
    assert_eq!(modal.fields.make, "Ford");
    assert_eq!(modal.fields.model, "F150");
    assert_eq!(modal.fields.year, "2020");
    assert_eq!(modal.fields.color, "Red");
    assert_eq!(modal.fields.price, "35000");
}

#[test]
fn close_clears_the_editing_state() {
    let mut modal = ModalState::default();
    modal.open_edit(&ford());
    modal.close();

    assert_eq!(modal.mode, ModalMode::Closed);
    assert!(modal.editing_id().is_none());
}

#[test]
fn close_when_already_closed_is_a_no_op() {
    let mut modal = ModalState::default();
    modal.close();
    assert_eq!(modal.mode, ModalMode::Closed);
}

// =============================================================
// Draft assembly
// =============================================================

#[test]
fn add_draft_carries_no_id_and_parses_numerics() {
    let mut modal = ModalState::default();
    modal.open_add();
    modal.fields.make = "Tesla".to_owned();
    modal.fields.model = "Model 3".to_owned();
    modal.fields.year = "2023".to_owned();
    modal.fields.color = "White".to_owned();
    modal.fields.price = "42990.50".to_owned();

    let draft = modal.draft();
    assert_eq!(draft.id, None);
    assert_eq!(draft.make, "Tesla");
    assert_eq!(draft.year, Some(2023));
    assert_eq!(draft.price, Some(42990.5));
}

#[test]
fn edit_draft_round_trips_the_record_unchanged() {
    let vehicle = ford();
    let mut modal = ModalState::default();
    modal.open_edit(&vehicle);

    let draft = modal.draft();
    assert_eq!(draft.id, Some(vehicle.id));
    assert_eq!(draft.make, vehicle.make);
    assert_eq!(draft.model, vehicle.model);
    assert_eq!(draft.year, Some(vehicle.year));
    assert_eq!(draft.color, vehicle.color);
    assert_eq!(draft.price, Some(vehicle.price));
}

#[test]
fn blank_or_garbage_numerics_become_none() {
    let mut modal = ModalState::default();
    modal.open_add();
    modal.fields.year = String::new();
    modal.fields.price = "not a number".to_owned();

    let draft = modal.draft();
    assert_eq!(draft.year, None);
    assert_eq!(draft.price, None);
}

#[test]
fn numeric_fields_tolerate_surrounding_whitespace() {
    let mut modal = ModalState::default();
    modal.open_add();
    modal.fields.year = " 2020 ".to_owned();
    modal.fields.price = " 35000 ".to_owned();

    let draft = modal.draft();
    assert_eq!(draft.year, Some(2020));
    assert_eq!(draft.price, Some(35000.0));
}
