use super::*;

use crate::host::types::HostError;

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

fn tesla() -> Vehicle {
    Vehicle {
        id: 2,
        make: "Tesla".to_owned(),
        model: "Model 3".to_owned(),
        year: 2023,
        color: "White".to_owned(),
        price: 42990.0,
    }
}

fn civic() -> Vehicle {
    Vehicle {
        id: 3,
        make: "Honda".to_owned(),
        model: "Civic".to_owned(),
        year: 1999,
        color: "blue".to_owned(),
        price: 4500.5,
    }
}

// =============================================================
// Roster parsing and replacement
// =============================================================

#[test]
fn parses_the_host_roster_format() {
    let roster = InventoryState::parse_roster(
        r#"[{"id":1,"make":"Ford","model":"F150","year":2020,"color":"Red","price":35000}]"#,
    )
    .unwrap();
    assert_eq!(roster, vec![ford()]);
}

#[test]
fn parses_an_empty_roster() {
    assert_eq!(InventoryState::parse_roster("[]").unwrap(), vec![]);
}

#[test]
fn malformed_payload_is_rejected_and_prior_state_kept() {
    let mut inventory = InventoryState { vehicles: vec![ford()] };

    let result = InventoryState::parse_roster("{\"not\": \"an array\"}");
    assert!(matches!(result, Err(HostError::MalformedInput(_))));

    // Replacement only ever happens with a successfully parsed roster.
    if let Ok(roster) = InventoryState::parse_roster("not json at all") {
        inventory.replace(roster);
    }
    assert_eq!(inventory.vehicles, vec![ford()]);
}

#[test]
fn replace_is_wholesale_not_a_merge() {
    let mut inventory = InventoryState { vehicles: vec![ford()] };
    inventory.replace(vec![tesla(), civic()]);
    assert_eq!(inventory.vehicles, vec![tesla(), civic()]);
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn find_returns_the_matching_record() {
    let inventory = InventoryState { vehicles: vec![ford(), tesla()] };
    assert_eq!(inventory.find(2), Some(&tesla()));
}

#[test]
fn find_on_an_absent_id_is_none() {
    let inventory = InventoryState { vehicles: vec![ford()] };
    assert!(inventory.find(99).is_none());
}

// =============================================================
// Search filter
// =============================================================

#[test]
fn empty_query_yields_the_full_roster() {
    let inventory = InventoryState { vehicles: vec![ford(), tesla(), civic()] };
    assert_eq!(inventory.filtered(""), inventory.vehicles);
}

#[test]
fn matching_is_case_insensitive_across_text_fields() {
    let inventory = InventoryState { vehicles: vec![ford(), tesla(), civic()] };
    assert_eq!(inventory.filtered("ford"), vec![ford()]);
    assert_eq!(inventory.filtered("MODEL 3"), vec![tesla()]);
    assert_eq!(inventory.filtered("BLUE"), vec![civic()]);
}

#[test]
fn year_matches_as_decimal_text() {
    let inventory = InventoryState { vehicles: vec![ford(), tesla(), civic()] };
    assert_eq!(inventory.filtered("199"), vec![civic()]);
    assert_eq!(inventory.filtered("202"), vec![ford(), tesla()]);
}

#[test]
fn unmatched_query_yields_an_empty_list() {
    let inventory = InventoryState { vehicles: vec![ford(), tesla()] };
    assert!(inventory.filtered("zeppelin").is_empty());
}

#[test]
fn filtered_set_equals_the_matching_subset_for_any_query() {
    let inventory = InventoryState { vehicles: vec![ford(), tesla(), civic()] };
    for query in ["ford", "E", "202", "red", "model 3", "zzz", "19", "0"] {
        let needle = query.to_lowercase();
        let expected: Vec<Vehicle> = inventory
            .vehicles
            .iter()
            .filter(|v| {
                v.make.to_lowercase().contains(&needle)
                    || v.model.to_lowercase().contains(&needle)
                    || v.color.to_lowercase().contains(&needle)
                    || v.year.to_string().contains(&needle)
            })
            .cloned()
            .collect();
        assert_eq!(inventory.filtered(query), expected, "query {query:?}");
    }
}

#[test]
fn filtering_never_mutates_the_roster() {
    let inventory = InventoryState { vehicles: vec![ford(), tesla()] };
    let before = inventory.vehicles.clone();
    let _ = inventory.filtered("tesla");
    assert_eq!(inventory.vehicles, before);
}

// =============================================================
// Stats
// =============================================================

#[test]
fn stats_on_an_empty_roster_are_zero() {
    let stats = InventoryState::default().stats();
    assert_eq!(stats.count, 0);
    assert_eq!(stats.total_value, 0.0);
}

#[test]
fn stats_count_records_and_sum_prices_exactly() {
    let inventory = InventoryState { vehicles: vec![ford(), tesla(), civic()] };
    let stats = inventory.stats();
    assert_eq!(stats.count, 3);
    assert_eq!(stats.total_value, 35000.0 + 42990.0 + 4500.5);
}

#[test]
fn stats_come_from_the_unfiltered_roster() {
    let inventory = InventoryState { vehicles: vec![ford(), tesla()] };
    // An active search narrows the render set, never the aggregates.
    assert_eq!(inventory.filtered("tesla").len(), 1);
    assert_eq!(inventory.stats().count, 2);
}
