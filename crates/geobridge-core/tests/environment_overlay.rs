// crates/geobridge-core/tests/environment_overlay.rs
// ============================================================================
// Module: Environment Overlay Tests
// Description: Ambient option storage and per-tool intersection.
// ============================================================================
//! ## Overview
//! Validates overlay mutation between invocations and the membership-only
//! intersection rule.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap on deterministic fixtures.")]

use std::collections::BTreeSet;

use geobridge_core::EnvOptionName;
use geobridge_core::EnvironmentOverlay;
use geobridge_core::ParamValue;
use geobridge_core::is_well_known_option;

// ============================================================================
// SECTION: Intersection
// ============================================================================

#[test]
fn intersect_keeps_only_recognized_entries() {
    let mut overlay = EnvironmentOverlay::new();
    overlay.set("A", ParamValue::Int(1));
    overlay.set("B", ParamValue::Int(2));
    overlay.set("C", ParamValue::Int(3));

    let recognized: BTreeSet<EnvOptionName> =
        ["A", "C"].into_iter().map(Into::into).collect();
    let filtered = overlay.intersect(&recognized);

    let keys: Vec<&str> = filtered.keys().map(EnvOptionName::as_str).collect();
    assert_eq!(keys, vec!["A", "C"]);
    assert_eq!(filtered.get(&EnvOptionName::new("A")), Some(&ParamValue::Int(1)));
    assert_eq!(filtered.get(&EnvOptionName::new("C")), Some(&ParamValue::Int(3)));
}

#[test]
fn intersect_with_no_recognized_names_is_empty() {
    let mut overlay = EnvironmentOverlay::new();
    overlay.set("extent", ParamValue::Text("0 0 10 10".to_string()));

    assert!(overlay.intersect(&BTreeSet::new()).is_empty());
}

#[test]
fn intersection_does_not_consume_the_overlay() {
    let mut overlay = EnvironmentOverlay::new();
    overlay.set("workspace", ParamValue::Text("C:/work".to_string()));

    let recognized: BTreeSet<EnvOptionName> =
        ["workspace"].into_iter().map(Into::into).collect();
    let first = overlay.intersect(&recognized);
    let second = overlay.intersect(&recognized);

    assert_eq!(first, second);
    assert_eq!(overlay.len(), 1);
}

// ============================================================================
// SECTION: Mutation Between Invocations
// ============================================================================

#[test]
fn overlay_values_can_be_replaced_and_removed() {
    let mut overlay = EnvironmentOverlay::new();
    overlay.set("cellSize", ParamValue::Float(30.0));
    overlay.set("cellSize", ParamValue::Float(10.0));

    let name: EnvOptionName = "cellSize".into();
    assert_eq!(overlay.get(&name), Some(&ParamValue::Float(10.0)));

    assert_eq!(overlay.unset(&name), Some(ParamValue::Float(10.0)));
    assert!(overlay.is_empty());
}

// ============================================================================
// SECTION: Vocabulary
// ============================================================================

#[test]
fn well_known_names_are_recognized() {
    assert!(is_well_known_option(&"scratchWorkspace".into()));
    assert!(is_well_known_option(&"parallelProcessingFactor".into()));
    assert!(!is_well_known_option(&"notAnOption".into()));
}
