// crates/geobridge-core/tests/constraint_eval.rs
// ============================================================================
// Module: Constraint Evaluator Tests
// Description: Admissibility tests for domain constraint trees.
// ============================================================================
//! ## Overview
//! Validates range bounds, type-set membership, coded sets, and composite
//! conjunction semantics.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap on deterministic fixtures.")]
#![allow(clippy::expect_used, reason = "Tests use expect for explicit failure messages.")]

use geobridge_core::CodedValueEntry;
use geobridge_core::ConstraintKind;
use geobridge_core::ConstraintViolation;
use geobridge_core::DatasetRef;
use geobridge_core::DomainConstraint;
use geobridge_core::FieldType;
use geobridge_core::GeometryType;
use geobridge_core::ParamValue;
use geobridge_core::RangeBound;
use geobridge_core::evaluate_constraint;

// ============================================================================
// SECTION: Range Domains
// ============================================================================

#[test]
fn range_admits_inclusive_bounds() {
    let constraint = DomainConstraint::Range {
        min: Some(RangeBound::inclusive(0.0)),
        max: Some(RangeBound::inclusive(100.0)),
    };

    assert!(evaluate_constraint(&constraint, &ParamValue::Int(0)).is_ok());
    assert!(evaluate_constraint(&constraint, &ParamValue::Int(100)).is_ok());
    assert!(evaluate_constraint(&constraint, &ParamValue::Float(50.5)).is_ok());
}

#[test]
fn range_rejects_exclusive_bounds() {
    let constraint = DomainConstraint::Range {
        min: Some(RangeBound::exclusive(0.0)),
        max: Some(RangeBound::exclusive(1.0)),
    };

    assert!(evaluate_constraint(&constraint, &ParamValue::Float(0.5)).is_ok());
    let below = evaluate_constraint(&constraint, &ParamValue::Float(0.0)).unwrap_err();
    assert!(matches!(below, ConstraintViolation::BelowMinimum { .. }));
    let above = evaluate_constraint(&constraint, &ParamValue::Float(1.0)).unwrap_err();
    assert!(matches!(above, ConstraintViolation::AboveMaximum { .. }));
}

#[test]
fn range_rejects_non_numeric_values() {
    let constraint = DomainConstraint::Range {
        min: Some(RangeBound::inclusive(0.0)),
        max: None,
    };

    let violation =
        evaluate_constraint(&constraint, &ParamValue::Text("ten".to_string())).unwrap_err();
    assert!(matches!(violation, ConstraintViolation::NotNumeric { .. }));
    assert_eq!(violation.constraint_kind(), ConstraintKind::Range);
}

#[test]
fn open_bounds_admit_any_magnitude() {
    let constraint = DomainConstraint::Range {
        min: Some(RangeBound::inclusive(0.0)),
        max: None,
    };

    assert!(evaluate_constraint(&constraint, &ParamValue::Float(1.0e12)).is_ok());
}

// ============================================================================
// SECTION: Coded Domains
// ============================================================================

#[test]
fn coded_set_matches_codes_case_sensitively() {
    let constraint = DomainConstraint::CodedValueSet {
        entries: vec![CodedValueEntry::new("PERIMETER_ONLY"), CodedValueEntry::new("ALL")],
    };

    assert!(evaluate_constraint(&constraint, &ParamValue::Code("ALL".into())).is_ok());
    let violation =
        evaluate_constraint(&constraint, &ParamValue::Code("all".into())).unwrap_err();
    assert!(matches!(violation, ConstraintViolation::UnknownCode { .. }));
    assert_eq!(violation.constraint_kind(), ConstraintKind::CodedValueSet);
}

#[test]
fn coded_set_rejects_non_code_values() {
    let constraint = DomainConstraint::CodedValueSet {
        entries: vec![CodedValueEntry::new("CURRENT")],
    };

    let violation = evaluate_constraint(&constraint, &ParamValue::Int(1)).unwrap_err();
    assert!(matches!(violation, ConstraintViolation::NotCoded { .. }));
}

// ============================================================================
// SECTION: Type-Set Domains
// ============================================================================

#[test]
fn field_type_set_checks_declared_tag() {
    let constraint = DomainConstraint::FieldTypeSet {
        allowed: vec![FieldType::Integer, FieldType::Double],
    };

    let mut dataset = DatasetRef::new("parcels.gdb/owners");
    dataset.field_type = Some(FieldType::Double);
    assert!(evaluate_constraint(&constraint, &ParamValue::Dataset(dataset.clone())).is_ok());

    dataset.field_type = Some(FieldType::Text);
    let violation =
        evaluate_constraint(&constraint, &ParamValue::Dataset(dataset)).unwrap_err();
    assert!(matches!(violation, ConstraintViolation::FieldTypeNotAllowed { .. }));
}

#[test]
fn empty_allowed_set_defers_to_the_engine() {
    let constraint = DomainConstraint::GeometryTypeSet {
        allowed: vec![],
    };

    // No declared geometry tag, no local check.
    let dataset = DatasetRef::new("roads.shp");
    assert!(evaluate_constraint(&constraint, &ParamValue::Dataset(dataset)).is_ok());
}

#[test]
fn file_type_set_compares_extensions_case_insensitively() {
    let constraint = DomainConstraint::FileTypeSet {
        extensions: vec!["tin".to_string(), "shp".to_string()],
    };

    let upper = DatasetRef::new("C:/data/SITE.TIN");
    assert!(evaluate_constraint(&constraint, &ParamValue::Dataset(upper)).is_ok());

    let wrong = DatasetRef::new("C:/data/site.lyr");
    let violation = evaluate_constraint(&constraint, &ParamValue::Dataset(wrong)).unwrap_err();
    assert!(matches!(violation, ConstraintViolation::FileTypeNotAllowed { .. }));

    let bare = DatasetRef::new("C:/data/site");
    let violation = evaluate_constraint(&constraint, &ParamValue::Dataset(bare)).unwrap_err();
    assert!(matches!(violation, ConstraintViolation::MissingFileExtension));
}

// ============================================================================
// SECTION: Composite Domains
// ============================================================================

#[test]
fn composite_requires_every_child() {
    let constraint = DomainConstraint::Composite {
        children: vec![
            DomainConstraint::FileTypeSet {
                extensions: vec!["shp".to_string()],
            },
            DomainConstraint::GeometryTypeSet {
                allowed: vec![GeometryType::Polygon],
            },
        ],
    };

    let mut dataset = DatasetRef::new("parcels.shp");
    dataset.geometry_type = Some(GeometryType::Polygon);
    assert!(evaluate_constraint(&constraint, &ParamValue::Dataset(dataset.clone())).is_ok());

    // Fails exactly one of the two children.
    dataset.geometry_type = Some(GeometryType::Polyline);
    let violation =
        evaluate_constraint(&constraint, &ParamValue::Dataset(dataset)).unwrap_err();
    assert!(matches!(violation, ConstraintViolation::GeometryTypeNotAllowed { .. }));
    assert_eq!(violation.constraint_kind(), ConstraintKind::GeometryTypeSet);
}

#[test]
fn empty_composite_is_vacuously_satisfied() {
    let constraint = DomainConstraint::Composite {
        children: vec![],
    };

    assert!(evaluate_constraint(&constraint, &ParamValue::Int(7)).is_ok());
}

#[test]
fn unconstrained_admits_everything() {
    assert!(evaluate_constraint(&DomainConstraint::Unconstrained, &ParamValue::Bool(false)).is_ok());
}

// ============================================================================
// SECTION: Multivalue Lists
// ============================================================================

#[test]
fn lists_are_checked_element_wise() {
    let constraint = DomainConstraint::Range {
        min: Some(RangeBound::inclusive(1.0)),
        max: Some(RangeBound::inclusive(10.0)),
    };

    let good = ParamValue::List(vec![ParamValue::Int(1), ParamValue::Int(10)]);
    assert!(evaluate_constraint(&constraint, &good).is_ok());

    let bad = ParamValue::List(vec![ParamValue::Int(1), ParamValue::Int(11)]);
    assert!(evaluate_constraint(&constraint, &bad).is_err());
}
