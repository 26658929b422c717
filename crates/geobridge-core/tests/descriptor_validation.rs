// crates/geobridge-core/tests/descriptor_validation.rs
// ============================================================================
// Module: Descriptor Validation Tests
// Description: Load-time invariant checks for tool descriptors.
// ============================================================================
//! ## Overview
//! Validates qualifier shape, parameter uniqueness, derived-parameter rules,
//! and constraint tree structure.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap on deterministic fixtures.")]
#![allow(clippy::expect_used, reason = "Tests use expect for explicit failure messages.")]

use std::collections::BTreeSet;

use geobridge_core::CodedValueEntry;
use geobridge_core::ConstraintError;
use geobridge_core::DescriptorError;
use geobridge_core::DomainConstraint;
use geobridge_core::ParamValue;
use geobridge_core::ParameterDescriptor;
use geobridge_core::ParameterRequirement;
use geobridge_core::RangeBound;
use geobridge_core::ToolDescriptor;
use geobridge_core::ToolIdentity;
use geobridge_core::ValueType;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Minimal valid descriptor to mutate per test.
fn base_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        identity: ToolIdentity {
            display_name: "Clip".to_string(),
            execute_qualifier: "analysis.Clip".into(),
            toolbox_id: "analysis".into(),
        },
        parameters: vec![
            ParameterDescriptor::new("InFeatures", ParameterRequirement::Required, ValueType::Dataset),
            ParameterDescriptor::new("OutFeatures", ParameterRequirement::Required, ValueType::Dataset),
        ],
        recognized_environment: BTreeSet::new(),
    }
}

// ============================================================================
// SECTION: Identity Validation
// ============================================================================

#[test]
fn valid_descriptor_passes() {
    assert!(base_descriptor().validate().is_ok());
}

#[test]
fn qualifier_must_be_dotted() {
    for qualifier in ["Clip", ".Clip", "analysis.", ""] {
        let mut descriptor = base_descriptor();
        descriptor.identity.execute_qualifier = qualifier.into();
        let error = descriptor.validate().unwrap_err();
        assert!(matches!(error, DescriptorError::MalformedQualifier(_)));
    }
}

#[test]
fn qualifier_accessors_split_alias_and_name() {
    let descriptor = base_descriptor();
    assert_eq!(descriptor.identity.execute_qualifier.toolbox_alias(), Some("analysis"));
    assert_eq!(descriptor.identity.execute_qualifier.tool_name(), Some("Clip"));
}

// ============================================================================
// SECTION: Parameter Validation
// ============================================================================

#[test]
fn duplicate_parameter_names_are_rejected() {
    let mut descriptor = base_descriptor();
    descriptor.parameters.push(ParameterDescriptor::new(
        "InFeatures",
        ParameterRequirement::Optional,
        ValueType::Text,
    ));

    let error = descriptor.validate().unwrap_err();
    assert!(matches!(error, DescriptorError::DuplicateParameter(name) if name == "InFeatures"));
}

#[test]
fn derived_parameters_must_not_carry_defaults() {
    let mut descriptor = base_descriptor();
    descriptor.parameters.push(
        ParameterDescriptor::new("OutCount", ParameterRequirement::Derived, ValueType::Int)
            .with_default(ParamValue::Int(0)),
    );

    let error = descriptor.validate().unwrap_err();
    assert!(matches!(error, DescriptorError::DerivedDefault(name) if name == "OutCount"));
}

// ============================================================================
// SECTION: Constraint Structure
// ============================================================================

#[test]
fn inverted_ranges_are_rejected() {
    let mut descriptor = base_descriptor();
    descriptor.parameters.push(
        ParameterDescriptor::new("Tolerance", ParameterRequirement::Optional, ValueType::Float)
            .with_constraint(DomainConstraint::Range {
                min: Some(RangeBound::inclusive(10.0)),
                max: Some(RangeBound::inclusive(1.0)),
            }),
    );

    let error = descriptor.validate().unwrap_err();
    assert!(matches!(
        error,
        DescriptorError::InvalidConstraint {
            source: ConstraintError::InvertedRange { .. },
            ..
        }
    ));
}

#[test]
fn duplicate_codes_inside_composites_are_rejected() {
    let mut descriptor = base_descriptor();
    descriptor.parameters.push(
        ParameterDescriptor::new("Mode", ParameterRequirement::Optional, ValueType::Code)
            .with_constraint(DomainConstraint::Composite {
                children: vec![DomainConstraint::CodedValueSet {
                    entries: vec![CodedValueEntry::new("ALL"), CodedValueEntry::new("ALL")],
                }],
            }),
    );

    let error = descriptor.validate().unwrap_err();
    assert!(matches!(
        error,
        DescriptorError::InvalidConstraint {
            source: ConstraintError::DuplicateCode(_),
            ..
        }
    ));
}

#[test]
fn boundless_ranges_are_rejected() {
    let constraint = DomainConstraint::Range {
        min: None,
        max: None,
    };
    assert_eq!(constraint.validate().unwrap_err(), ConstraintError::EmptyRange);
}
