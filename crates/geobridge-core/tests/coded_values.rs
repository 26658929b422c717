// crates/geobridge-core/tests/coded_values.rs
// ============================================================================
// Module: Coded Value Registry Tests
// Description: Label and code resolution across locales.
// ============================================================================
//! ## Overview
//! Validates bidirectional code/label resolution, locale sensitivity, and
//! duplicate-code rejection.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap on deterministic fixtures.")]
#![allow(clippy::expect_used, reason = "Tests use expect for explicit failure messages.")]

use geobridge_core::CodedValueEntry;
use geobridge_core::CodedValueError;
use geobridge_core::CodedValueRegistry;
use geobridge_core::LocaleTag;
use geobridge_core::WireCode;
use geobridge_core::core::coded::resolve_code;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Registry with parallel English and Chinese labels for identical codes.
fn version_registry() -> CodedValueRegistry {
    CodedValueRegistry::from_entries(vec![
        CodedValueEntry::new("PRE_10.0")
            .with_label("en", "Pre 10.0 TIN")
            .with_label("zh-CN", "10.0 之前的 TIN"),
        CodedValueEntry::new("CURRENT")
            .with_label("en", "Current TIN")
            .with_label("zh-CN", "当前 TIN"),
    ])
    .unwrap()
}

// ============================================================================
// SECTION: Round Trips
// ============================================================================

#[test]
fn label_round_trips_to_the_canonical_code_per_locale() {
    let registry = version_registry();

    for locale in ["en", "zh-CN"] {
        let locale = LocaleTag::new(locale);
        for code in ["PRE_10.0", "CURRENT"] {
            let code = WireCode::new(code);
            let label = registry.label_for(&code, &locale).unwrap();
            assert_eq!(registry.code_for(label).unwrap(), &code);
        }
    }
}

#[test]
fn code_for_accepts_any_locale_label() {
    let registry = version_registry();

    assert_eq!(registry.code_for("Current TIN").unwrap(), &WireCode::new("CURRENT"));
    assert_eq!(registry.code_for("当前 TIN").unwrap(), &WireCode::new("CURRENT"));
}

#[test]
fn label_for_is_locale_sensitive() {
    let registry = version_registry();

    let code = WireCode::new("CURRENT");
    assert_eq!(registry.label_for(&code, &LocaleTag::new("en")).unwrap(), "Current TIN");
    assert_eq!(registry.label_for(&code, &LocaleTag::new("zh-CN")).unwrap(), "当前 TIN");

    let missing = registry.label_for(&code, &LocaleTag::new("fr")).unwrap_err();
    assert!(matches!(missing, CodedValueError::MissingLocale { .. }));
}

// ============================================================================
// SECTION: Resolution Failures
// ============================================================================

#[test]
fn unknown_label_and_code_are_distinct_errors() {
    let registry = version_registry();

    let label = registry.code_for("bogus").unwrap_err();
    assert!(matches!(label, CodedValueError::UnknownLabel(_)));

    let code = registry.label_for(&WireCode::new("bogus"), &LocaleTag::new("en")).unwrap_err();
    assert!(matches!(code, CodedValueError::UnknownCode(_)));
}

#[test]
fn codes_are_not_resolved_as_labels() {
    let registry = version_registry();

    // `code_for` resolves labels only; the code itself is not a label.
    assert!(registry.code_for("CURRENT").is_err());
}

#[test]
fn duplicate_codes_are_rejected_at_construction() {
    let error = CodedValueRegistry::from_entries(vec![
        CodedValueEntry::new("CURRENT"),
        CodedValueEntry::new("CURRENT"),
    ])
    .unwrap_err();

    assert!(matches!(error, CodedValueError::DuplicateCode(_)));
}

// ============================================================================
// SECTION: Combined Resolution
// ============================================================================

#[test]
fn resolve_code_prefers_exact_codes_over_labels() {
    let entries = vec![
        CodedValueEntry::new("CURRENT").with_label("en", "Current TIN"),
        // A label that collides with another entry's code text.
        CodedValueEntry::new("LEGACY").with_label("en", "CURRENT"),
    ];

    assert_eq!(resolve_code(&entries, "CURRENT").unwrap(), &WireCode::new("CURRENT"));
    assert_eq!(resolve_code(&entries, "Current TIN").unwrap(), &WireCode::new("CURRENT"));
    assert!(resolve_code(&entries, "nonsense").is_none());
}
