// crates/geobridge-core/src/core/constraint.rs
// ============================================================================
// Module: Geobridge Domain Constraints
// Description: Declarative legal-value rules for tool parameters.
// Purpose: Define the recursive constraint union and its structural invariants.
// Dependencies: crate::core::{identifiers, value}, serde
// ============================================================================

//! ## Overview
//! A domain constraint describes which values are legal for one parameter.
//! Constraints form a closed tagged union; composite domains nest child
//! constraints into a tree evaluated as a conjunction. Structural invariants
//! (unique codes, ordered range bounds) are checked once at catalog load,
//! while admissibility of candidate values is decided by the runtime
//! evaluator.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::LocaleTag;
use crate::core::identifiers::WireCode;
use crate::core::value::FieldType;
use crate::core::value::GeometryType;
use crate::core::value::WorkspaceType;

// ============================================================================
// SECTION: Domain Constraints
// ============================================================================

/// Legal-value rule for one parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DomainConstraint {
    /// Numeric interval with optional, individually exclusive bounds.
    Range {
        /// Lower bound; open when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<RangeBound>,
        /// Upper bound; open when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<RangeBound>,
    },
    /// Closed set of enumerated wire codes with presentation labels.
    CodedValueSet {
        /// Coded entries; codes are unique within the set.
        entries: Vec<CodedValueEntry>,
    },
    /// Allowed field types; an empty set defers to the engine.
    FieldTypeSet {
        /// Field types admitted by the parameter.
        allowed: Vec<FieldType>,
    },
    /// Allowed file extensions; an empty set defers to the engine.
    FileTypeSet {
        /// Lowercase extensions without the leading dot.
        extensions: Vec<String>,
    },
    /// Allowed geometry types; an empty set defers to the engine.
    GeometryTypeSet {
        /// Geometry types admitted by the parameter.
        allowed: Vec<GeometryType>,
    },
    /// Allowed workspace kinds; an empty set defers to the engine.
    WorkspaceTypeSet {
        /// Workspace kinds admitted by the parameter.
        allowed: Vec<WorkspaceType>,
    },
    /// Conjunction of child constraints; all children must admit the value.
    Composite {
        /// Child constraints evaluated in order.
        children: Vec<DomainConstraint>,
    },
    /// No local rule; every value is admissible.
    Unconstrained,
}

impl DomainConstraint {
    /// Returns the constraint kind tag for reporting.
    #[must_use]
    pub const fn kind(&self) -> ConstraintKind {
        match self {
            Self::Range {
                ..
            } => ConstraintKind::Range,
            Self::CodedValueSet {
                ..
            } => ConstraintKind::CodedValueSet,
            Self::FieldTypeSet {
                ..
            } => ConstraintKind::FieldTypeSet,
            Self::FileTypeSet {
                ..
            } => ConstraintKind::FileTypeSet,
            Self::GeometryTypeSet {
                ..
            } => ConstraintKind::GeometryTypeSet,
            Self::WorkspaceTypeSet {
                ..
            } => ConstraintKind::WorkspaceTypeSet,
            Self::Composite {
                ..
            } => ConstraintKind::Composite,
            Self::Unconstrained => ConstraintKind::Unconstrained,
        }
    }

    /// Validates the structural invariants of this constraint tree.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] when a range is degenerate or a coded set
    /// repeats a code.
    pub fn validate(&self) -> Result<(), ConstraintError> {
        match self {
            Self::Range {
                min,
                max,
            } => validate_range(min.as_ref(), max.as_ref()),
            Self::CodedValueSet {
                entries,
            } => validate_coded_entries(entries),
            Self::Composite {
                children,
            } => {
                for child in children {
                    child.validate()?;
                }
                Ok(())
            }
            Self::FieldTypeSet {
                ..
            }
            | Self::FileTypeSet {
                ..
            }
            | Self::GeometryTypeSet {
                ..
            }
            | Self::WorkspaceTypeSet {
                ..
            }
            | Self::Unconstrained => Ok(()),
        }
    }
}

// ============================================================================
// SECTION: Range Bounds
// ============================================================================

/// One endpoint of a numeric range domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBound {
    /// Boundary value.
    pub value: f64,
    /// Marks the bound exclusive instead of inclusive.
    #[serde(default)]
    pub exclusive: bool,
}

impl RangeBound {
    /// Creates an inclusive bound.
    #[must_use]
    pub const fn inclusive(value: f64) -> Self {
        Self {
            value,
            exclusive: false,
        }
    }

    /// Creates an exclusive bound.
    #[must_use]
    pub const fn exclusive(value: f64) -> Self {
        Self {
            value,
            exclusive: true,
        }
    }
}

// ============================================================================
// SECTION: Coded Value Entries
// ============================================================================

/// One enumerated value: a wire code plus its presentation labels.
///
/// Labels never participate in validation or dispatch; only the code is sent
/// over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodedValueEntry {
    /// Canonical wire code.
    pub code: WireCode,
    /// Presentation labels keyed by locale.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<LocaleTag, String>,
}

impl CodedValueEntry {
    /// Creates an entry with no labels.
    #[must_use]
    pub fn new(code: impl Into<WireCode>) -> Self {
        Self {
            code: code.into(),
            labels: BTreeMap::new(),
        }
    }

    /// Adds a presentation label for a locale.
    #[must_use]
    pub fn with_label(mut self, locale: impl Into<LocaleTag>, label: impl Into<String>) -> Self {
        self.labels.insert(locale.into(), label.into());
        self
    }
}

// ============================================================================
// SECTION: Constraint Kinds
// ============================================================================

/// Constraint variant tag carried in violation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    /// Numeric range domain.
    Range,
    /// Enumerated coded-value domain.
    CodedValueSet,
    /// Field type restriction.
    FieldTypeSet,
    /// File extension restriction.
    FileTypeSet,
    /// Geometry type restriction.
    GeometryTypeSet,
    /// Workspace kind restriction.
    WorkspaceTypeSet,
    /// Conjunction of child constraints.
    Composite,
    /// No local rule.
    Unconstrained,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Range => "range",
            Self::CodedValueSet => "coded_value_set",
            Self::FieldTypeSet => "field_type_set",
            Self::FileTypeSet => "file_type_set",
            Self::GeometryTypeSet => "geometry_type_set",
            Self::WorkspaceTypeSet => "workspace_type_set",
            Self::Composite => "composite",
            Self::Unconstrained => "unconstrained",
        };
        f.write_str(name)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Structural constraint errors detected at catalog load.
#[derive(Debug, Error, PartialEq)]
pub enum ConstraintError {
    /// Range declares neither a lower nor an upper bound.
    #[error("range constraint declares no bounds")]
    EmptyRange,
    /// Range bounds are inverted.
    #[error("range minimum {min} exceeds maximum {max}")]
    InvertedRange {
        /// Declared lower bound value.
        min: f64,
        /// Declared upper bound value.
        max: f64,
    },
    /// Range bound is not a finite number.
    #[error("range bound is not finite")]
    NonFiniteBound,
    /// Coded set repeats a code.
    #[error("duplicate coded value: {0}")]
    DuplicateCode(String),
    /// Coded set has no entries.
    #[error("coded value set is empty")]
    EmptyCodedSet,
}

// ============================================================================
// SECTION: Validation Helpers
// ============================================================================

/// Validates range bound ordering and finiteness.
fn validate_range(min: Option<&RangeBound>, max: Option<&RangeBound>) -> Result<(), ConstraintError> {
    if min.is_none() && max.is_none() {
        return Err(ConstraintError::EmptyRange);
    }
    for bound in [min, max].into_iter().flatten() {
        if !bound.value.is_finite() {
            return Err(ConstraintError::NonFiniteBound);
        }
    }
    if let (Some(lower), Some(upper)) = (min, max)
        && lower.value > upper.value
    {
        return Err(ConstraintError::InvertedRange {
            min: lower.value,
            max: upper.value,
        });
    }
    Ok(())
}

/// Validates that coded entries are non-empty and carry unique codes.
fn validate_coded_entries(entries: &[CodedValueEntry]) -> Result<(), ConstraintError> {
    if entries.is_empty() {
        return Err(ConstraintError::EmptyCodedSet);
    }
    for (index, entry) in entries.iter().enumerate() {
        if entries.iter().skip(index + 1).any(|other| other.code == entry.code) {
            return Err(ConstraintError::DuplicateCode(entry.code.to_string()));
        }
    }
    Ok(())
}
