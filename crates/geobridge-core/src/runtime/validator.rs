// crates/geobridge-core/src/runtime/validator.rs
// ============================================================================
// Module: Geobridge Constraint Evaluator
// Description: Admissibility checks for candidate parameter values.
// Purpose: Decide whether a value satisfies a domain constraint tree.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The evaluator is a pure function from a constraint and a candidate value
//! to an admissibility result. Violations are returned, never thrown, so the
//! builder can aggregate every violated parameter before reporting. An empty
//! allowed set in a type-set domain defers the check to the engine and
//! passes locally; composite domains are conjunctions, so a value must
//! satisfy every child.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::constraint::CodedValueEntry;
use crate::core::constraint::ConstraintKind;
use crate::core::constraint::DomainConstraint;
use crate::core::constraint::RangeBound;
use crate::core::value::DatasetRef;
use crate::core::value::FieldType;
use crate::core::value::GeometryType;
use crate::core::value::ParamValue;
use crate::core::value::ValueType;
use crate::core::value::WorkspaceType;

// ============================================================================
// SECTION: Constraint Violations
// ============================================================================

/// Rejection reason for a candidate value.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConstraintViolation {
    /// Range domain received a non-numeric value.
    #[error("range domain requires a numeric value, got {actual}")]
    NotNumeric {
        /// Type of the rejected value.
        actual: ValueType,
    },
    /// Value falls below the lower bound.
    #[error("value {actual} is below the minimum {bound}")]
    BelowMinimum {
        /// Rejected numeric value.
        actual: f64,
        /// Declared lower bound.
        bound: f64,
    },
    /// Value exceeds the upper bound.
    #[error("value {actual} is above the maximum {bound}")]
    AboveMaximum {
        /// Rejected numeric value.
        actual: f64,
        /// Declared upper bound.
        bound: f64,
    },
    /// Coded domain received a value that is not a code.
    #[error("coded domain requires a wire code, got {actual}")]
    NotCoded {
        /// Type of the rejected value.
        actual: ValueType,
    },
    /// Code does not match any entry in the coded set.
    #[error("code {code} is not a member of the coded value set")]
    UnknownCode {
        /// Rejected code text.
        code: String,
    },
    /// Field-type domain received a value with no declared field type.
    #[error("field type domain requires a dataset with a declared field type")]
    MissingFieldType,
    /// Declared field type is not admitted.
    #[error("field type {actual} is not admitted by the domain")]
    FieldTypeNotAllowed {
        /// Rejected field type.
        actual: FieldType,
    },
    /// File-type domain received a value with no file extension.
    #[error("file type domain requires a dataset path with an extension")]
    MissingFileExtension,
    /// File extension is not admitted.
    #[error("file extension {extension} is not admitted by the domain")]
    FileTypeNotAllowed {
        /// Rejected extension, lowercased.
        extension: String,
    },
    /// Geometry-type domain received a value with no declared geometry.
    #[error("geometry type domain requires a dataset with a declared geometry type")]
    MissingGeometryType,
    /// Declared geometry type is not admitted.
    #[error("geometry type {actual} is not admitted by the domain")]
    GeometryTypeNotAllowed {
        /// Rejected geometry type.
        actual: GeometryType,
    },
    /// Workspace-type domain received a value with no declared workspace kind.
    #[error("workspace type domain requires a dataset with a declared workspace type")]
    MissingWorkspaceType,
    /// Declared workspace kind is not admitted.
    #[error("workspace type {actual} is not admitted by the domain")]
    WorkspaceTypeNotAllowed {
        /// Rejected workspace kind.
        actual: WorkspaceType,
    },
}

impl ConstraintViolation {
    /// Returns the kind of the constraint that rejected the value.
    #[must_use]
    pub const fn constraint_kind(&self) -> ConstraintKind {
        match self {
            Self::NotNumeric {
                ..
            }
            | Self::BelowMinimum {
                ..
            }
            | Self::AboveMaximum {
                ..
            } => ConstraintKind::Range,
            Self::NotCoded {
                ..
            }
            | Self::UnknownCode {
                ..
            } => ConstraintKind::CodedValueSet,
            Self::MissingFieldType
            | Self::FieldTypeNotAllowed {
                ..
            } => ConstraintKind::FieldTypeSet,
            Self::MissingFileExtension
            | Self::FileTypeNotAllowed {
                ..
            } => ConstraintKind::FileTypeSet,
            Self::MissingGeometryType
            | Self::GeometryTypeNotAllowed {
                ..
            } => ConstraintKind::GeometryTypeSet,
            Self::MissingWorkspaceType
            | Self::WorkspaceTypeNotAllowed {
                ..
            } => ConstraintKind::WorkspaceTypeSet,
        }
    }
}

// ============================================================================
// SECTION: Constraint Evaluation
// ============================================================================

/// Evaluates a constraint tree against a candidate value.
///
/// Multivalue lists are checked element-wise: every element must satisfy the
/// constraint.
///
/// # Errors
///
/// Returns [`ConstraintViolation`] describing the first rejecting rule.
pub fn evaluate_constraint(
    constraint: &DomainConstraint,
    value: &ParamValue,
) -> Result<(), ConstraintViolation> {
    if let ParamValue::List(items) = value {
        for item in items {
            evaluate_constraint(constraint, item)?;
        }
        return Ok(());
    }

    match constraint {
        DomainConstraint::Range {
            min,
            max,
        } => evaluate_range(min.as_ref(), max.as_ref(), value),
        DomainConstraint::CodedValueSet {
            entries,
        } => evaluate_coded(entries, value),
        DomainConstraint::FieldTypeSet {
            allowed,
        } => evaluate_field_type(allowed, value),
        DomainConstraint::FileTypeSet {
            extensions,
        } => evaluate_file_type(extensions, value),
        DomainConstraint::GeometryTypeSet {
            allowed,
        } => evaluate_geometry_type(allowed, value),
        DomainConstraint::WorkspaceTypeSet {
            allowed,
        } => evaluate_workspace_type(allowed, value),
        DomainConstraint::Composite {
            children,
        } => {
            for child in children {
                evaluate_constraint(child, value)?;
            }
            Ok(())
        }
        DomainConstraint::Unconstrained => Ok(()),
    }
}

/// Collects every coded-value set reachable in a constraint tree.
#[must_use]
pub fn collect_coded_entries(constraint: &DomainConstraint) -> Vec<&[CodedValueEntry]> {
    let mut out = Vec::new();
    collect_coded_entries_inner(constraint, &mut out);
    out
}

/// Walks a constraint tree and appends coded-value sets.
fn collect_coded_entries_inner<'a>(
    constraint: &'a DomainConstraint,
    out: &mut Vec<&'a [CodedValueEntry]>,
) {
    match constraint {
        DomainConstraint::CodedValueSet {
            entries,
        } => out.push(entries),
        DomainConstraint::Composite {
            children,
        } => {
            for child in children {
                collect_coded_entries_inner(child, out);
            }
        }
        _ => {}
    }
}

// ============================================================================
// SECTION: Evaluation Helpers
// ============================================================================

/// Checks a numeric value against optional range bounds.
fn evaluate_range(
    min: Option<&RangeBound>,
    max: Option<&RangeBound>,
    value: &ParamValue,
) -> Result<(), ConstraintViolation> {
    let Some(actual) = value.as_numeric() else {
        return Err(ConstraintViolation::NotNumeric {
            actual: value.value_type(),
        });
    };

    if let Some(lower) = min {
        let below = if lower.exclusive { actual <= lower.value } else { actual < lower.value };
        if below {
            return Err(ConstraintViolation::BelowMinimum {
                actual,
                bound: lower.value,
            });
        }
    }
    if let Some(upper) = max {
        let above = if upper.exclusive { actual >= upper.value } else { actual > upper.value };
        if above {
            return Err(ConstraintViolation::AboveMaximum {
                actual,
                bound: upper.value,
            });
        }
    }
    Ok(())
}

/// Checks a code value against the coded set, case-sensitively.
fn evaluate_coded(
    entries: &[CodedValueEntry],
    value: &ParamValue,
) -> Result<(), ConstraintViolation> {
    let code = match value {
        ParamValue::Code(code) => code.as_str(),
        ParamValue::Text(text) => text.as_str(),
        other => {
            return Err(ConstraintViolation::NotCoded {
                actual: other.value_type(),
            });
        }
    };

    if entries.iter().any(|entry| entry.code.as_str() == code) {
        Ok(())
    } else {
        Err(ConstraintViolation::UnknownCode {
            code: code.to_string(),
        })
    }
}

/// Checks a dataset's declared field type against the allowed set.
fn evaluate_field_type(
    allowed: &[FieldType],
    value: &ParamValue,
) -> Result<(), ConstraintViolation> {
    if allowed.is_empty() {
        return Ok(());
    }
    let Some(field_type) = dataset_of(value).and_then(|dataset| dataset.field_type) else {
        return Err(ConstraintViolation::MissingFieldType);
    };
    if allowed.contains(&field_type) {
        Ok(())
    } else {
        Err(ConstraintViolation::FieldTypeNotAllowed {
            actual: field_type,
        })
    }
}

/// Checks a dataset path's extension against the allowed set.
fn evaluate_file_type(
    extensions: &[String],
    value: &ParamValue,
) -> Result<(), ConstraintViolation> {
    if extensions.is_empty() {
        return Ok(());
    }
    let Some(extension) = dataset_of(value).and_then(DatasetRef::extension) else {
        return Err(ConstraintViolation::MissingFileExtension);
    };
    if extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(&extension)) {
        Ok(())
    } else {
        Err(ConstraintViolation::FileTypeNotAllowed {
            extension,
        })
    }
}

/// Checks a dataset's declared geometry type against the allowed set.
fn evaluate_geometry_type(
    allowed: &[GeometryType],
    value: &ParamValue,
) -> Result<(), ConstraintViolation> {
    if allowed.is_empty() {
        return Ok(());
    }
    let Some(geometry) = dataset_of(value).and_then(|dataset| dataset.geometry_type) else {
        return Err(ConstraintViolation::MissingGeometryType);
    };
    if allowed.contains(&geometry) {
        Ok(())
    } else {
        Err(ConstraintViolation::GeometryTypeNotAllowed {
            actual: geometry,
        })
    }
}

/// Checks a dataset's declared workspace kind against the allowed set.
fn evaluate_workspace_type(
    allowed: &[WorkspaceType],
    value: &ParamValue,
) -> Result<(), ConstraintViolation> {
    if allowed.is_empty() {
        return Ok(());
    }
    let Some(workspace) = dataset_of(value).and_then(|dataset| dataset.workspace_type) else {
        return Err(ConstraintViolation::MissingWorkspaceType);
    };
    if allowed.contains(&workspace) {
        Ok(())
    } else {
        Err(ConstraintViolation::WorkspaceTypeNotAllowed {
            actual: workspace,
        })
    }
}

/// Returns the dataset reference carried by a value, if any.
const fn dataset_of(value: &ParamValue) -> Option<&DatasetRef> {
    match value {
        ParamValue::Dataset(dataset) => Some(dataset),
        _ => None,
    }
}
