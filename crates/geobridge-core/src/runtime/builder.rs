// crates/geobridge-core/src/runtime/builder.rs
// ============================================================================
// Module: Geobridge Invocation Builder
// Description: Validation and assembly of dispatch-ready invocation requests.
// Purpose: Combine a descriptor, bound values, and an overlay into one request.
// Dependencies: crate::{core, runtime::validator}, serde, thiserror
// ============================================================================

//! ## Overview
//! The builder is the single place where a tool descriptor, caller bindings,
//! and an environment overlay meet. It classifies each parameter by
//! requirement, falls back to typed defaults, round-trips coded labels to
//! canonical wire codes, runs domain validation, and filters the overlay
//! down to the tool's recognized options. Violations are accumulated across
//! parameters so one build reports every problem at once. No I/O and no
//! engine access happens here; a successfully built request is locally
//! well-formed, nothing more.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::coded::resolve_code;
use crate::core::constraint::ConstraintKind;
use crate::core::environment::EnvironmentOverlay;
use crate::core::identifiers::ParameterName;
use crate::core::parameter::ParameterBindings;
use crate::core::parameter::ParameterDescriptor;
use crate::core::parameter::ParameterRequirement;
use crate::core::request::ArgumentSlot;
use crate::core::request::InvocationRequest;
use crate::core::tool::ToolDescriptor;
use crate::core::value::ParamValue;
use crate::core::value::ValueType;
use crate::runtime::validator::ConstraintViolation;
use crate::runtime::validator::collect_coded_entries;
use crate::runtime::validator::evaluate_constraint;

// ============================================================================
// SECTION: Invocation Builder
// ============================================================================

/// Assembles dispatch-ready requests for one tool descriptor.
#[derive(Debug, Clone, Copy)]
pub struct InvocationBuilder<'a> {
    /// Target tool contract.
    tool: &'a ToolDescriptor,
}

impl<'a> InvocationBuilder<'a> {
    /// Creates a builder for the given tool.
    #[must_use]
    pub const fn new(tool: &'a ToolDescriptor) -> Self {
        Self {
            tool,
        }
    }

    /// Returns the target tool descriptor.
    #[must_use]
    pub const fn tool(&self) -> &ToolDescriptor {
        self.tool
    }

    /// Validates bindings and assembles an invocation request.
    ///
    /// Arguments are emitted in declaration order with one slot per
    /// non-derived parameter; unset optionals keep their slot through the
    /// absent marker. The overlay is read-only during the build.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] carrying every violated parameter.
    pub fn build(
        &self,
        bindings: &ParameterBindings,
        overlay: &EnvironmentOverlay,
    ) -> Result<BuildResult, BuildError> {
        let mut violations = Vec::new();
        let mut ordered_arguments = Vec::new();
        let mut trace = Vec::new();

        for descriptor in self.tool.parameters() {
            if descriptor.is_derived() {
                trace.push(ResolutionTrace {
                    parameter: descriptor.name.clone(),
                    source: ResolutionSource::DerivedSkipped,
                });
                continue;
            }

            let (resolved, source) = resolve_binding(descriptor, bindings);
            match resolved {
                None => {
                    if descriptor.requirement == ParameterRequirement::Required {
                        violations.push(BuildViolation::MissingRequiredParameter {
                            name: descriptor.name.clone(),
                        });
                    }
                    ordered_arguments.push(ArgumentSlot::Absent);
                }
                Some(value) => {
                    let value = match canonicalize_coded(descriptor, value) {
                        Ok(value) => value,
                        Err(violation) => {
                            violations.push(violation);
                            ordered_arguments.push(ArgumentSlot::Absent);
                            trace.push(ResolutionTrace {
                                parameter: descriptor.name.clone(),
                                source,
                            });
                            continue;
                        }
                    };
                    check_value(descriptor, &value, &mut violations);
                    ordered_arguments.push(ArgumentSlot::Value(value));
                }
            }
            trace.push(ResolutionTrace {
                parameter: descriptor.name.clone(),
                source,
            });
        }

        if !violations.is_empty() {
            return Err(BuildError {
                violations,
            });
        }

        let environment = overlay.intersect(self.tool.recognized_environment_options());
        Ok(BuildResult {
            request: InvocationRequest {
                execute_qualifier: self.tool.identity.execute_qualifier.clone(),
                ordered_arguments,
                environment,
            },
            trace,
        })
    }
}

// ============================================================================
// SECTION: Build Results
// ============================================================================

/// Successful build output: the request plus its resolution trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildResult {
    /// Dispatch-ready invocation request.
    pub request: InvocationRequest,
    /// Per-parameter resolution audit records.
    pub trace: Vec<ResolutionTrace>,
}

/// Resolution audit record for one parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionTrace {
    /// Parameter the record describes.
    pub parameter: ParameterName,
    /// Where the argument value came from.
    pub source: ResolutionSource,
}

/// Source of a resolved argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// Caller-bound value.
    Bound,
    /// Descriptor default applied.
    Default,
    /// Unset optional; the slot carries the absent marker.
    Absent,
    /// Derived parameter skipped; no slot emitted.
    DerivedSkipped,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// One violated parameter recorded during a build.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BuildViolation {
    /// Required parameter has neither a bound value nor a default.
    #[error("missing required parameter: {name}")]
    MissingRequiredParameter {
        /// Unresolved parameter name.
        name: ParameterName,
    },
    /// Bound value fails the parameter's domain constraint.
    #[error("domain violation for {name} ({kind}): {violation}")]
    DomainViolation {
        /// Violating parameter name.
        name: ParameterName,
        /// Kind of the rejecting constraint.
        kind: ConstraintKind,
        /// Rejection detail.
        violation: ConstraintViolation,
    },
    /// Supplied text resolves to neither a code nor any locale's label.
    #[error("unknown coded value for {name}: {supplied}")]
    UnknownCodedValue {
        /// Coded parameter name.
        name: ParameterName,
        /// Text that failed to resolve.
        supplied: String,
    },
    /// Bound value's type disagrees with the declared value type.
    #[error("type mismatch for {name}: declared {declared}, got {actual}")]
    TypeMismatch {
        /// Mismatched parameter name.
        name: ParameterName,
        /// Declared value type.
        declared: ValueType,
        /// Supplied value type.
        actual: ValueType,
    },
}

/// Accumulated build failure carrying every violated parameter.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("invocation build failed with {} violation(s)", .violations.len())]
pub struct BuildError {
    /// Violations in parameter declaration order.
    pub violations: Vec<BuildViolation>,
}

// ============================================================================
// SECTION: Resolution Helpers
// ============================================================================

/// Resolves a parameter's value from bindings or the descriptor default.
fn resolve_binding(
    descriptor: &ParameterDescriptor,
    bindings: &ParameterBindings,
) -> (Option<ParamValue>, ResolutionSource) {
    if let Some(value) = bindings.get(&descriptor.name) {
        return (Some(value.clone()), ResolutionSource::Bound);
    }
    if let Some(default) = &descriptor.default {
        return (Some(default.clone()), ResolutionSource::Default);
    }
    (None, ResolutionSource::Absent)
}

/// Round-trips coded text to the canonical wire code.
///
/// Exact codes are kept, any locale's label is replaced with its code, and
/// unresolvable text is rejected. Values for parameters without a coded
/// domain pass through untouched.
fn canonicalize_coded(
    descriptor: &ParameterDescriptor,
    value: ParamValue,
) -> Result<ParamValue, BuildViolation> {
    let Some(constraint) = &descriptor.constraint else {
        return Ok(value);
    };
    let sets = collect_coded_entries(constraint);
    if sets.is_empty() {
        return Ok(value);
    }

    match value {
        ParamValue::Text(text) => {
            for entries in &sets {
                if let Some(code) = resolve_code(entries, &text) {
                    return Ok(ParamValue::Code(code.clone()));
                }
            }
            Err(BuildViolation::UnknownCodedValue {
                name: descriptor.name.clone(),
                supplied: text,
            })
        }
        ParamValue::List(items) => {
            let mut canonical = Vec::with_capacity(items.len());
            for item in items {
                canonical.push(canonicalize_coded(descriptor, item)?);
            }
            Ok(ParamValue::List(canonical))
        }
        other => Ok(other),
    }
}

/// Runs type-agreement and domain checks, recording violations.
fn check_value(
    descriptor: &ParameterDescriptor,
    value: &ParamValue,
    violations: &mut Vec<BuildViolation>,
) {
    let actual = value.value_type();
    if !types_agree(descriptor.value_type, actual) {
        violations.push(BuildViolation::TypeMismatch {
            name: descriptor.name.clone(),
            declared: descriptor.value_type,
            actual,
        });
        return;
    }

    if let Some(constraint) = &descriptor.constraint
        && let Err(violation) = evaluate_constraint(constraint, value)
    {
        violations.push(BuildViolation::DomainViolation {
            name: descriptor.name.clone(),
            kind: violation.constraint_kind(),
            violation,
        });
    }
}

/// Returns true when the supplied type satisfies the declared type.
///
/// Integers widen to float slots; every other pairing must match exactly.
fn types_agree(declared: ValueType, actual: ValueType) -> bool {
    declared == actual || matches!((declared, actual), (ValueType::Float, ValueType::Int))
}
