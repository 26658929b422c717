// crates/geobridge-core/src/core/parameter.rs
// ============================================================================
// Module: Geobridge Parameter Descriptors
// Description: Per-parameter metadata and per-call bound value storage.
// Purpose: Classify parameters and hold caller bindings for one invocation.
// Dependencies: crate::core::{constraint, identifiers, value}, serde
// ============================================================================

//! ## Overview
//! A parameter descriptor declares one slot of a tool's wire contract: name,
//! requirement class, declared value type, optional domain constraint, and
//! optional typed default. Bindings are deliberately separate from
//! descriptors: descriptors are immutable catalog data shared across
//! threads, while a bindings instance is scoped to one logical call.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::constraint::DomainConstraint;
use crate::core::identifiers::ParameterName;
use crate::core::value::ParamValue;
use crate::core::value::ValueType;

// ============================================================================
// SECTION: Requirement Classes
// ============================================================================

/// Requirement classification for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterRequirement {
    /// Must resolve to a value before a request can build.
    Required,
    /// May be absent; an explicit absent marker keeps its slot.
    Optional,
    /// Output-only; populated by the engine, never supplied by the caller.
    Derived,
}

// ============================================================================
// SECTION: Parameter Descriptors
// ============================================================================

/// Declarative metadata for one tool parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Parameter name, unique within the owning tool.
    pub name: ParameterName,
    /// Requirement classification.
    pub requirement: ParameterRequirement,
    /// Declared value type.
    pub value_type: ValueType,
    /// Optional legal-value rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<DomainConstraint>,
    /// Optional typed default applied when the caller binds nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ParamValue>,
}

impl ParameterDescriptor {
    /// Creates a descriptor with no constraint and no default.
    #[must_use]
    pub fn new(
        name: impl Into<ParameterName>,
        requirement: ParameterRequirement,
        value_type: ValueType,
    ) -> Self {
        Self {
            name: name.into(),
            requirement,
            value_type,
            constraint: None,
            default: None,
        }
    }

    /// Attaches a domain constraint.
    #[must_use]
    pub fn with_constraint(mut self, constraint: DomainConstraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    /// Attaches a typed default value.
    #[must_use]
    pub fn with_default(mut self, default: ParamValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Returns true when the parameter is output-only.
    #[must_use]
    pub const fn is_derived(&self) -> bool {
        matches!(self.requirement, ParameterRequirement::Derived)
    }
}

// ============================================================================
// SECTION: Parameter Bindings
// ============================================================================

/// Bound parameter values for one logical call.
///
/// Bindings must not be shared across concurrent invocations; each caller
/// uses its own instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterBindings {
    /// Bound values keyed by parameter name.
    values: BTreeMap<ParameterName, ParamValue>,
}

impl ParameterBindings {
    /// Creates empty bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a value, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<ParameterName>, value: ParamValue) -> &mut Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Removes a binding.
    pub fn unset(&mut self, name: &ParameterName) -> Option<ParamValue> {
        self.values.remove(name)
    }

    /// Returns the bound value for a parameter, if any.
    #[must_use]
    pub fn get(&self, name: &ParameterName) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Returns true when no parameter is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of bound parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}
