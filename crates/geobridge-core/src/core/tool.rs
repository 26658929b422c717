// crates/geobridge-core/src/core/tool.rs
// ============================================================================
// Module: Geobridge Tool Descriptors
// Description: Immutable identity and ordered parameter contract for one tool.
// Purpose: Define the per-operation wire contract with load-time validation.
// Dependencies: crate::core::{constraint, hashing, identifiers, parameter}, serde
// ============================================================================

//! ## Overview
//! A tool descriptor captures everything the client knows about one remote
//! operation: identity, the order-significant parameter list, and the fixed
//! set of environment options the tool recognizes. Descriptors are
//! constructed once at catalog load and never mutated; parameter order is
//! wire order, so reordering breaks compatibility with the engine. The
//! recognized environment set differs per tool and is declared explicitly;
//! it cannot be inferred from parameter types.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::constraint::ConstraintError;
use crate::core::constraint::DomainConstraint;
use crate::core::hashing::ContentHash;
use crate::core::hashing::HashError;
use crate::core::identifiers::EnvOptionName;
use crate::core::identifiers::ExecuteQualifier;
use crate::core::identifiers::ParameterName;
use crate::core::identifiers::ToolboxId;
use crate::core::parameter::ParameterDescriptor;

// ============================================================================
// SECTION: Tool Identity
// ============================================================================

/// Identity of one remote operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolIdentity {
    /// Human-facing display name.
    pub display_name: String,
    /// Dotted wire token identifying the operation.
    pub execute_qualifier: ExecuteQualifier,
    /// Owning toolbox identifier.
    pub toolbox_id: ToolboxId,
}

// ============================================================================
// SECTION: Tool Descriptors
// ============================================================================

/// Immutable per-tool wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Tool identity.
    pub identity: ToolIdentity,
    /// Parameter descriptors in wire order.
    pub parameters: Vec<ParameterDescriptor>,
    /// Environment option names this tool honors.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub recognized_environment: BTreeSet<EnvOptionName>,
}

impl ToolDescriptor {
    /// Returns the parameter descriptors in declaration (wire) order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    /// Returns the descriptor for a named parameter, if declared.
    #[must_use]
    pub fn parameter(&self, name: &ParameterName) -> Option<&ParameterDescriptor> {
        self.parameters.iter().find(|descriptor| &descriptor.name == name)
    }

    /// Returns the environment option names this tool recognizes.
    #[must_use]
    pub const fn recognized_environment_options(&self) -> &BTreeSet<EnvOptionName> {
        &self.recognized_environment
    }

    /// Computes the canonical content hash of the descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Canonicalization`] when serialization fails.
    pub fn canonical_hash(&self) -> Result<ContentHash, HashError> {
        ContentHash::of_canonical_json(self)
    }

    /// Validates the descriptor invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError`] when validation fails.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        ensure_qualifier_well_formed(&self.identity.execute_qualifier)?;
        ensure_unique_parameter_names(&self.parameters)?;
        ensure_derived_parameters_bare(&self.parameters)?;
        ensure_constraints_well_formed(&self.parameters)?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Tool descriptor validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum DescriptorError {
    /// Execute qualifier is not a dotted `<alias>.<name>` token.
    #[error("malformed execute qualifier: {0}")]
    MalformedQualifier(String),
    /// Duplicate parameter names detected.
    #[error("duplicate parameter name: {0}")]
    DuplicateParameter(String),
    /// Derived parameter declares a default value.
    #[error("derived parameter {0} must not declare a default")]
    DerivedDefault(String),
    /// Parameter constraint tree is structurally invalid.
    #[error("invalid constraint for parameter {parameter}: {source}")]
    InvalidConstraint {
        /// Parameter owning the constraint.
        parameter: String,
        /// Underlying structural error.
        source: ConstraintError,
    },
}

// ============================================================================
// SECTION: Validation Helpers
// ============================================================================

/// Ensures the qualifier splits into non-empty alias and name segments.
fn ensure_qualifier_well_formed(qualifier: &ExecuteQualifier) -> Result<(), DescriptorError> {
    if qualifier.toolbox_alias().is_none() {
        return Err(DescriptorError::MalformedQualifier(qualifier.to_string()));
    }
    Ok(())
}

/// Ensures parameter names are unique within the descriptor.
fn ensure_unique_parameter_names(parameters: &[ParameterDescriptor]) -> Result<(), DescriptorError> {
    for (index, parameter) in parameters.iter().enumerate() {
        if parameters.iter().skip(index + 1).any(|other| other.name == parameter.name) {
            return Err(DescriptorError::DuplicateParameter(parameter.name.to_string()));
        }
    }
    Ok(())
}

/// Ensures derived parameters carry no default value.
fn ensure_derived_parameters_bare(
    parameters: &[ParameterDescriptor],
) -> Result<(), DescriptorError> {
    for parameter in parameters {
        if parameter.is_derived() && parameter.default.is_some() {
            return Err(DescriptorError::DerivedDefault(parameter.name.to_string()));
        }
    }
    Ok(())
}

/// Ensures each declared constraint tree is structurally valid.
fn ensure_constraints_well_formed(
    parameters: &[ParameterDescriptor],
) -> Result<(), DescriptorError> {
    for parameter in parameters {
        if let Some(constraint) = &parameter.constraint {
            validate_constraint(&parameter.name, constraint)?;
        }
    }
    Ok(())
}

/// Validates one constraint tree, attributing errors to the parameter.
fn validate_constraint(
    name: &ParameterName,
    constraint: &DomainConstraint,
) -> Result<(), DescriptorError> {
    constraint.validate().map_err(|source| {
        DescriptorError::InvalidConstraint {
            parameter: name.to_string(),
            source,
        }
    })
}
