// crates/geobridge-core/src/core/request.rs
// ============================================================================
// Module: Geobridge Invocation Requests
// Description: Dispatch-ready representation of one validated tool call.
// Purpose: Carry the execute qualifier, positional arguments, and environment map.
// Dependencies: crate::core::{hashing, identifiers, value}, serde
// ============================================================================

//! ## Overview
//! An invocation request is the fully validated, ordered output of the
//! builder. It carries exactly one argument slot per non-derived parameter
//! in declaration order; unset optionals keep their slot through an explicit
//! absent marker because position is semantic on the wire. Requests are
//! created fresh per call, carry no state across calls, and are owned by the
//! call site until handed to the dispatch collaborator.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::hashing::ContentHash;
use crate::core::hashing::HashError;
use crate::core::identifiers::EnvOptionName;
use crate::core::identifiers::ExecuteQualifier;
use crate::core::value::ParamValue;

// ============================================================================
// SECTION: Argument Slots
// ============================================================================

/// One positional argument slot in an outbound request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ArgumentSlot {
    /// Resolved argument value.
    Value(ParamValue),
    /// Explicit marker for an unset optional parameter.
    Absent,
}

impl ArgumentSlot {
    /// Returns the resolved value, if the slot is bound.
    #[must_use]
    pub const fn value(&self) -> Option<&ParamValue> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Returns true when the slot carries the absent marker.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

// ============================================================================
// SECTION: Invocation Requests
// ============================================================================

/// Dispatch-ready representation of one tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationRequest {
    /// Dotted wire token identifying the operation.
    pub execute_qualifier: ExecuteQualifier,
    /// Positional arguments, one slot per non-derived parameter.
    pub ordered_arguments: Vec<ArgumentSlot>,
    /// Environment entries recognized by the target tool.
    pub environment: BTreeMap<EnvOptionName, ParamValue>,
}

impl InvocationRequest {
    /// Computes the canonical content hash for dispatch correlation.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Canonicalization`] when serialization fails.
    pub fn canonical_hash(&self) -> Result<ContentHash, HashError> {
        ContentHash::of_canonical_json(self)
    }
}
