// crates/geobridge-core/src/interfaces/mod.rs
// ============================================================================
// Module: Geobridge Interfaces
// Description: Backend-agnostic interfaces for catalogs and dispatch.
// Purpose: Define the contract surfaces between the framework and its collaborators.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how Geobridge integrates with the generated catalog and
//! the engine transport without embedding either. The framework's boundary
//! is the invocation request it emits and the descriptors it consumes; what
//! happens past the dispatcher seam (transport, authentication, engine-side
//! validation, cancellation) is the collaborator's domain. Dispatch may
//! block or complete asynchronously; nothing here assumes synchronous
//! completion.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::hashing::ContentHash;
use crate::core::identifiers::ExecuteQualifier;
use crate::core::request::InvocationRequest;
use crate::core::tool::ToolDescriptor;

// ============================================================================
// SECTION: Tool Source
// ============================================================================

/// Read-only source of tool descriptors, implemented by the catalog.
pub trait ToolSource {
    /// Resolves an execute qualifier to its descriptor, if cataloged.
    fn descriptor(&self, qualifier: &ExecuteQualifier) -> Option<&ToolDescriptor>;
}

// ============================================================================
// SECTION: Engine Dispatcher
// ============================================================================

/// Acknowledgement returned by the dispatch collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchTicket {
    /// Engine-assigned job identifier.
    pub job_id: String,
    /// Canonical hash of the dispatched request, for correlation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_hash: Option<ContentHash>,
}

/// Dispatch errors surfaced by the transport collaborator.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Dispatcher reported an error.
    #[error("dispatch error: {0}")]
    Failed(String),
}

/// Transport seam that carries a locally validated request to the engine.
pub trait EngineDispatcher {
    /// Dispatches a request to the engine.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the request cannot be delivered.
    fn dispatch(&self, request: &InvocationRequest) -> Result<DispatchTicket, DispatchError>;
}
