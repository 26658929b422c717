// crates/geobridge-core/src/lib.rs
// ============================================================================
// Module: Geobridge Core Library
// Description: Public API surface for the Geobridge core.
// Purpose: Expose core types, interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Geobridge core provides the declarative parameter/domain metadata
//! framework and invocation assembly for a remote geoprocessing engine.
//! Tool descriptors are immutable catalog data; the builder validates
//! bindings against their domains and emits dispatch-ready requests through
//! explicit interfaces rather than embedding any transport.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::*;

pub use interfaces::DispatchError;
pub use interfaces::DispatchTicket;
pub use interfaces::EngineDispatcher;
pub use interfaces::ToolSource;
pub use runtime::BuildError;
pub use runtime::BuildResult;
pub use runtime::BuildViolation;
pub use runtime::ConstraintViolation;
pub use runtime::InvocationBuilder;
pub use runtime::ResolutionSource;
pub use runtime::ResolutionTrace;
pub use runtime::collect_coded_entries;
pub use runtime::evaluate_constraint;
