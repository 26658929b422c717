// crates/geobridge-core/src/runtime/mod.rs
// ============================================================================
// Module: Geobridge Runtime
// Description: Constraint evaluation and invocation assembly.
// Purpose: Turn descriptors and bindings into validated, dispatch-ready requests.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The runtime is pure and synchronous: the evaluator decides admissibility
//! of candidate values and the builder assembles invocation requests,
//! accumulating violations so callers see every problem in one pass. The
//! dispatch step that actually reaches the engine lives behind the
//! interfaces module and is out of scope here.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod builder;
pub mod validator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use builder::BuildError;
pub use builder::BuildResult;
pub use builder::BuildViolation;
pub use builder::InvocationBuilder;
pub use builder::ResolutionSource;
pub use builder::ResolutionTrace;
pub use validator::ConstraintViolation;
pub use validator::collect_coded_entries;
pub use validator::evaluate_constraint;
