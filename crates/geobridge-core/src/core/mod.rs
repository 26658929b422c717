// crates/geobridge-core/src/core/mod.rs
// ============================================================================
// Module: Geobridge Core Types
// Description: Canonical descriptor, value, and request structures.
// Purpose: Provide stable, serializable types for the invocation framework.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Geobridge core types define tool descriptors, domain constraints, coded
//! values, environment overlays, and invocation requests. These types are
//! the canonical source of truth for any derived surface (catalog manifests,
//! dispatch adapters, or SDKs).

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod coded;
pub mod constraint;
pub mod environment;
pub mod hashing;
pub mod identifiers;
pub mod parameter;
pub mod request;
pub mod tool;
pub mod value;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use coded::CodedValueError;
pub use coded::CodedValueRegistry;
pub use constraint::CodedValueEntry;
pub use constraint::ConstraintError;
pub use constraint::ConstraintKind;
pub use constraint::DomainConstraint;
pub use constraint::RangeBound;
pub use environment::EnvironmentOverlay;
pub use environment::WELL_KNOWN_OPTION_NAMES;
pub use environment::is_well_known_option;
pub use hashing::ContentHash;
pub use hashing::HashError;
pub use identifiers::EnvOptionName;
pub use identifiers::ExecuteQualifier;
pub use identifiers::LocaleTag;
pub use identifiers::ParameterName;
pub use identifiers::ToolboxId;
pub use identifiers::WireCode;
pub use parameter::ParameterBindings;
pub use parameter::ParameterDescriptor;
pub use parameter::ParameterRequirement;
pub use request::ArgumentSlot;
pub use request::InvocationRequest;
pub use tool::DescriptorError;
pub use tool::ToolDescriptor;
pub use tool::ToolIdentity;
pub use value::DatasetRef;
pub use value::FieldType;
pub use value::GeometryType;
pub use value::ParamValue;
pub use value::ValueType;
pub use value::WorkspaceType;
