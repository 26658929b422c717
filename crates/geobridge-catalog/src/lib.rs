// crates/geobridge-catalog/src/lib.rs
// ============================================================================
// Module: Geobridge Catalog Library
// Description: Catalog ingestion for generated tool descriptors.
// Purpose: Parse, validate, and index the generated tool catalog.
// Dependencies: geobridge-core, serde, serde_json, thiserror, toml
// ============================================================================

//! ## Overview
//! The generated catalog is pure data: thousands of tool tables emitted by a
//! generation pipeline that walks the engine's toolboxes. This crate turns
//! those tables into validated, immutable core descriptors and indexes them
//! by execute qualifier. Every structural problem (malformed qualifiers,
//! duplicate parameters, degenerate domains) surfaces as a structured error
//! at load time.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod manifest;
pub mod registry;

// ============================================================================
// SECTION: Imports
// ============================================================================

use geobridge_core::DescriptorError;
use thiserror::Error;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use manifest::CatalogManifest;
pub use manifest::ParameterManifest;
pub use manifest::ToolManifest;
pub use registry::ToolCatalog;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Catalog loading and resolution errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Manifest file could not be read.
    #[error("failed to read catalog manifest {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Manifest text is not valid TOML.
    #[error("failed to parse catalog manifest: {0}")]
    ParseToml(#[from] toml::de::Error),
    /// Manifest text is not valid JSON.
    #[error("failed to parse catalog manifest: {0}")]
    ParseJson(#[from] serde_json::Error),
    /// Converted descriptor failed validation.
    #[error("invalid descriptor for {qualifier}: {source}")]
    InvalidDescriptor {
        /// Execute qualifier of the rejected tool.
        qualifier: String,
        /// Underlying descriptor error.
        source: DescriptorError,
    },
    /// Two tools share an execute qualifier.
    #[error("duplicate execute qualifier: {0}")]
    DuplicateQualifier(String),
    /// Requested qualifier is not cataloged.
    #[error("unknown execute qualifier: {0}")]
    UnknownQualifier(String),
}
