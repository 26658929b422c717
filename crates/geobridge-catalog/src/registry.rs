// crates/geobridge-catalog/src/registry.rs
// ============================================================================
// Module: Geobridge Tool Catalog
// Description: Qualifier-keyed registry of validated tool descriptors.
// Purpose: Load manifests and resolve execute qualifiers to descriptors.
// Dependencies: geobridge-core, serde_json, toml
// ============================================================================

//! ## Overview
//! The catalog owns every loaded descriptor, keyed by execute qualifier.
//! Descriptors validate on the way in and are immutable afterwards, so the
//! catalog is safe to share read-only across any number of threads for the
//! process lifetime. Iteration order is sorted by qualifier, keeping derived
//! artifacts deterministic across loads.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::path::Path;

use geobridge_core::ExecuteQualifier;
use geobridge_core::ToolDescriptor;
use geobridge_core::interfaces::ToolSource;

use crate::CatalogError;
use crate::manifest::CatalogManifest;

// ============================================================================
// SECTION: Tool Catalog
// ============================================================================

/// Immutable, qualifier-keyed registry of tool descriptors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolCatalog {
    /// Descriptors keyed by execute qualifier.
    tools: BTreeMap<ExecuteQualifier, ToolDescriptor>,
}

impl ToolCatalog {
    /// Builds a catalog from descriptors, validating each.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidDescriptor`] when a descriptor fails
    /// validation and [`CatalogError::DuplicateQualifier`] when two
    /// descriptors share an execute qualifier.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = ToolDescriptor>,
    ) -> Result<Self, CatalogError> {
        let mut tools = BTreeMap::new();
        for descriptor in descriptors {
            let qualifier = descriptor.identity.execute_qualifier.clone();
            descriptor.validate().map_err(|source| {
                CatalogError::InvalidDescriptor {
                    qualifier: qualifier.to_string(),
                    source,
                }
            })?;
            if tools.insert(qualifier.clone(), descriptor).is_some() {
                return Err(CatalogError::DuplicateQualifier(qualifier.to_string()));
            }
        }
        Ok(Self {
            tools,
        })
    }

    /// Builds a catalog from a parsed manifest.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when conversion or validation fails.
    pub fn from_manifest(manifest: CatalogManifest) -> Result<Self, CatalogError> {
        let descriptors = manifest
            .tools
            .into_iter()
            .map(crate::manifest::ToolManifest::into_descriptor)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_descriptors(descriptors)
    }

    /// Loads a catalog from TOML manifest text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ParseToml`] on malformed TOML and the
    /// conversion errors of [`Self::from_manifest`] otherwise.
    pub fn load_toml_str(text: &str) -> Result<Self, CatalogError> {
        let manifest: CatalogManifest = toml::from_str(text)?;
        Self::from_manifest(manifest)
    }

    /// Loads a catalog from JSON manifest text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ParseJson`] on malformed JSON and the
    /// conversion errors of [`Self::from_manifest`] otherwise.
    pub fn load_json_str(text: &str) -> Result<Self, CatalogError> {
        let manifest: CatalogManifest = serde_json::from_str(text)?;
        Self::from_manifest(manifest)
    }

    /// Loads a catalog from a TOML manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] when the file cannot be read, plus the
    /// errors of [`Self::load_toml_str`].
    pub fn load_toml_path(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            CatalogError::Io {
                path: path.display().to_string(),
                source,
            }
        })?;
        Self::load_toml_str(&text)
    }

    /// Returns the descriptor for a qualifier, if cataloged.
    #[must_use]
    pub fn get(&self, qualifier: &ExecuteQualifier) -> Option<&ToolDescriptor> {
        self.tools.get(qualifier)
    }

    /// Returns the descriptor for a qualifier or a structured error.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownQualifier`] when the qualifier is not
    /// cataloged.
    pub fn require(&self, qualifier: &ExecuteQualifier) -> Result<&ToolDescriptor, CatalogError> {
        self.get(qualifier).ok_or_else(|| CatalogError::UnknownQualifier(qualifier.to_string()))
    }

    /// Returns descriptors sorted by execute qualifier.
    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.values()
    }

    /// Returns the number of cataloged tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true when no tool is cataloged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl ToolSource for ToolCatalog {
    fn descriptor(&self, qualifier: &ExecuteQualifier) -> Option<&ToolDescriptor> {
        self.get(qualifier)
    }
}
