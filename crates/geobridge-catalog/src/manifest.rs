// crates/geobridge-catalog/src/manifest.rs
// ============================================================================
// Module: Geobridge Catalog Manifest
// Description: Serde model for generated tool catalog manifests.
// Purpose: Parse manifest tables and convert them into validated descriptors.
// Dependencies: geobridge-core, serde
// ============================================================================

//! ## Overview
//! The generation pipeline that walks the engine's toolboxes emits one
//! manifest table per tool. This module is the typed model of those tables:
//! identity fields, an ordered parameter list, and the tool's recognized
//! environment names. Conversion into core descriptors runs the full
//! descriptor validation so a malformed catalog is rejected at load time,
//! never at call time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use geobridge_core::DomainConstraint;
use geobridge_core::ParamValue;
use geobridge_core::ParameterDescriptor;
use geobridge_core::ParameterRequirement;
use geobridge_core::ToolDescriptor;
use geobridge_core::ToolIdentity;
use geobridge_core::ValueType;
use serde::Deserialize;
use serde::Serialize;

use crate::CatalogError;

// ============================================================================
// SECTION: Catalog Manifest
// ============================================================================

/// Top-level catalog manifest: one table per tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogManifest {
    /// Tool tables in catalog order.
    #[serde(default, rename = "tool")]
    pub tools: Vec<ToolManifest>,
}

/// Manifest table for one tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolManifest {
    /// Human-facing display name.
    pub display_name: String,
    /// Dotted `<toolboxAlias>.<toolName>` wire token.
    pub execute_qualifier: String,
    /// Owning toolbox identifier.
    pub toolbox_id: String,
    /// Parameter tables in wire order.
    #[serde(default, rename = "parameter")]
    pub parameters: Vec<ParameterManifest>,
    /// Environment option names the tool recognizes.
    #[serde(default)]
    pub environment: Vec<String>,
}

impl ToolManifest {
    /// Converts the manifest table into a validated core descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidDescriptor`] when descriptor
    /// validation rejects the converted tool.
    pub fn into_descriptor(self) -> Result<ToolDescriptor, CatalogError> {
        let qualifier = self.execute_qualifier.clone();
        let descriptor = ToolDescriptor {
            identity: ToolIdentity {
                display_name: self.display_name,
                execute_qualifier: self.execute_qualifier.into(),
                toolbox_id: self.toolbox_id.into(),
            },
            parameters: self.parameters.into_iter().map(ParameterManifest::into_descriptor).collect(),
            recognized_environment: self.environment.into_iter().map(Into::into).collect(),
        };
        descriptor.validate().map_err(|source| {
            CatalogError::InvalidDescriptor {
                qualifier,
                source,
            }
        })?;
        Ok(descriptor)
    }
}

// ============================================================================
// SECTION: Parameter Manifest
// ============================================================================

/// Manifest table for one parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterManifest {
    /// Parameter name, unique within the tool.
    pub name: String,
    /// Requirement classification; optional when omitted.
    #[serde(default = "default_requirement")]
    pub requirement: ParameterRequirement,
    /// Declared value type.
    pub value_type: ValueType,
    /// Optional legal-value rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<DomainConstraint>,
    /// Optional typed default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ParamValue>,
}

impl ParameterManifest {
    /// Converts the manifest table into a core parameter descriptor.
    #[must_use]
    pub fn into_descriptor(self) -> ParameterDescriptor {
        ParameterDescriptor {
            name: self.name.into(),
            requirement: self.requirement,
            value_type: self.value_type,
            constraint: self.domain,
            default: self.default,
        }
    }
}

/// Default requirement for parameter tables that omit one.
const fn default_requirement() -> ParameterRequirement {
    ParameterRequirement::Optional
}
