// crates/geobridge-core/src/core/value.rs
// ============================================================================
// Module: Geobridge Parameter Values
// Description: Typed parameter values and the engine's type-tag vocabulary.
// Purpose: Provide canonical typed values for binding, validation, and dispatch.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! Parameter values are typed at the client boundary. Booleans, numbers, and
//! coded values are carried as native variants rather than string sentinels,
//! so "unset" and "set to the string `false`" can never be confused. Dataset
//! references carry the declared type tags that type-set domains check
//! against; the engine remains the authority for tags a descriptor leaves
//! undeclared.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::WireCode;

// ============================================================================
// SECTION: Parameter Values
// ============================================================================

/// Canonical typed parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ParamValue {
    /// Boolean flag value.
    Bool(bool),
    /// 64-bit signed integer value.
    Int(i64),
    /// 64-bit floating point value.
    Float(f64),
    /// Free-form text value.
    Text(String),
    /// Wire code for an enumerated parameter.
    Code(WireCode),
    /// Reference to a dataset resolvable by the engine.
    Dataset(DatasetRef),
    /// Ordered list of values for multivalue parameters.
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Returns the value type tag for this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) => ValueType::Int,
            Self::Float(_) => ValueType::Float,
            Self::Text(_) => ValueType::Text,
            Self::Code(_) => ValueType::Code,
            Self::Dataset(_) => ValueType::Dataset,
            Self::List(_) => ValueType::List,
        }
    }

    /// Returns the numeric magnitude for `Int` and `Float` values.
    #[must_use]
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss, reason = "Range bounds tolerate f64 precision.")]
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: Value Types
// ============================================================================

/// Declared value type for a parameter descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Boolean flag.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point number.
    Float,
    /// Free-form text.
    Text,
    /// Enumerated wire code.
    Code,
    /// Engine-resolvable dataset reference.
    Dataset,
    /// Ordered multivalue list.
    List,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
            Self::Code => "code",
            Self::Dataset => "dataset",
            Self::List => "list",
        };
        f.write_str(name)
    }
}

// ============================================================================
// SECTION: Dataset References
// ============================================================================

/// Reference to a dataset held by the engine.
///
/// The path is opaque to the client; type tags declare what the caller knows
/// about the dataset so type-set domains can be checked before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRef {
    /// Engine-resolvable dataset path or layer name.
    pub path: String,
    /// Declared field type for field-valued parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    /// Declared geometry type for feature datasets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry_type: Option<GeometryType>,
    /// Declared workspace kind for workspace-valued parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_type: Option<WorkspaceType>,
}

impl DatasetRef {
    /// Creates a dataset reference with no declared type tags.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            field_type: None,
            geometry_type: None,
            workspace_type: None,
        }
    }

    /// Returns the file extension of the path, lowercased, if any.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let name = self.path.rsplit(['/', '\\']).next()?;
        let (stem, extension) = name.rsplit_once('.')?;
        if stem.is_empty() || extension.is_empty() {
            return None;
        }
        Some(extension.to_ascii_lowercase())
    }
}

// ============================================================================
// SECTION: Engine Type Vocabulary
// ============================================================================

/// Field types understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// 16-bit integer field.
    SmallInteger,
    /// 32-bit integer field.
    Integer,
    /// Single-precision floating point field.
    Single,
    /// Double-precision floating point field.
    Double,
    /// Text field.
    Text,
    /// Date field.
    Date,
    /// Object identifier field.
    Oid,
    /// Geometry field.
    Geometry,
    /// Binary large object field.
    Blob,
    /// Raster field.
    Raster,
    /// Globally unique identifier field.
    Guid,
    /// XML document field.
    Xml,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SmallInteger => "small_integer",
            Self::Integer => "integer",
            Self::Single => "single",
            Self::Double => "double",
            Self::Text => "text",
            Self::Date => "date",
            Self::Oid => "oid",
            Self::Geometry => "geometry",
            Self::Blob => "blob",
            Self::Raster => "raster",
            Self::Guid => "guid",
            Self::Xml => "xml",
        };
        f.write_str(name)
    }
}

/// Geometry types understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryType {
    /// Single point geometry.
    Point,
    /// Multipoint geometry.
    Multipoint,
    /// Polyline geometry.
    Polyline,
    /// Polygon geometry.
    Polygon,
    /// Multipatch surface geometry.
    MultiPatch,
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Point => "point",
            Self::Multipoint => "multipoint",
            Self::Polyline => "polyline",
            Self::Polygon => "polygon",
            Self::MultiPatch => "multi_patch",
        };
        f.write_str(name)
    }
}

/// Workspace kinds understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceType {
    /// File-system folder workspace.
    FileSystem,
    /// Local single-user database workspace.
    LocalDatabase,
    /// Remote multi-user database workspace.
    RemoteDatabase,
}

impl fmt::Display for WorkspaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FileSystem => "file_system",
            Self::LocalDatabase => "local_database",
            Self::RemoteDatabase => "remote_database",
        };
        f.write_str(name)
    }
}
