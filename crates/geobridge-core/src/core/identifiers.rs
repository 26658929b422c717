// crates/geobridge-core/src/core/identifiers.rs
// ============================================================================
// Module: Geobridge Identifiers
// Description: Canonical opaque identifiers for tools, parameters, and codes.
// Purpose: Provide strongly typed, serializable identifiers with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the canonical string-based identifiers used throughout
//! Geobridge. Identifiers are opaque and serialize as strings. Structural
//! validation is handled at descriptor or catalog boundaries rather than
//! within these simple wrappers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Parameter Identifiers
// ============================================================================

/// Parameter name within a tool descriptor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterName(String);

impl ParameterName {
    /// Creates a new parameter name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ParameterName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ParameterName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Environment Identifiers
// ============================================================================

/// Environment option name drawn from the engine's ambient vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvOptionName(String);

impl EnvOptionName {
    /// Creates a new environment option name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvOptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for EnvOptionName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EnvOptionName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Coded Value Identifiers
// ============================================================================

/// Wire-level symbolic code for an enumerated parameter value.
///
/// Codes are protocol tokens compared case-sensitively with no
/// normalization. Only codes are sent over the wire; labels never are.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WireCode(String);

impl WireCode {
    /// Creates a new wire code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WireCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for WireCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for WireCode {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Locale tag for a coded value's presentation label (`en`, `zh-CN`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Creates a new locale tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for LocaleTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LocaleTag {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Tool Identifiers
// ============================================================================

/// Toolbox identifier owning a tool.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolboxId(String);

impl ToolboxId {
    /// Creates a new toolbox identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolboxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ToolboxId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ToolboxId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Dotted `<toolboxAlias>.<toolName>` token identifying an operation on the
/// wire (`3d.CopyTin`, `analysis.Clip`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecuteQualifier(String);

impl ExecuteQualifier {
    /// Creates a new execute qualifier.
    #[must_use]
    pub fn new(qualifier: impl Into<String>) -> Self {
        Self(qualifier.into())
    }

    /// Returns the qualifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the toolbox alias segment, if the qualifier is dotted.
    #[must_use]
    pub fn toolbox_alias(&self) -> Option<&str> {
        self.split_segments().map(|(alias, _)| alias)
    }

    /// Returns the tool name segment, if the qualifier is dotted.
    #[must_use]
    pub fn tool_name(&self) -> Option<&str> {
        self.split_segments().map(|(_, name)| name)
    }

    /// Splits the qualifier into non-empty alias and name segments.
    fn split_segments(&self) -> Option<(&str, &str)> {
        let (alias, name) = self.0.split_once('.')?;
        if alias.is_empty() || name.is_empty() {
            return None;
        }
        Some((alias, name))
    }
}

impl fmt::Display for ExecuteQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ExecuteQualifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ExecuteQualifier {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
