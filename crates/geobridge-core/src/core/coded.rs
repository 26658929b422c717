// crates/geobridge-core/src/core/coded.rs
// ============================================================================
// Module: Geobridge Coded Value Registry
// Description: Bidirectional wire-code and label resolution for one parameter.
// Purpose: Resolve presentation labels to canonical codes and back.
// Dependencies: crate::core::{constraint, identifiers}, thiserror
// ============================================================================

//! ## Overview
//! Enumerated parameters carry wire codes with per-locale presentation
//! labels. The registry resolves any locale's label back to the single
//! canonical code, while label lookup stays locale-sensitive. Multiple
//! locales may map to the same code; the source catalog ships parallel
//! Chinese and English documentation for identical codes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::constraint::CodedValueEntry;
use crate::core::identifiers::LocaleTag;
use crate::core::identifiers::WireCode;

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Coded-value resolution scoped to a single parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodedValueRegistry {
    /// Coded entries in declaration order.
    entries: Vec<CodedValueEntry>,
}

impl CodedValueRegistry {
    /// Builds a registry from coded entries.
    ///
    /// # Errors
    ///
    /// Returns [`CodedValueError::DuplicateCode`] when two entries share a
    /// code.
    pub fn from_entries(entries: Vec<CodedValueEntry>) -> Result<Self, CodedValueError> {
        for (index, entry) in entries.iter().enumerate() {
            if entries.iter().skip(index + 1).any(|other| other.code == entry.code) {
                return Err(CodedValueError::DuplicateCode(entry.code.to_string()));
            }
        }
        Ok(Self {
            entries,
        })
    }

    /// Returns the registered entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[CodedValueEntry] {
        &self.entries
    }

    /// Returns true when the exact code is registered.
    #[must_use]
    pub fn contains_code(&self, code: &WireCode) -> bool {
        self.entries.iter().any(|entry| &entry.code == code)
    }

    /// Resolves a presentation label from any locale to its canonical code.
    ///
    /// Labels are compared exactly; codes themselves are not accepted here.
    ///
    /// # Errors
    ///
    /// Returns [`CodedValueError::UnknownLabel`] when no locale of any entry
    /// carries the label.
    pub fn code_for(&self, label: &str) -> Result<&WireCode, CodedValueError> {
        self.entries
            .iter()
            .find(|entry| entry.labels.values().any(|candidate| candidate == label))
            .map(|entry| &entry.code)
            .ok_or_else(|| CodedValueError::UnknownLabel(label.to_string()))
    }

    /// Resolves a code to its presentation label for a locale.
    ///
    /// # Errors
    ///
    /// Returns [`CodedValueError::UnknownCode`] when the code is not
    /// registered and [`CodedValueError::MissingLocale`] when the entry has
    /// no label for the requested locale.
    pub fn label_for(&self, code: &WireCode, locale: &LocaleTag) -> Result<&str, CodedValueError> {
        let entry = self
            .entries
            .iter()
            .find(|entry| &entry.code == code)
            .ok_or_else(|| CodedValueError::UnknownCode(code.to_string()))?;
        entry.labels.get(locale).map(String::as_str).ok_or_else(|| {
            CodedValueError::MissingLocale {
                code: code.to_string(),
                locale: locale.to_string(),
            }
        })
    }
}

// ============================================================================
// SECTION: Resolution Helpers
// ============================================================================

/// Resolves supplied text against coded entries as a code or a label.
///
/// Exact code matches win over label matches; codes are protocol tokens and
/// are never normalized. Label matches consult every locale.
#[must_use]
pub fn resolve_code<'a>(entries: &'a [CodedValueEntry], supplied: &str) -> Option<&'a WireCode> {
    if let Some(entry) = entries.iter().find(|entry| entry.code.as_str() == supplied) {
        return Some(&entry.code);
    }
    entries
        .iter()
        .find(|entry| entry.labels.values().any(|label| label == supplied))
        .map(|entry| &entry.code)
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Coded-value resolution errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodedValueError {
    /// Two entries share the same wire code.
    #[error("duplicate coded value: {0}")]
    DuplicateCode(String),
    /// No entry carries the label in any locale.
    #[error("unknown coded value label: {0}")]
    UnknownLabel(String),
    /// No entry carries the code.
    #[error("unknown wire code: {0}")]
    UnknownCode(String),
    /// The entry has no label for the requested locale.
    #[error("code {code} has no label for locale {locale}")]
    MissingLocale {
        /// Wire code whose label was requested.
        code: String,
        /// Locale with no registered label.
        locale: String,
    },
}
