// crates/geobridge-core/src/core/environment.rs
// ============================================================================
// Module: Geobridge Environment Overlay
// Description: Ambient configuration values intersected per tool at call time.
// Purpose: Hold process- or call-scoped environment settings independent of any tool.
// Dependencies: crate::core::{identifiers, value}, serde
// ============================================================================

//! ## Overview
//! Environment options are ambient, cross-cutting settings (spatial extent,
//! workspaces, cell size) that a tool may or may not honor. The overlay
//! holds them independent of any tool; at call time the builder intersects
//! the overlay against the tool's recognized option set and silently drops
//! everything else. Membership filtering is the only rule applied here;
//! constraint checking of environment values is the caller's concern.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::EnvOptionName;
use crate::core::value::ParamValue;

// ============================================================================
// SECTION: Well-Known Options
// ============================================================================

/// Environment option names shared across the engine's tool vocabulary.
///
/// Individual tools recognize per-tool subsets of this list; some recognize
/// none of it.
pub const WELL_KNOWN_OPTION_NAMES: &[&str] = &[
    "extent",
    "workspace",
    "scratchWorkspace",
    "outputCoordinateSystem",
    "cellSize",
    "parallelProcessingFactor",
];

/// Returns true when the name belongs to the shared option vocabulary.
#[must_use]
pub fn is_well_known_option(name: &EnvOptionName) -> bool {
    WELL_KNOWN_OPTION_NAMES.contains(&name.as_str())
}

// ============================================================================
// SECTION: Environment Overlay
// ============================================================================

/// Ambient configuration values keyed by option name.
///
/// Callers may update an overlay between invocations; during a single build
/// it is read-only. Sharing an overlay across concurrent builds is safe as
/// long as no caller mutates it concurrently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentOverlay {
    /// Option values keyed by name.
    options: BTreeMap<EnvOptionName, ParamValue>,
}

impl EnvironmentOverlay {
    /// Creates an empty overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option value, replacing any previous value.
    pub fn set(&mut self, name: impl Into<EnvOptionName>, value: ParamValue) -> &mut Self {
        self.options.insert(name.into(), value);
        self
    }

    /// Removes an option value.
    pub fn unset(&mut self, name: &EnvOptionName) -> Option<ParamValue> {
        self.options.remove(name)
    }

    /// Returns the value for an option, if set.
    #[must_use]
    pub fn get(&self, name: &EnvOptionName) -> Option<&ParamValue> {
        self.options.get(name)
    }

    /// Returns true when no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns the number of options set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns only the entries whose key the target tool recognizes.
    ///
    /// Entries not in `recognized` are silently dropped; different tools
    /// legitimately ignore different ambient options.
    #[must_use]
    pub fn intersect(
        &self,
        recognized: &BTreeSet<EnvOptionName>,
    ) -> BTreeMap<EnvOptionName, ParamValue> {
        self.options
            .iter()
            .filter(|(name, _)| recognized.contains(*name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}
