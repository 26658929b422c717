// crates/geobridge-core/src/core/hashing.rs
// ============================================================================
// Module: Geobridge Content Hashing
// Description: RFC 8785 canonical JSON content hashes.
// Purpose: Provide stable digests for descriptor integrity and request correlation.
// Dependencies: serde, serde_jcs, sha2
// ============================================================================

//! ## Overview
//! Catalog descriptors and invocation requests are hashed over RFC 8785
//! (JCS) canonical JSON so digests stay stable across serialization order
//! and process restarts. Descriptor hashes detect catalog drift between
//! client and engine; request hashes let the dispatch collaborator correlate
//! acknowledgements with the call that produced them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;
use thiserror::Error;

// ============================================================================
// SECTION: Content Hash
// ============================================================================

/// Lowercase hex SHA-256 digest over canonical content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Hashes raw bytes.
    #[must_use]
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self(hex_encode(&hasher.finalize()))
    }

    /// Hashes a serializable value over its RFC 8785 canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Canonicalization`] when serialization fails.
    pub fn of_canonical_json<T: Serialize + ?Sized>(value: &T) -> Result<Self, HashError> {
        let bytes =
            serde_jcs::to_vec(value).map_err(|err| HashError::Canonicalization(err.to_string()))?;
        Ok(Self::of_bytes(&bytes))
    }

    /// Returns the digest as a lowercase hex string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when computing canonical hashes.
#[derive(Debug, Error)]
pub enum HashError {
    /// JSON canonicalization failed.
    #[error("failed to canonicalize json: {0}")]
    Canonicalization(String),
}

// ============================================================================
// SECTION: Hex Encoding
// ============================================================================

/// Encodes bytes as a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
    out
}
