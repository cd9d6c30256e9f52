//! Content fingerprints using BLAKE3 hashing
//!
//! The editor regenerates HTML after every mutation. A fingerprint of that
//! HTML lets it skip change notifications when an edit did not alter the
//! serialized document, and gives the persistence layer a validator it can
//! store alongside a draft or send as an HTTP ETag.
//!
//! # Algorithm
//!
//! 1. Hash the HTML bytes using BLAKE3
//! 2. Keep the first 128 bits (16 bytes) of the hash
//! 3. Encode as lowercase hexadecimal
//!
//! # Example
//!
//! ```
//! use recipe_block_converter::fingerprint::ContentFingerprint;
//!
//! let a = ContentFingerprint::of("<h2>Scones</h2>");
//! let b = ContentFingerprint::of("<h2>Scones</h2>");
//! assert_eq!(a, b);
//! assert_eq!(a.to_hex().len(), 32);
//! assert_eq!(a.etag(), format!("\"{}\"", a.to_hex()));
//! ```

use std::fmt;

/// Number of hash bytes kept
const FINGERPRINT_LEN: usize = 16;

/// Truncated BLAKE3 digest of serialized content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentFingerprint([u8; FINGERPRINT_LEN]);

impl ContentFingerprint {
    /// Fingerprint a serialized document
    pub fn of(html: &str) -> Self {
        Self::of_bytes(html.as_bytes())
    }

    pub fn of_bytes(bytes: &[u8]) -> Self {
        let hash = blake3::hash(bytes);
        let mut truncated = [0u8; FINGERPRINT_LEN];
        truncated.copy_from_slice(&hash.as_bytes()[..FINGERPRINT_LEN]);
        Self(truncated)
    }

    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }

    /// Lowercase hex encoding, 32 characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Strong ETag form: `"<hex>"`
    pub fn etag(&self) -> String {
        format!("\"{}\"", self.to_hex())
    }

    /// Weak ETag form: `W/"<hex>"`
    pub fn weak_etag(&self) -> String {
        format!("W/{}", self.etag())
    }
}

impl fmt::Display for ContentFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
