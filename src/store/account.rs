//! Account type stored inside the encrypted accounts file.
//!
//! Each account holds its name and the encrypted TOTP secret (as raw
//! bytes).  The `encrypted_secret` field uses custom serde helpers so
//! it serializes as a base64 string in JSON rather than a raw byte
//! array.

use serde::{Deserialize, Serialize};

/// A single account stored in the vault.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// The account name (e.g. "github").  Compared case-insensitively.
    pub name: String,

    /// The encrypted secret bytes (salt + nonce + ciphertext).
    /// Serialized as a base64 string in JSON for readability.
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub encrypted_secret: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Serde helpers for base64-encoded Vec<u8> fields
// ---------------------------------------------------------------------------

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

pub(crate) fn base64_encode<S>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let encoded = BASE64.encode(data);
    serializer.serialize_str(&encoded)
}

pub(crate) fn base64_decode<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BASE64.decode(&s).map_err(serde::de::Error::custom)
}
