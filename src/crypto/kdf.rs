//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is fixed at 100,000.  Derivation is re-run on
//! every encrypt and decrypt call with the salt carried in the blob,
//! so the cost is paid once per operation and never cached.

use pbkdf2::pbkdf2_hmac_array;
use rand::rngs::OsRng;
use rand::TryRngCore;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::errors::{OtpVaultError, Result};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
const KEY_LEN: usize = 32;

/// PBKDF2 iteration count.
const PBKDF2_ROUNDS: u32 = 100_000;

/// A wrapper around a 32-byte derived key that automatically zeroes
/// its memory when dropped.
///
/// Use this to hold the key in memory so it cannot linger after it
/// is no longer needed.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Access the raw key bytes (e.g. to build an AES cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

/// Derive a 32-byte key from a password and salt.
///
/// The same password + salt will always produce the same key.  The
/// salt comes from `generate_salt` on encryption, or from the stored
/// blob on decryption.
pub fn derive_key(password: &[u8], salt: &[u8]) -> DerivedKey {
    let bytes = pbkdf2_hmac_array::<Sha256, KEY_LEN>(password, salt, PBKDF2_ROUNDS);
    DerivedKey { bytes }
}

/// Generate a cryptographically random 16-byte salt.
///
/// Fails when the OS randomness source cannot be read.
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| OtpVaultError::RandomnessUnavailable(e.to_string()))?;
    Ok(salt)
}
