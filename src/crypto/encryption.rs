//! AES-256-GCM authenticated encryption with an embedded salt and nonce.
//!
//! Each call to `encrypt` generates a fresh random salt and nonce,
//! derives the key from the password, and prepends both to the
//! ciphertext.  `decrypt` splits them back out, so the password is
//! the only thing a caller has to remember.
//!
//! Layout of the returned byte buffer:
//!   [ 16-byte salt | 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rand::TryRngCore;

use super::kdf::{derive_key, generate_salt, SALT_LEN};
use crate::errors::{OtpVaultError, Result};

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Minimum length of a valid blob: the salt + nonce prefix.
const MIN_BLOB_LEN: usize = SALT_LEN + NONCE_LEN;

/// Encrypt `plaintext` with a key derived from `password`.
///
/// Returns salt || nonce || ciphertext so the caller only needs to
/// store one blob.  Two calls with identical inputs never produce the
/// same bytes because the salt and nonce are fresh each time.
pub fn encrypt(plaintext: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    // Fresh salt and nonce for every call.
    let salt = generate_salt()?;
    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng
        .try_fill_bytes(&mut nonce_bytes)
        .map_err(|e| OtpVaultError::RandomnessUnavailable(e.to_string()))?;

    // Derive the key from the password (zeroed when dropped).
    let key = derive_key(password, &salt);

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| OtpVaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    // Encrypt and authenticate the plaintext.
    let nonce = Nonce::from_slice(&nonce_bytes);
    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| OtpVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    // Prepend salt and nonce so the caller only stores one blob.
    let mut output = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&salt);
    output.extend_from_slice(&nonce_bytes);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt data that was produced by `encrypt`.
///
/// Expects the first 16 bytes to be the salt and the next 12 the
/// nonce, followed by the ciphertext.  A wrong password and corrupted
/// or tampered data are indistinguishable: both fail the GCM auth
/// check and return `IncorrectPasswordOrCorrupted`.
pub fn decrypt(blob: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    // Make sure we have at least a salt + nonce worth of bytes.
    if blob.len() < MIN_BLOB_LEN {
        return Err(OtpVaultError::MalformedBlob);
    }

    // Split salt and nonce from the ciphertext.
    let (salt, rest) = blob.split_at(SALT_LEN);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);

    // Re-derive the key from the password and the stored salt.
    let key = derive_key(password, salt);

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| OtpVaultError::IncorrectPasswordOrCorrupted)?;

    // Decrypt and verify the auth tag.
    let nonce = Nonce::from_slice(nonce_bytes);
    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| OtpVaultError::IncorrectPasswordOrCorrupted)?;

    Ok(plaintext)
}
