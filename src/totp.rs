//! RFC 6238 TOTP code generation.
//!
//! Codes are 6 digits, derived with HMAC-SHA1 over a 30-second time
//! step.  The timestamp is an explicit parameter so callers (and
//! tests) control the clock.

use base32::Alphabet;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use zeroize::Zeroize;

use crate::errors::{OtpVaultError, Result};

/// Length of a TOTP time step in seconds.
pub const PERIOD_SECONDS: u64 = 30;

/// A generated TOTP code and how long it remains valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotpCode {
    /// The code value in [0, 999999].  Zero-pad to 6 digits for display.
    pub code: u32,

    /// Seconds until the current 30-second window expires, in [1, 30].
    pub remaining_seconds: u64,
}

/// Validate that a secret is usable base32.
///
/// Whitespace is stripped and the secret is upper-cased before
/// decoding, so "jbsw y3dp" and "JBSWY3DP" are equally valid.  The
/// decoded bytes are not retained.
pub fn validate_secret(secret: &str) -> Result<()> {
    let mut key = decode_secret(secret)?;
    key.zeroize();
    Ok(())
}

/// Generate the TOTP code for `secret` at the given Unix timestamp.
pub fn generate_code(secret: &str, unix_seconds: u64) -> Result<TotpCode> {
    let mut key = decode_secret(secret)?;

    let time_step = unix_seconds / PERIOD_SECONDS;
    let msg = time_step.to_be_bytes();

    let mut mac = Hmac::<Sha1>::new_from_slice(&key)
        .map_err(|e| OtpVaultError::InvalidSecret(format!("unusable key: {e}")))?;
    key.zeroize();
    mac.update(&msg);
    let result = mac.finalize().into_bytes();

    // Dynamic truncation (RFC 4226): the low 4 bits of the last hash
    // byte pick which 4 bytes become the code.
    let offset = (result[19] & 0x0f) as usize;
    let code = ((result[offset] & 0x7f) as u32) << 24
        | (result[offset + 1] as u32) << 16
        | (result[offset + 2] as u32) << 8
        | (result[offset + 3] as u32);

    Ok(TotpCode {
        code: code % 1_000_000,
        remaining_seconds: PERIOD_SECONDS - (unix_seconds % PERIOD_SECONDS),
    })
}

/// Decode a secret as unpadded RFC 4648 base32, after stripping
/// whitespace and upper-casing.
fn decode_secret(secret: &str) -> Result<Vec<u8>> {
    let normalized: String = secret
        .chars()
        .filter(|ch| !ch.is_ascii_whitespace())
        .map(|ch| ch.to_ascii_uppercase())
        .collect();

    if normalized.is_empty() {
        return Err(OtpVaultError::InvalidSecret("secret is empty".into()));
    }

    // Unpadded base32 never ends in 1, 3, or 6 symbols; the decoder
    // drops the dangling bits instead of rejecting them.
    if matches!(normalized.len() % 8, 1 | 3 | 6) {
        return Err(OtpVaultError::InvalidSecret("not valid base32".into()));
    }

    base32::decode(Alphabet::Rfc4648 { padding: false }, &normalized)
        .ok_or_else(|| OtpVaultError::InvalidSecret("not valid base32".into()))
}
