//! High-level account store used by CLI commands.
//!
//! `AccountStore` binds a file path to the crypto layer so the rest
//! of the application can work with simple method calls like
//! `store.add("github", secret, password)`.  Every operation is a
//! full load-modify-save cycle: the file is decrypted, changed in
//! memory, and rewritten as a whole.  Nothing is cached between
//! calls, and there is no cross-process locking.

use std::fs;
use std::path::{Path, PathBuf};

use zeroize::Zeroize;

use crate::crypto::encryption::{decrypt, encrypt};
use crate::errors::{OtpVaultError, Result};

use super::account::Account;

/// The main store handle.  Create one with `AccountStore::new`, then
/// use its methods to manage accounts.
pub struct AccountStore {
    /// Path to the encrypted accounts file on disk.
    path: PathBuf,
}

impl AccountStore {
    /// Create a store handle for the accounts file at `path`.
    ///
    /// The file does not have to exist yet; `load` treats a missing
    /// file as an empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the accounts file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if the accounts file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Load and decrypt the full account list.
    ///
    /// A missing file is the first-run case and yields an empty list.
    /// A wrong password surfaces as `IncorrectPasswordOrCorrupted` so
    /// the caller can re-prompt; a file that decrypts but does not
    /// parse is `StoreCorrupt`.
    pub fn load(&self, password: &[u8]) -> Result<Vec<Account>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let blob = fs::read(&self.path)?;
        let mut json = decrypt(&blob, password)?;

        let accounts = serde_json::from_slice(&json)
            .map_err(|e| OtpVaultError::StoreCorrupt(format!("account list JSON: {e}")));
        json.zeroize();
        accounts
    }

    /// Serialize, encrypt, and write the full account list.
    ///
    /// The whole file is rewritten on every save.  A crash mid-write
    /// can leave a truncated file behind.
    fn save(&self, accounts: &[Account], password: &[u8]) -> Result<()> {
        let mut json = serde_json::to_vec(accounts)
            .map_err(|e| OtpVaultError::SerializationError(format!("account list: {e}")))?;

        // Encrypt first, then zeroize the plaintext JSON.
        let blob = encrypt(&json, password);
        json.zeroize();
        let blob = blob?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, &blob)?;

        Ok(())
    }

    // ------------------------------------------------------------------
    // Account operations
    // ------------------------------------------------------------------

    /// Add a new account holding an encrypted copy of `secret`.
    ///
    /// The secret gets its own encryption layer (fresh salt + nonce)
    /// inside the already-encrypted file.
    pub fn add(&self, name: &str, secret: &str, password: &[u8]) -> Result<()> {
        let mut accounts = self.load(password)?;

        if accounts.iter().any(|a| names_equal(&a.name, name)) {
            return Err(OtpVaultError::AccountExists(name.to_string()));
        }

        let encrypted_secret = encrypt(secret.as_bytes(), password)?;
        accounts.push(Account {
            name: name.to_string(),
            encrypted_secret,
        });

        self.save(&accounts, password)
    }

    /// Decrypt and return the secret for a given account name.
    pub fn get_secret(&self, name: &str, password: &[u8]) -> Result<String> {
        let accounts = self.load(password)?;

        let account = accounts
            .iter()
            .find(|a| names_equal(&a.name, name))
            .ok_or_else(|| OtpVaultError::AccountNotFound(name.to_string()))?;

        let secret_bytes = decrypt(&account.encrypted_secret, password)?;

        // Convert to String via from_utf8 which takes ownership (no clone).
        // On error, zeroize the bytes inside the error before discarding.
        String::from_utf8(secret_bytes).map_err(|e| {
            let mut bad_bytes = e.into_bytes();
            bad_bytes.zeroize();
            OtpVaultError::StoreCorrupt("secret is not valid UTF-8".to_string())
        })
    }

    /// Remove an account and rewrite the remaining list.
    pub fn delete(&self, name: &str, password: &[u8]) -> Result<()> {
        let mut accounts = self.load(password)?;

        let index = accounts
            .iter()
            .position(|a| names_equal(&a.name, name))
            .ok_or_else(|| OtpVaultError::AccountNotFound(name.to_string()))?;

        accounts.remove(index);
        self.save(&accounts, password)
    }

    /// Replace the secret of an existing account.
    ///
    /// Re-encrypts with a fresh salt + nonce even when the password
    /// is unchanged.
    pub fn update(&self, name: &str, new_secret: &str, password: &[u8]) -> Result<()> {
        let mut accounts = self.load(password)?;

        let account = accounts
            .iter_mut()
            .find(|a| names_equal(&a.name, name))
            .ok_or_else(|| OtpVaultError::AccountNotFound(name.to_string()))?;

        account.encrypted_secret = encrypt(new_secret.as_bytes(), password)?;
        self.save(&accounts, password)
    }
}

/// Case-insensitive account name comparison.
fn names_equal(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
