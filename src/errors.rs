use thiserror::Error;

/// All errors that can occur in OtpVault.
#[derive(Debug, Error)]
pub enum OtpVaultError {
    // --- Crypto errors ---
    #[error("Secure randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Encrypted data is malformed or truncated")]
    MalformedBlob,

    #[error("Incorrect password or corrupted data")]
    IncorrectPasswordOrCorrupted,

    // --- Store errors ---
    #[error("Account '{0}' already exists")]
    AccountExists(String),

    #[error("Account '{0}' not found")]
    AccountNotFound(String),

    #[error("Store file is corrupted: {0}")]
    StoreCorrupt(String),

    // --- TOTP errors ---
    #[error("Invalid secret key: {0}")]
    InvalidSecret(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Maximum password attempts exceeded")]
    MaxPasswordAttempts,
}

/// Convenience type alias for OtpVault results.
pub type Result<T> = std::result::Result<T, OtpVaultError>;
