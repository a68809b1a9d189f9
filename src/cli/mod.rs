//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{OtpVaultError, Result};
use crate::store::AccountStore;

/// Maximum interactive password attempts before giving up.
const MAX_PASSWORD_ATTEMPTS: u32 = 3;

/// OtpVault CLI: encrypted TOTP account vault.
#[derive(Parser)]
#[command(
    name = "otpvault",
    about = "Encrypted TOTP account vault and code generator",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory (default: .otpvault, or vault_dir from .otpvault.toml)
    #[arg(long, env = "OTPVAULT_DIR", global = true)]
    pub vault_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Add a new account
    Add {
        /// Account name (e.g. github)
        name: String,
        /// Base32-encoded secret key (omit for interactive prompt)
        secret: Option<String>,
    },

    /// List all saved accounts
    List,

    /// Generate the TOTP code for an account
    Code {
        /// Account name
        name: String,
        /// Keep generating new codes when the window expires
        #[arg(short, long)]
        auto: bool,
    },

    /// Delete an account
    Delete {
        /// Account name
        name: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Update the secret key of an existing account
    Update {
        /// Account name
        name: String,
        /// New base32-encoded secret key (omit for interactive prompt)
        secret: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the master password, trying in order:
/// 1. `OTPVAULT_PASSWORD` env var (CI/CD)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = env_password() {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter master password")
        .interact()
        .map_err(|e| OtpVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new master password with confirmation.
///
/// Used on first run, before the accounts file exists.  Also respects
/// `OTPVAULT_PASSWORD` for scripted/CI usage.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = env_password() {
        return Ok(pw);
    }

    let password = dialoguer::Password::new()
        .with_prompt("Choose master password")
        .with_confirmation("Confirm master password", "Passwords do not match, try again")
        .interact()
        .map_err(|e| OtpVaultError::CommandFailed(format!("password prompt: {e}")))?;

    Ok(Zeroizing::new(password))
}

/// Read `OTPVAULT_PASSWORD` if set and non-empty.
fn env_password() -> Option<Zeroizing<String>> {
    match std::env::var("OTPVAULT_PASSWORD") {
        Ok(pw) if !pw.is_empty() => Some(Zeroizing::new(pw)),
        _ => None,
    }
}

/// Run a store operation, re-prompting for the password when it turns
/// out to be wrong.
///
/// Gives up after `MAX_PASSWORD_ATTEMPTS` tries.  When the password
/// comes from `OTPVAULT_PASSWORD` the operation gets exactly one
/// attempt, because re-prompting cannot change it.  Errors other than
/// a wrong password abort immediately.
pub fn with_password_attempts<T>(mut op: impl FnMut(&[u8]) -> Result<T>) -> Result<T> {
    let from_env = env_password().is_some();

    let mut attempt = 0;
    loop {
        attempt += 1;
        let password = prompt_password()?;

        match op(password.as_bytes()) {
            Err(OtpVaultError::IncorrectPasswordOrCorrupted)
                if !from_env && attempt < MAX_PASSWORD_ATTEMPTS =>
            {
                output::warning("Incorrect master password. Please try again.");
            }
            Err(OtpVaultError::IncorrectPasswordOrCorrupted) if !from_env => {
                output::warning("Incorrect master password.");
                return Err(OtpVaultError::MaxPasswordAttempts);
            }
            other => return other,
        }
    }
}

/// Determine a secret value from one of three sources: inline
/// argument, piped stdin, or an interactive hidden prompt.
///
/// Returns `Zeroizing<String>` so the secret is wiped from memory on drop.
pub fn resolve_secret(name: &str, inline: Option<&str>) -> Result<Zeroizing<String>> {
    let secret = if let Some(v) = inline {
        // Source 1: Inline value on the command line.
        output::warning("Secret provided on command line. It may appear in shell history.");
        v.to_string()
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf.trim_end().to_string()
    } else {
        // Source 3: Interactive secure prompt (default).
        dialoguer::Password::new()
            .with_prompt(format!("Enter secret for {name}"))
            .interact()
            .map_err(|e| OtpVaultError::CommandFailed(format!("input prompt: {e}")))?
    };

    Ok(Zeroizing::new(secret))
}

/// Validate an account name before any prompt or store work.
///
/// Clap guarantees the argument is present, but not that it holds
/// anything: empty and whitespace-only names are rejected here.
/// Everything else is allowed; the store compares names
/// case-insensitively.
pub fn validate_account_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(OtpVaultError::CommandFailed(
            "account name cannot be empty".into(),
        ));
    }
    Ok(())
}

/// Build the full path to the accounts file from the CLI arguments.
///
/// Precedence for the vault directory: `--vault-dir` flag (or the
/// `OTPVAULT_DIR` env var), then `vault_dir` from `.otpvault.toml`,
/// then the default `.otpvault`.
pub fn accounts_path(cli: &Cli) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;

    let dir = match &cli.vault_dir {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(Settings::load(&cwd)?.vault_dir),
    };

    Ok(cwd.join(dir).join(Settings::ACCOUNTS_FILE))
}

/// Build the `AccountStore` for this invocation.
pub fn account_store(cli: &Cli) -> Result<AccountStore> {
    Ok(AccountStore::new(accounts_path(cli)?))
}
