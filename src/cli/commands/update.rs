//! `otpvault update`: replace the secret key of an existing account.

use crate::cli::output;
use crate::cli::{account_store, resolve_secret, with_password_attempts, Cli};
use crate::errors::Result;
use crate::totp;

/// Execute the `update` command.
pub fn execute(cli: &Cli, name: &str, secret: Option<&str>) -> Result<()> {
    let store = account_store(cli)?;
    let secret = resolve_secret(name, secret)?;

    // Reject bad secrets before asking for the master password.
    totp::validate_secret(&secret)?;

    with_password_attempts(|password| store.update(name, &secret, password))?;

    output::success(&format!("Account '{name}' updated."));

    Ok(())
}
