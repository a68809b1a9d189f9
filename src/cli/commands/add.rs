//! `otpvault add`: add a new account to the vault.

use crate::cli::output;
use crate::cli::{account_store, prompt_new_password, resolve_secret, with_password_attempts, Cli};
use crate::errors::Result;
use crate::totp;

/// Execute the `add` command.
pub fn execute(cli: &Cli, name: &str, secret: Option<&str>) -> Result<()> {
    let store = account_store(cli)?;
    let secret = resolve_secret(name, secret)?;

    // Reject bad secrets before asking for the master password.
    totp::validate_secret(&secret)?;

    if store.exists() {
        with_password_attempts(|password| store.add(name, &secret, password))?;
    } else {
        // First run: choose the master password with confirmation.
        let password = prompt_new_password()?;
        store.add(name, &secret, password.as_bytes())?;
    }

    output::success(&format!("Account '{name}' added."));
    output::tip(&format!("Run `otpvault code {name}` to generate a code."));

    Ok(())
}
