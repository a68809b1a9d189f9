//! `otpvault delete`: remove an account from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{account_store, with_password_attempts, Cli};
use crate::errors::{OtpVaultError, Result};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, name: &str, force: bool) -> Result<()> {
    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete account '{name}'?"))
            .default(false)
            .interact()
            .map_err(|e| OtpVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let store = account_store(cli)?;
    with_password_attempts(|password| store.delete(name, password))?;

    output::success(&format!("Deleted account '{name}'"));

    Ok(())
}
