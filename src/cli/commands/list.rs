//! `otpvault list`: display all saved account names.

use crate::cli::output;
use crate::cli::{account_store, with_password_attempts, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let store = account_store(cli)?;

    let accounts = with_password_attempts(|password| store.load(password))?;

    output::info(&format!("{} account(s)", accounts.len()));
    output::print_accounts_table(&accounts);

    Ok(())
}
