//! `otpvault code`: generate and display the TOTP code for an account.

use std::io::{self, IsTerminal};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use console::Term;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{account_store, with_password_attempts, Cli};
use crate::errors::{OtpVaultError, Result};
use crate::totp::{self, TotpCode};

/// Execute the `code` command.
pub fn execute(cli: &Cli, name: &str, auto: bool) -> Result<()> {
    let store = account_store(cli)?;
    let secret =
        Zeroizing::new(with_password_attempts(|password| store.get_secret(name, password))?);

    // Outside a terminal, print the code once and exit so the command
    // stays scriptable (`otpvault code github | pbcopy`).
    if !io::stdout().is_terminal() {
        let result = totp::generate_code(&secret, unix_now()?)?;
        println!("{:06}", result.code);
        return Ok(());
    }

    println!("Press Ctrl+C to exit");

    let term = Term::stdout();
    loop {
        let result = totp::generate_code(&secret, unix_now()?)?;
        display_countdown(&term, name, &result)?;

        if !auto {
            term.write_line("")?;
            return Ok(());
        }
    }
}

/// Redraw the code line once per second until the window expires.
fn display_countdown(term: &Term, name: &str, result: &TotpCode) -> Result<()> {
    let mut remaining = result.remaining_seconds;

    while remaining > 0 {
        term.clear_line()?;
        term.write_str(&output::format_code_line(name, result.code, remaining))?;
        thread::sleep(Duration::from_secs(1));
        remaining -= 1;
    }

    Ok(())
}

/// Current Unix time in seconds.
fn unix_now() -> Result<u64> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| OtpVaultError::CommandFailed(format!("system clock: {e}")))?;
    Ok(now.as_secs())
}
