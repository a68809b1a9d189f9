//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::store::Account;
use crate::totp::PERIOD_SECONDS;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of account names.
pub fn print_accounts_table(accounts: &[Account]) {
    if accounts.is_empty() {
        info("No accounts in this vault yet.");
        tip("Run `otpvault add <NAME>` to add your first account.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Account"]);

    for a in accounts {
        table.add_row(vec![a.name.clone()]);
    }

    println!("{table}");
}

// ---------------------------------------------------------------------------
// Countdown rendering for the `code` command
// ---------------------------------------------------------------------------

/// Width of the countdown bar in cells.
const BAR_WIDTH: u64 = 20;

/// Render the one-line code display with a countdown bar.
///
/// Example: `Code for 'github': 287082 │■■■■■■■■············│ 12s`
pub fn format_code_line(name: &str, code: u32, remaining: u64) -> String {
    let time_style = countdown_style(remaining);
    format!(
        "{} {} {} {}",
        style(format!("Code for '{name}':")).cyan(),
        style(format!("{code:06}")).green().bold(),
        countdown_bar(remaining),
        time_style.apply_to(format!("{remaining}s")),
    )
}

/// Build the countdown bar: filled cells for remaining time, dots for
/// elapsed time.
fn countdown_bar(remaining: u64) -> String {
    let filled = (remaining * BAR_WIDTH / PERIOD_SECONDS) as usize;
    let color = countdown_style(remaining);

    let mut bar = String::from("\u{2502}");
    for i in 0..BAR_WIDTH as usize {
        if i < filled {
            bar.push_str(&color.apply_to("\u{25a0}").to_string());
        } else {
            bar.push('\u{00b7}');
        }
    }
    bar.push('\u{2502}');
    bar
}

/// Color for the countdown: green while fresh, yellow, then red.
fn countdown_style(remaining: u64) -> console::Style {
    if remaining > 15 {
        console::Style::new().green()
    } else if remaining > 5 {
        console::Style::new().yellow()
    } else {
        console::Style::new().red()
    }
}
