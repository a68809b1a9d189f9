use clap::Parser;
use otpvault::cli::{validate_account_name, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Reject blank account names early, before any prompt.
    let name_arg = match &cli.command {
        Commands::Add { name, .. }
        | Commands::Code { name, .. }
        | Commands::Delete { name, .. }
        | Commands::Update { name, .. } => Some(name.as_str()),
        Commands::List | Commands::Completions { .. } => None,
    };
    if let Some(name) = name_arg {
        if let Err(e) = validate_account_name(name) {
            otpvault::cli::output::error(&e.to_string());
            std::process::exit(1);
        }
    }

    let result = match cli.command {
        Commands::Add {
            ref name,
            ref secret,
        } => otpvault::cli::commands::add::execute(&cli, name, secret.as_deref()),
        Commands::List => otpvault::cli::commands::list::execute(&cli),
        Commands::Code { ref name, auto } => otpvault::cli::commands::code::execute(&cli, name, auto),
        Commands::Delete { ref name, force } => {
            otpvault::cli::commands::delete::execute(&cli, name, force)
        }
        Commands::Update {
            ref name,
            ref secret,
        } => otpvault::cli::commands::update::execute(&cli, name, secret.as_deref()),
        Commands::Completions { ref shell } => otpvault::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        otpvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
