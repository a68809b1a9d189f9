//! Command implementations, one module per subcommand.

pub mod add;
pub mod code;
pub mod completions;
pub mod delete;
pub mod list;
pub mod update;
