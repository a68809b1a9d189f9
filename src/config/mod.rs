//! Configuration module: project-level settings from `.otpvault.toml`.

pub mod settings;

pub use settings::Settings;
