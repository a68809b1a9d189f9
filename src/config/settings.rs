use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{OtpVaultError, Result};

/// Project-level configuration, loaded from `.otpvault.toml`.
///
/// Every field has a sensible default so OtpVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to the working directory) where the
    /// encrypted accounts file is stored.
    #[serde(default = "default_vault_dir")]
    pub vault_dir: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_dir() -> String {
    ".otpvault".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: default_vault_dir(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".otpvault.toml";

    /// Name of the encrypted accounts file inside the vault directory.
    pub const ACCOUNTS_FILE: &'static str = "accounts.vault";

    /// Load settings from `<project_dir>/.otpvault.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            OtpVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full path to the accounts file.
    ///
    /// Example: `project_dir/.otpvault/accounts.vault`
    pub fn accounts_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.vault_dir).join(Self::ACCOUNTS_FILE)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.vault_dir, ".otpvault");
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_dir, ".otpvault");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".otpvault.toml"), "vault_dir = \"vaults\"\n").unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_dir, "vaults");
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".otpvault.toml"), "").unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_dir, ".otpvault");
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".otpvault.toml"), "not valid {{toml").unwrap();

        let result = Settings::load(tmp.path());
        assert!(result.is_err());
    }

    #[test]
    fn accounts_path_builds_correct_path() {
        let s = Settings::default();
        let project = Path::new("/home/user/myproject");
        let path = s.accounts_path(project);
        assert_eq!(
            path,
            PathBuf::from("/home/user/myproject/.otpvault/accounts.vault")
        );
    }

    #[test]
    fn accounts_path_respects_custom_vault_dir() {
        let s = Settings {
            vault_dir: "vaults".to_string(),
        };
        let project = Path::new("/home/user/myproject");
        let path = s.accounts_path(project);
        assert_eq!(
            path,
            PathBuf::from("/home/user/myproject/vaults/accounts.vault")
        );
    }
}
