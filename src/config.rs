//! Configuration management for the auth demo
//!
//! The only setting is where the credential file lives. It defaults to
//! `users.txt` in the working directory and can be overridden by an
//! optional `simple-auth.toml` next to it. Other files in the directory
//! are never read.

use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default credential file, resolved against the working directory
pub const DEFAULT_STORE_PATH: &str = "users.txt";

/// Optional TOML file read from the working directory
pub const CONFIG_FILE: &str = "simple-auth.toml";

/// Application configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path of the `username:password_hash` file
    pub store_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_store_path(DEFAULT_STORE_PATH)
    }
}

impl AppConfig {
    pub fn with_store_path(path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: path.into(),
        }
    }

    /// Load configuration from `simple-auth.toml` (if present) over the defaults
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from the given TOML file (if present) over the defaults
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("store_path", DEFAULT_STORE_PATH)?
            .add_source(File::new(path, FileFormat::Toml).required(false))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.store_path.as_os_str().is_empty() {
            return Err(config::ConfigError::Message(
                "store_path cannot be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn setup_test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "simple-auth-config-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_default_store_path() {
        assert_eq!(AppConfig::default().store_path(), Path::new("users.txt"));
    }

    #[test]
    fn test_missing_file_uses_default() {
        let dir = setup_test_dir("missing");
        let path = dir.join(CONFIG_FILE);
        let config = AppConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config, AppConfig::default());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_overrides_store_path() {
        let dir = setup_test_dir("override");
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, "store_path = \"accounts.txt\"\n").unwrap();
        let config = AppConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.store_path(), Path::new("accounts.txt"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unrelated_config_files_ignored() {
        let dir = setup_test_dir("unrelated");
        fs::write(dir.join("config.json"), "{ \"name\": \"some other tool\", ").unwrap();
        fs::write(dir.join("config.toml"), "store_path = [").unwrap();
        fs::write(dir.join("simple-auth.yaml"), "store_path: elsewhere.txt\n").unwrap();
        let path = dir.join(CONFIG_FILE);
        let config = AppConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config, AppConfig::default());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_empty_store_path_rejected() {
        let dir = setup_test_dir("empty");
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, "store_path = \"\"\n").unwrap();
        assert!(AppConfig::load_from(path.to_str().unwrap()).is_err());
        let _ = fs::remove_dir_all(&dir);
    }
}
