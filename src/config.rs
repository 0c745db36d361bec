//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `ASSETS_DIR` - Directory holding the profile image and resume (default: `assets`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `CONTENT_FILE` - JSON file replacing the built-in page content
//! - `PROFILE_IMAGE` - Asset key of the profile image (overrides content)
//! - `RESUME_FILE` - Asset key of the resume (overrides content)
//! - `RESUME_DOWNLOAD_NAME` - File name offered for the resume (overrides content)
//!
//! No variable is required; an empty environment serves the built-in page.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::domain::content::PortfolioContent;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub assets_dir: PathBuf,
    pub static_dir: PathBuf,
    pub content_file: Option<PathBuf>,
    pub profile_image: Option<String>,
    pub resume_file: Option<String>,
    pub resume_download_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            assets_dir: PathBuf::from("assets"),
            static_dir: PathBuf::from("static"),
            content_file: None,
            profile_image: None,
            resume_file: None,
            resume_download_name: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            assets_dir: env::var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            content_file: non_empty_var("CONTENT_FILE").map(PathBuf::from),
            profile_image: non_empty_var("PROFILE_IMAGE"),
            resume_file: non_empty_var("RESUME_FILE"),
            resume_download_name: non_empty_var("RESUME_DOWNLOAD_NAME"),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Loads page content and applies the asset overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if `CONTENT_FILE` is set but cannot be read, parsed or
    /// validated.
    pub fn load_content(&self) -> Result<PortfolioContent> {
        let mut content = match &self.content_file {
            Some(path) => PortfolioContent::from_json_file(path)
                .with_context(|| format!("Failed to load content from {}", path.display()))?,
            None => PortfolioContent::default(),
        };

        if let Some(image) = &self.profile_image {
            content.profile.image = image.clone();
        }
        if let Some(file) = &self.resume_file {
            content.profile.resume.file = file.clone();
        }
        if let Some(name) = &self.resume_download_name {
            content.profile.resume.download_name = name.clone();
        }

        Ok(content)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Assets dir: {}", self.assets_dir.display());
        tracing::info!("  Static dir: {}", self.static_dir.display());

        match &self.content_file {
            Some(path) => tracing::info!("  Content: {}", path.display()),
            None => tracing::info!("  Content: built-in"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "LISTEN",
        "LOG_FORMAT",
        "ASSETS_DIR",
        "STATIC_DIR",
        "CONTENT_FILE",
        "PROFILE_IMAGE",
        "RESUME_FILE",
        "RESUME_DOWNLOAD_NAME",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env();
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert!(config.content_file.is_none());
        assert!(config.profile_image.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("ASSETS_DIR", "/srv/assets");
            env::set_var("PROFILE_IMAGE", "me.png");
            env::set_var("RESUME_FILE", "  ");
        }

        let config = Config::from_env();
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.assets_dir, PathBuf::from("/srv/assets"));
        assert_eq!(config.profile_image.as_deref(), Some("me.png"));
        // Blank values count as unset
        assert!(config.resume_file.is_none());

        clear_env();
    }

    #[test]
    fn test_load_content_applies_overrides() {
        let config = Config {
            profile_image: Some("me.png".to_string()),
            resume_file: Some("cv-2025.pdf".to_string()),
            resume_download_name: Some("Ann_CV.pdf".to_string()),
            ..Config::default()
        };

        let content = config.load_content().unwrap();
        assert_eq!(content.profile.image, "me.png");
        assert_eq!(content.profile.resume.file, "cv-2025.pdf");
        assert_eq!(content.profile.resume.download_name, "Ann_CV.pdf");
    }

    #[test]
    fn test_load_content_from_file() {
        let mut content = PortfolioContent::default();
        content.profile.name = "Ann".to_string();

        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), serde_json::to_string(&content).unwrap()).unwrap();

        let config = Config {
            content_file: Some(file.path().to_path_buf()),
            ..Config::default()
        };

        assert_eq!(config.load_content().unwrap().profile.name, "Ann");
    }

    #[test]
    fn test_load_content_rejects_blank_image_key() {
        let mut content = PortfolioContent::default();
        content.profile.image = String::new();

        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), serde_json::to_string(&content).unwrap()).unwrap();

        let config = Config {
            content_file: Some(file.path().to_path_buf()),
            ..Config::default()
        };

        assert!(config.load_content().is_err());
    }

    #[test]
    fn test_load_content_missing_file_fails() {
        let config = Config {
            content_file: Some(PathBuf::from("/no/such/content.json")),
            ..Config::default()
        };

        assert!(config.load_content().is_err());
    }
}
