//! Configuration handling for the contact form

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default EmailJS service id
pub const DEFAULT_SERVICE_ID: &str = "service_e4f3d4g";
/// Default EmailJS template id
pub const DEFAULT_TEMPLATE_ID: &str = "template_q3lu86g";
/// Default EmailJS public key
pub const DEFAULT_PUBLIC_KEY: &str = "-p8cxA5RBiua3y4jz";
/// Default EmailJS API base URL
pub const DEFAULT_API_URL: &str = "https://api.emailjs.com";

/// Provider configuration for message delivery.
///
/// Every key is optional; missing keys fall back to the built-in account.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// EmailJS service id
    pub service_id: Option<String>,
    /// EmailJS template id
    pub template_id: Option<String>,
    /// EmailJS public key
    pub public_key: Option<String>,
    /// API base URL
    pub api_url: Option<String>,
}

impl ContactConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "contact", "contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: ContactConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn service_id(&self) -> &str {
        self.service_id.as_deref().unwrap_or(DEFAULT_SERVICE_ID)
    }

    pub fn template_id(&self) -> &str {
        self.template_id.as_deref().unwrap_or(DEFAULT_TEMPLATE_ID)
    }

    pub fn public_key(&self) -> &str {
        self.public_key.as_deref().unwrap_or(DEFAULT_PUBLIC_KEY)
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}
