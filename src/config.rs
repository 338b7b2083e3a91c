//! Simulator configuration
//!
//! Defaults match the published simulator pages. A JSON file may replace any field,
//! and the environment has the final say:
//!   SIMULATOR_PHONE, SIMULATOR_SHARE_URL

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SimulationResult;

/// Contact number that receives shared simulations
pub const DEFAULT_CONTACT_PHONE: &str = "5511999999999";

/// Messaging endpoint used for share links
pub const DEFAULT_SHARE_BASE_URL: &str = "https://api.whatsapp.com/send";

pub const PHONE_ENV: &str = "SIMULATOR_PHONE";
pub const SHARE_URL_ENV: &str = "SIMULATOR_SHARE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    #[serde(default = "default_contact_phone")]
    pub contact_phone: String,

    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
}

fn default_contact_phone() -> String { DEFAULT_CONTACT_PHONE.to_string() }
fn default_share_base_url() -> String { DEFAULT_SHARE_BASE_URL.to_string() }

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            contact_phone: default_contact_phone(),
            share_base_url: default_share_base_url(),
        }
    }
}

impl SimulatorConfig {
    /// Load configuration from a JSON file; missing fields keep their defaults
    pub fn from_json_path(path: &Path) -> SimulationResult<Self> {
        let file = std::fs::File::open(path)?;
        let config = serde_json::from_reader(file)?;
        log::debug!("Loaded simulator config from {}", path.display());
        Ok(config)
    }

    /// Resolve the effective configuration: optional file, then environment
    pub fn load(path: Option<&Path>) -> SimulationResult<Self> {
        let base = match path {
            Some(path) => Self::from_json_path(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply overrides from a key lookup (normally the process environment)
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(phone) = lookup(PHONE_ENV).filter(|v| !v.trim().is_empty()) {
            self.contact_phone = phone.trim().to_string();
        }
        if let Some(url) = lookup(SHARE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.share_base_url = url.trim().to_string();
        }
        self
    }
}
