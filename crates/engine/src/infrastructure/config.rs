//! Application configuration

use std::env;

use anyhow::{bail, Context, Result};

use crate::infrastructure::firestore::{
    FirestoreConfig, DEFAULT_DATABASE, DEFAULT_FIRESTORE_BASE_URL,
};

/// Which store backs the inventory collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process-local map, lost on restart
    Memory,
    /// Cloud Firestore over REST
    Firestore(FirestoreSettings),
}

/// Firestore connection settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirestoreSettings {
    pub project_id: String,
    pub base_url: String,
    pub api_key: Option<String>,
    pub bearer_token: Option<String>,
    pub timeout_secs: u64,
}

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Inventory store backend
    pub backend: StoreBackend,
    /// Name of the remote collection holding the items
    pub collection: String,

    /// HTTP bind host
    pub server_host: String,
    /// HTTP bind port
    pub server_port: u16,

    /// CORS allowed origins (comma-separated, or "*" for any). Empty disables CORS.
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend = match var("INVENTORY_BACKEND")
            .unwrap_or_else(|| "memory".to_string())
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "memory" => StoreBackend::Memory,
            "firestore" => StoreBackend::Firestore(FirestoreSettings {
                project_id: var("FIRESTORE_PROJECT_ID").context(
                    "FIRESTORE_PROJECT_ID environment variable is required for the firestore backend",
                )?,
                base_url: var("FIRESTORE_BASE_URL")
                    .or_else(|| var("FIRESTORE_EMULATOR_HOST").map(|h| format!("http://{h}/v1")))
                    .unwrap_or_else(|| DEFAULT_FIRESTORE_BASE_URL.to_string()),
                api_key: var("FIRESTORE_API_KEY"),
                bearer_token: var("FIRESTORE_BEARER_TOKEN"),
                timeout_secs: var("FIRESTORE_TIMEOUT_SECS")
                    .unwrap_or_else(|| "30".to_string())
                    .parse()
                    .context("FIRESTORE_TIMEOUT_SECS must be a whole number of seconds")?,
            }),
            other => bail!("INVENTORY_BACKEND must be 'memory' or 'firestore', got '{other}'"),
        };

        Ok(Self {
            backend,
            collection: var("INVENTORY_COLLECTION").unwrap_or_else(|| "inventory".to_string()),

            server_host: var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: var("SERVER_PORT")
                .or_else(|| var("PORT"))
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,

            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }

    /// `host:port` to bind the HTTP listener on
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Firestore client settings, if that backend is selected
    pub fn firestore(&self) -> Option<FirestoreConfig> {
        match &self.backend {
            StoreBackend::Memory => None,
            StoreBackend::Firestore(settings) => Some(FirestoreConfig {
                base_url: settings.base_url.clone(),
                project_id: settings.project_id.clone(),
                database: DEFAULT_DATABASE.to_string(),
                collection: self.collection.clone(),
                api_key: settings.api_key.clone(),
                bearer_token: settings.bearer_token.clone(),
                timeout_secs: settings.timeout_secs,
            }),
        }
    }
}
