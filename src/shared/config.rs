//! Application configuration. Trello credentials, list ids, server settings.

use crate::domain::DomainError;
use serde::Deserialize;
use std::time::Duration;

/// Trello REST API root. Override with TRELLO_BASE_URL (e.g. a mock server in tests).
pub const DEFAULT_TRELLO_BASE_URL: &str = "https://api.trello.com/1";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Per-request timeout for board service calls.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Raw configuration as loaded. Validated into [`TrelloConfig`] before use.
#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Address the HTTP server listens on. Read from NEXT_ACTIONS_BIND_ADDR.
    #[serde(default)]
    pub bind_addr: Option<String>,

    /// Board service request timeout in seconds. Read from NEXT_ACTIONS_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Trello Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Trello API root. Read from TRELLO_BASE_URL.
    #[serde(default)]
    pub trello_base_url: Option<String>,

    /// Trello API key. Read from TRELLO_KEY.
    #[serde(default)]
    pub trello_key: Option<String>,

    /// Trello API token. Read from TRELLO_TOKEN.
    #[serde(default)]
    pub trello_token: Option<String>,

    /// List holding standalone next actions. Read from TRELLO_NEXT_ACTIONS_LIST_ID.
    #[serde(default)]
    pub trello_next_actions_list_id: Option<String>,

    /// List holding one card per project. Read from TRELLO_PROJECTS_LIST_ID.
    #[serde(default)]
    pub trello_projects_list_id: Option<String>,
}

/// Validated, immutable settings handed to the board service client and the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrelloConfig {
    /// API root without a trailing slash.
    pub base_url: String,
    pub api_key: String,
    pub api_token: String,
    pub next_actions_list_id: String,
    pub projects_list_id: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("NEXT_ACTIONS").try_parsing(true));
        if let Ok(path) = std::env::var("NEXT_ACTIONS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // Trello settings use their own unprefixed names so one .env serves every tool
        let trello_vars: [(&str, &mut Option<String>); 5] = [
            ("TRELLO_BASE_URL", &mut cfg.trello_base_url),
            ("TRELLO_KEY", &mut cfg.trello_key),
            ("TRELLO_TOKEN", &mut cfg.trello_token),
            ("TRELLO_NEXT_ACTIONS_LIST_ID", &mut cfg.trello_next_actions_list_id),
            ("TRELLO_PROJECTS_LIST_ID", &mut cfg.trello_projects_list_id),
        ];
        for (name, slot) in trello_vars {
            if let Ok(value) = std::env::var(name) {
                *slot = Some(value);
            }
        }
        Ok(cfg)
    }

    /// Returns the listen address. Defaults to 0.0.0.0:8080.
    pub fn bind_addr_or_default(&self) -> String {
        self.bind_addr
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
    }

    /// Returns the board service request timeout. Defaults to 10 seconds.
    pub fn request_timeout_or_default(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Validate the Trello settings. Every id and credential is required.
    pub fn trello_config(&self) -> Result<TrelloConfig, DomainError> {
        let base_url = match self.trello_base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_TRELLO_BASE_URL,
        };
        reqwest::Url::parse(base_url).map_err(|e| {
            DomainError::Config(format!("TRELLO_BASE_URL is not a valid URL: {}", e))
        })?;

        Ok(TrelloConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: required("TRELLO_KEY", &self.trello_key)?,
            api_token: required("TRELLO_TOKEN", &self.trello_token)?,
            next_actions_list_id: required(
                "TRELLO_NEXT_ACTIONS_LIST_ID",
                &self.trello_next_actions_list_id,
            )?,
            projects_list_id: required("TRELLO_PROJECTS_LIST_ID", &self.trello_projects_list_id)?,
        })
    }
}

fn required(name: &str, value: &Option<String>) -> Result<String, DomainError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(DomainError::Config(format!(
            "{} is a required environment variable",
            name
        ))),
    }
}
