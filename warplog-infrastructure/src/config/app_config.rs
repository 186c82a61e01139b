use std::env;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use warplog_domain::RuntimeConfig;

use crate::config::validation::{
    validate_bind_addr, validate_path, validate_positive, validate_utc_offset,
};

pub const CONFIG_ENV: &str = "WARPLOG_CONFIG";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub data_dir: String,
    pub banner_catalog_path: String,
    /// Timezone the source writes its timestamps in, as hours east of UTC.
    pub source_utc_offset_hours: i32,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub max_import_records: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3240".to_string(),
            api_token: None,
            data_dir: "./data".to_string(),
            banner_catalog_path: "./banners.json".to_string(),
            source_utc_offset_hours: 8,
            max_body_bytes: 8 * 1024 * 1024,
            request_timeout_seconds: 15,
            max_import_records: 50_000,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| "./config.toml".to_string());
        Self::load_from(Path::new(&path), |key| env::var(key).ok()).await
    }

    /// Reads `path` (defaults when missing), then applies overrides looked up
    /// through `lookup`, resolves relative paths against the file's directory,
    /// normalizes and validates.
    pub async fn load_from<F>(path: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).await?;
            toml::from_str(&content)?
        } else {
            warn!("{} not found, using defaults", path.display());
            AppConfig::default()
        };
        config.apply_overrides(lookup);
        config.resolve_paths(path.parent());
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        if let Some(api_token) = &self.api_token {
            if api_token.trim().is_empty() {
                self.api_token = None;
            }
        }
        self.api_token = self.api_token.take().map(|token| token.trim().to_string());
        self.bind_addr = self.bind_addr.trim().to_string();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.data_dir = resolve_path(base, &self.data_dir);
        self.banner_catalog_path = resolve_path(base, &self.banner_catalog_path);
    }

    pub fn validate(&self) -> Result<()> {
        validate_bind_addr(&self.bind_addr)?;
        validate_utc_offset(self.source_utc_offset_hours)?;
        validate_positive("max_body_bytes", self.max_body_bytes)?;
        validate_positive("request_timeout_seconds", self.request_timeout_seconds)?;
        validate_positive("max_import_records", self.max_import_records as u64)?;
        validate_path("data_dir", &self.data_dir)?;
        validate_path("banner_catalog_path", &self.banner_catalog_path)?;
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            data_dir: self.data_dir.clone(),
            banner_catalog_path: self.banner_catalog_path.clone(),
            source_utc_offset_hours: self.source_utc_offset_hours,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            max_import_records: self.max_import_records,
        }
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("WARPLOG_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("WARPLOG_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Some(value) = lookup("WARPLOG_DATA_DIR") {
            self.data_dir = value;
        }
        if let Some(value) = lookup("WARPLOG_BANNER_CATALOG_PATH") {
            self.banner_catalog_path = value;
        }
        if let Some(value) = lookup("WARPLOG_SOURCE_UTC_OFFSET_HOURS") {
            self.source_utc_offset_hours =
                value.trim().parse().unwrap_or(self.source_utc_offset_hours);
        }
        if let Some(value) = lookup("WARPLOG_MAX_BODY_BYTES") {
            self.max_body_bytes = value.trim().parse().unwrap_or(self.max_body_bytes);
        }
        if let Some(value) = lookup("WARPLOG_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds =
                value.trim().parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Some(value) = lookup("WARPLOG_MAX_IMPORT_RECORDS") {
            self.max_import_records = value.trim().parse().unwrap_or(self.max_import_records);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
