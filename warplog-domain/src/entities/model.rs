use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct PullQuery {
    pub category: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BannerListQuery {
    pub category: Option<String>,
    #[serde(default)]
    pub include_empty: bool,
}

#[derive(Debug, Deserialize)]
pub struct TimelineQuery {
    /// Comma separated codes or names.
    pub categories: Option<String>,
    /// `YYYY-MM-DD`, inclusive.
    pub since: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub active: bool,
}

/// The shapes an import body may take: a bare list, one vendor page, or a
/// full vendor response. Rows stay undecoded so that each one is checked on
/// its own during normalization.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ImportPayload {
    Records(Vec<Value>),
    Page { list: Vec<Value> },
    Response { data: ImportPage },
}

#[derive(Debug, Deserialize)]
pub struct ImportPage {
    #[serde(default)]
    pub list: Vec<Value>,
}

impl ImportPayload {
    pub fn into_records(self) -> Vec<Value> {
        match self {
            ImportPayload::Records(records) => records,
            ImportPayload::Page { list } => list,
            ImportPayload::Response { data } => data.list,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BannerOverlap {
    pub category: String,
    pub first: String,
    pub second: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogDiagnostics {
    pub revision: Option<String>,
    pub banners: usize,
    pub overlaps: Vec<BannerOverlap>,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub data_dir: String,
    pub banner_catalog_path: String,
    pub source_utc_offset_hours: i32,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub max_import_records: usize,
}
