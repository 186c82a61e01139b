use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use tokio::fs;
use tracing::{info, warn};

use warplog_domain::{BannerCatalog, BannerCatalogRepository, BannerDefinition, CatalogEntry};

use crate::utils::sha256_hex;

/// Banner catalog kept in a JSON or YAML file (by extension) holding a list
/// of published banner entries. The revision is the SHA-256 of the file.
pub struct BannerCatalogFile {
    path: PathBuf,
}

impl BannerCatalogFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn is_yaml(&self) -> bool {
        matches!(
            self.path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        )
    }
}

/// Entries that fail to decode or validate are skipped with a warning; the
/// first definition of a banner id wins.
pub fn parse_catalog(bytes: &[u8], yaml: bool) -> anyhow::Result<BannerCatalog> {
    let entries: Vec<Result<CatalogEntry, String>> = if yaml {
        let values: Vec<serde_yaml::Value> = serde_yaml::from_slice(bytes)?;
        values
            .into_iter()
            .map(|value| serde_yaml::from_value(value).map_err(|err| err.to_string()))
            .collect()
    } else {
        let values: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;
        values
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(|err| err.to_string()))
            .collect()
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut definitions = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let definition = entry
            .map_err(|err| anyhow!(err))
            .and_then(|entry| BannerDefinition::try_from(entry).map_err(|err| anyhow!(err)));
        match definition {
            Ok(definition) => {
                if !seen.insert(definition.banner_id.to_string()) {
                    warn!(
                        "catalog entry {}: duplicate banner id {}, keeping the first",
                        index, definition.banner_id
                    );
                    continue;
                }
                definitions.push(definition);
            }
            Err(err) => warn!("catalog entry {} skipped: {}", index, err),
        }
    }
    Ok(BannerCatalog::new(definitions).with_revision(sha256_hex(bytes)))
}

#[async_trait]
impl BannerCatalogRepository for BannerCatalogFile {
    async fn load_catalog(&self) -> anyhow::Result<BannerCatalog> {
        let bytes = fs::read(&self.path)
            .await
            .with_context(|| format!("reading banner catalog {}", self.path.display()))?;
        let catalog = parse_catalog(&bytes, self.is_yaml())
            .with_context(|| format!("decoding banner catalog {}", self.path.display()))?;
        info!(
            "read {} banners from {}",
            catalog.len(),
            self.path.display()
        );
        Ok(catalog)
    }
}
