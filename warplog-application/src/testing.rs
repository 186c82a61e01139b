// In-memory ports for application tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{Mutex, RwLock};

use warplog_domain::ports::{BannerCatalogRepository, HealthCheckService, PullRepository};
use warplog_domain::{
    parse_window_bound, BannerCatalog, BannerDefinition, BannerId, Category, FeaturedItem, ItemId,
    PlayerId, PullRecord, Rarity, RawPullRecord, RuntimeConfig,
};

use crate::{AppState, Metrics};

#[derive(Default)]
pub struct InMemoryPullRepository {
    pulls: Mutex<HashMap<PlayerId, Vec<PullRecord>>>,
}

#[async_trait]
impl PullRepository for InMemoryPullRepository {
    async fn get_all_pulls(&self, player_id: &PlayerId) -> anyhow::Result<Vec<PullRecord>> {
        Ok(self
            .pulls
            .lock()
            .await
            .get(player_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn append_pulls(&self, player_id: &PlayerId, pulls: &[PullRecord]) -> anyhow::Result<usize> {
        self.pulls
            .lock()
            .await
            .entry(player_id.clone())
            .or_default()
            .extend_from_slice(pulls);
        Ok(pulls.len())
    }

    async fn list_players(&self) -> anyhow::Result<Vec<PlayerId>> {
        let mut players: Vec<PlayerId> = self.pulls.lock().await.keys().cloned().collect();
        players.sort();
        Ok(players)
    }

    async fn delete_player(&self, player_id: &PlayerId) -> anyhow::Result<bool> {
        Ok(self.pulls.lock().await.remove(player_id).is_some())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

pub struct StaticCatalogRepository(pub BannerCatalog);

#[async_trait]
impl BannerCatalogRepository for StaticCatalogRepository {
    async fn load_catalog(&self) -> anyhow::Result<BannerCatalog> {
        Ok(self.0.clone())
    }
}

pub struct AlwaysHealthy;

#[async_trait]
impl HealthCheckService for AlwaysHealthy {
    async fn check_storage(&self) -> anyhow::Result<bool> {
        Ok(true)
    }

    async fn check_catalog(&self) -> anyhow::Result<bool> {
        Ok(true)
    }
}

pub fn test_config() -> RuntimeConfig {
    RuntimeConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        api_token: None,
        data_dir: "./data".to_string(),
        banner_catalog_path: "./banners.json".to_string(),
        source_utc_offset_hours: 8,
        max_body_bytes: 1024 * 1024,
        request_timeout_seconds: 5,
        max_import_records: 10_000,
    }
}

fn banner(id: &str, category: Category, start: &str, end: &str, featured: &str) -> BannerDefinition {
    BannerDefinition {
        banner_id: BannerId(id.to_string()),
        category,
        name: format!("banner {}", id),
        start_time: parse_window_bound(start, false).expect("start"),
        end_time: parse_window_bound(end, true).expect("end"),
        featured_items: vec![FeaturedItem {
            item_id: ItemId(featured.to_string()),
            rarity: Rarity::Five,
            name: None,
        }],
    }
}

pub fn sample_catalog() -> BannerCatalog {
    BannerCatalog::new(vec![
        banner("b1", Category::CharacterEvent, "2024-01-01", "2024-01-10", "1308"),
        banner("b2", Category::CharacterEvent, "2024-01-11", "2024-01-20", "1309"),
        banner("lc", Category::LightConeEvent, "2024-01-01", "2024-01-20", "23001"),
    ])
}

/// State whose catalog repository serves `catalog`, with nothing loaded yet.
pub fn test_state_with(catalog: BannerCatalog) -> AppState {
    AppState {
        config: test_config(),
        pull_repo: Arc::new(InMemoryPullRepository::default()),
        catalog_repo: Arc::new(StaticCatalogRepository(catalog)),
        health_service: Arc::new(AlwaysHealthy),
        catalog: Arc::new(RwLock::new(BannerCatalog::default())),
        import_lock: Arc::new(Mutex::new(())),
        metrics: Arc::new(Metrics::default()),
    }
}

/// State with the sample catalog already loaded.
pub fn test_state() -> AppState {
    let state = test_state_with(sample_catalog());
    AppState {
        catalog: Arc::new(RwLock::new(sample_catalog())),
        ..state
    }
}

/// Vendor-shaped record on banner "b1". 5★ rows pull the b1 featured item.
pub fn raw(id: u64, uid: &str, gacha_type: &str, rank_type: &str, time: &str) -> RawPullRecord {
    let item_id = if rank_type == "5" { "1308" } else { "20000" };
    RawPullRecord {
        uid: Some(uid.to_string()),
        gacha_id: Some("b1".to_string()),
        gacha_type: Some(gacha_type.to_string()),
        item_id: Some(item_id.to_string()),
        name: Some(format!("item {}", item_id)),
        item_type: None,
        rank_type: Some(rank_type.to_string()),
        time: Some(time.to_string()),
        id: Some(id.to_string()),
        count: Some("1".to_string()),
        lang: Some("en-us".to_string()),
    }
}

/// Request-shaped rows, as the HTTP layer hands them over.
pub fn rows(records: Vec<RawPullRecord>) -> Vec<Value> {
    records
        .into_iter()
        .map(|record| serde_json::to_value(record).expect("row"))
        .collect()
}

pub const PLAYER: &str = "800000001";

/// Six Character Event pulls across b1 and b2, one Light Cone and one
/// Standard pull, imported through the regular command.
pub async fn seeded_state() -> AppState {
    let state = test_state();
    let mut off_rate = raw(5, PLAYER, "11", "5", "2024-01-12 09:00:00");
    off_rate.gacha_id = Some("b2".to_string());
    let mut after = raw(6, PLAYER, "11", "3", "2024-01-13 09:00:00");
    after.gacha_id = Some("b2".to_string());
    let records = vec![
        raw(1, PLAYER, "11", "3", "2024-01-02 10:00:00"),
        raw(2, PLAYER, "11", "3", "2024-01-02 10:00:01"),
        raw(3, PLAYER, "11", "5", "2024-01-02 10:00:02"),
        raw(4, PLAYER, "11", "3", "2024-01-09 10:00:00"),
        off_rate,
        after,
        raw(7, PLAYER, "12", "3", "2024-01-05 10:00:00"),
        raw(8, PLAYER, "1", "4", "2024-01-06 10:00:00"),
    ];
    crate::commands::import_commands::import_pulls(&state, PLAYER, rows(records))
        .await
        .expect("seed import");
    state
}
