use async_trait::async_trait;

use crate::entities::PullRecord;
use crate::services::BannerCatalog;
use crate::value_objects::PlayerId;

#[async_trait]
pub trait PullRepository: Send + Sync {
    /// Every stored pull of the player, in no particular order, unique by id.
    async fn get_all_pulls(&self, player_id: &PlayerId) -> anyhow::Result<Vec<PullRecord>>;
    /// Appends pulls the caller has already deduplicated. Returns how many were written.
    async fn append_pulls(&self, player_id: &PlayerId, pulls: &[PullRecord]) -> anyhow::Result<usize>;
    /// Players with a stored history, sorted.
    async fn list_players(&self) -> anyhow::Result<Vec<PlayerId>>;
    /// Drops the player's whole history. Returns false when nothing was stored.
    async fn delete_player(&self, player_id: &PlayerId) -> anyhow::Result<bool>;
    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait BannerCatalogRepository: Send + Sync {
    async fn load_catalog(&self) -> anyhow::Result<BannerCatalog>;
}
