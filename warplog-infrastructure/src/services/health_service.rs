use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use warplog_domain::ports::{HealthCheckService, PullRepository};
use warplog_domain::BannerCatalog;

pub struct DefaultHealthService {
    pull_repo: Arc<dyn PullRepository>,
    catalog: Arc<RwLock<BannerCatalog>>,
}

impl DefaultHealthService {
    pub fn new(pull_repo: Arc<dyn PullRepository>, catalog: Arc<RwLock<BannerCatalog>>) -> Self {
        Self { pull_repo, catalog }
    }
}

#[async_trait]
impl HealthCheckService for DefaultHealthService {
    async fn check_storage(&self) -> anyhow::Result<bool> {
        self.pull_repo.ping().await.map(|_| true)
    }

    /// Ready only once a catalog with at least one banner is loaded.
    async fn check_catalog(&self) -> anyhow::Result<bool> {
        Ok(!self.catalog.read().await.is_empty())
    }
}
