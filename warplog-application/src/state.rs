use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use warplog_domain::ports::{BannerCatalogRepository, HealthCheckService, PullRepository};
use warplog_domain::{BannerCatalog, RuntimeConfig};

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub pull_repo: Arc<dyn PullRepository>,
    pub catalog_repo: Arc<dyn BannerCatalogRepository>,
    pub health_service: Arc<dyn HealthCheckService>,
    /// Replaced wholesale on reload; readers clone the snapshot.
    pub catalog: Arc<RwLock<BannerCatalog>>,
    /// Held across the read-dedup-append sequence of an import.
    pub import_lock: Arc<Mutex<()>>,
    pub metrics: Arc<Metrics>,
}
