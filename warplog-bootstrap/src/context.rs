use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use warplog_application::commands::catalog_commands;
use warplog_application::{AppState, Metrics};
use warplog_domain::{BannerCatalog, PullRepository};
use warplog_infrastructure::{AppConfig, BannerCatalogFile, DefaultHealthService, JsonPullStore};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    /// Wires the adapters into an `AppState`. A catalog that fails to load
    /// leaves the service running but not ready until a reload succeeds.
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();

        let pull_repo: Arc<dyn PullRepository> =
            Arc::new(JsonPullStore::new(&runtime_config.data_dir));
        pull_repo.ping().await?;
        info!(
            "pull store at {} ({} players)",
            runtime_config.data_dir,
            pull_repo.list_players().await?.len()
        );

        let catalog = Arc::new(RwLock::new(BannerCatalog::default()));
        let state = AppState {
            catalog_repo: Arc::new(BannerCatalogFile::new(&runtime_config.banner_catalog_path)),
            health_service: Arc::new(DefaultHealthService::new(
                pull_repo.clone(),
                catalog.clone(),
            )),
            config: runtime_config,
            pull_repo,
            catalog,
            import_lock: Arc::new(Mutex::new(())),
            metrics: Arc::new(Metrics::default()),
        };

        if let Err(err) = catalog_commands::reload_catalog(&state).await {
            warn!(
                "starting without a banner catalog ({}): {}",
                state.config.banner_catalog_path, err
            );
        }

        Ok(Self { state })
    }
}
