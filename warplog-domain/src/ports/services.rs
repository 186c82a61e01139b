use async_trait::async_trait;

#[async_trait]
pub trait HealthCheckService: Send + Sync {
    async fn check_storage(&self) -> anyhow::Result<bool>;
    async fn check_catalog(&self) -> anyhow::Result<bool>;
}
