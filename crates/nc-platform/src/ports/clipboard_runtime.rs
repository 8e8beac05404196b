use anyhow::Result;
use async_trait::async_trait;

/// Lifecycle of the component that drives clipboard sampling.
///
/// Both operations are idempotent.
#[async_trait]
pub trait ClipboardRuntimePort: Send + Sync {
    async fn start(&self) -> Result<()>;
    async fn stop(&self) -> Result<()>;
    fn is_running(&self) -> bool;
}
