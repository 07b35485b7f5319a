use async_trait::async_trait;

use crate::registry::{PersistedRecord, RegistryRecord};

/// Durable storage for the history registry.
///
/// # Behavior / 行为
/// - `load` returns records in stored order; a missing registry is an empty list.
/// - `save` replaces the whole registry with `records` (last writer wins).
///
/// - `load` 按存储顺序返回；不存在时返回空列表。
/// - `save` 整体覆盖写入。
#[async_trait]
pub trait RegistryPort: Send + Sync {
    async fn load(&self) -> anyhow::Result<Vec<PersistedRecord>>;
    async fn save(&self, records: &[RegistryRecord]) -> anyhow::Result<()>;
}
