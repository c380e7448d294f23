use async_trait::async_trait;
use indexmap::IndexMap;

use crate::modules::activities::core::activity::Activity;

#[async_trait]
pub trait ActivityQueries {
    /// Every activity keyed by name, in registry order.
    async fn list_all(&self) -> anyhow::Result<IndexMap<String, Activity>>;
}
