// In memory implementation of the ActivityRegistry port and the
// ActivityQueries read port.
//
// Responsibilities
// - Hold the activity map in insertion order.
// - Serialise participant updates behind the write lock.

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::modules::activities::adapters::outbound::activity_registry::{
    ActivityRegistry, RegistryError,
};
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::seed::seed_activities;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;

#[derive(Default)]
pub struct InMemoryActivityRegistry {
    inner: RwLock<IndexMap<String, Activity>>,
    is_offline: bool,
}

impl InMemoryActivityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self::from_activities(seed_activities())
    }

    pub fn from_activities(activities: IndexMap<String, Activity>) -> Self {
        Self {
            inner: RwLock::new(activities),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RegistryError> {
        if self.is_offline {
            return Err(RegistryError::Backend("Activity registry offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityRegistry for InMemoryActivityRegistry {
    async fn load(&self, name: &str) -> Result<Option<Activity>, RegistryError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.get(name).cloned())
    }

    async fn update_participants<F, E>(
        &self,
        name: &str,
        decide: F,
    ) -> Result<Result<(), E>, RegistryError>
    where
        F: FnOnce(&Activity) -> Result<Vec<String>, E> + Send,
        E: Send,
    {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let activity = guard
            .get_mut(name)
            .ok_or_else(|| RegistryError::UnknownActivity(name.to_string()))?;
        Ok(decide(&*activity).map(|participants| {
            activity.participants = participants;
        }))
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityRegistry {
    async fn list_all(&self) -> anyhow::Result<IndexMap<String, Activity>> {
        self.ensure_online()?;
        Ok(self.inner.read().await.clone())
    }
}
