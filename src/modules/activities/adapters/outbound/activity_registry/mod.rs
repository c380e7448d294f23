// Port for the activity registry.
//
// Participant changes go through update_participants: the registry hands the
// current activity to the caller's decision and stores the returned roster
// while still holding the activity exclusively. Two updates of the same
// activity never interleave.

pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::activities::core::activity::Activity;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown activity: {0}")]
    UnknownActivity(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ActivityRegistry: Send + Sync {
    async fn load(&self, name: &str) -> Result<Option<Activity>, RegistryError>;

    /// Runs `decide` against the stored activity and, on `Ok`, replaces its
    /// participants with the returned list. A rejection is handed back as the
    /// inner `Err` and leaves the activity untouched.
    async fn update_participants<F, E>(
        &self,
        name: &str,
        decide: F,
    ) -> Result<Result<(), E>, RegistryError>
    where
        F: FnOnce(&Activity) -> Result<Vec<String>, E> + Send,
        E: Send;
}
