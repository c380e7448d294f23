use thiserror::Error;

use crate::modules::activities::adapters::outbound::activity_registry::RegistryError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("Activity not found")]
    NotFound(String),

    #[error("{0}")]
    InvalidOperation(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
