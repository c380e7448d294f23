use std::sync::Arc;

use crate::modules::activities::adapters::outbound::activity_registry::{
    ActivityRegistry, RegistryError,
};
use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::use_cases::unregister::command::Unregister;
use crate::modules::activities::use_cases::unregister::decide::decide_unregister;
use crate::modules::activities::use_cases::unregister::decision::Decision;

pub struct UnregisterHandler<TRegistry>
where
    TRegistry: ActivityRegistry + 'static,
{
    registry: Arc<TRegistry>,
}

impl<TRegistry> UnregisterHandler<TRegistry>
where
    TRegistry: ActivityRegistry + 'static,
{
    pub fn new(registry: Arc<TRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, command: Unregister) -> Result<(), ApplicationError> {
        let outcome = self
            .registry
            .update_participants(&command.activity_name, |activity| {
                match decide_unregister(activity, &command) {
                    Decision::Accepted { participants } => Ok(participants),
                    Decision::Rejected { reason } => Err(reason),
                }
            })
            .await;

        match outcome {
            Ok(Ok(())) => {
                tracing::info!(activity = %command.activity_name, "participant unregistered");
                tracing::debug!(email = %command.email, "unregistered email");
                Ok(())
            }
            Ok(Err(reason)) => Err(ApplicationError::InvalidOperation(reason.to_string())),
            Err(RegistryError::UnknownActivity(name)) => Err(ApplicationError::NotFound(name)),
            Err(e) => Err(e.into()),
        }
    }
}
