use std::sync::Arc;

use crate::modules::activities::adapters::outbound::activity_registry::{
    ActivityRegistry, RegistryError,
};
use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::use_cases::sign_up::command::SignUp;
use crate::modules::activities::use_cases::sign_up::decide::decide_sign_up;
use crate::modules::activities::use_cases::sign_up::decision::Decision;

pub struct SignUpHandler<TRegistry>
where
    TRegistry: ActivityRegistry + 'static,
{
    registry: Arc<TRegistry>,
}

impl<TRegistry> SignUpHandler<TRegistry>
where
    TRegistry: ActivityRegistry + 'static,
{
    pub fn new(registry: Arc<TRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, command: SignUp) -> Result<(), ApplicationError> {
        let outcome = self
            .registry
            .update_participants(&command.activity_name, |activity| {
                match decide_sign_up(activity, &command) {
                    Decision::Accepted { participants } => Ok(participants),
                    Decision::Rejected { reason } => Err(reason),
                }
            })
            .await;

        match outcome {
            Ok(Ok(())) => {
                tracing::info!(activity = %command.activity_name, "participant signed up");
                tracing::debug!(email = %command.email, "signed up email");
                Ok(())
            }
            Ok(Err(reason)) => Err(ApplicationError::InvalidOperation(reason.to_string())),
            Err(RegistryError::UnknownActivity(name)) => Err(ApplicationError::NotFound(name)),
            Err(e) => Err(e.into()),
        }
    }
}
