use std::sync::Arc;

use crate::modules::activities::adapters::outbound::activity_registry::in_memory::InMemoryActivityRegistry;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up::handler::SignUpHandler;
use crate::modules::activities::use_cases::unregister::handler::UnregisterHandler;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub sign_up_handler: Arc<SignUpHandler<InMemoryActivityRegistry>>,
    pub unregister_handler: Arc<UnregisterHandler<InMemoryActivityRegistry>>,
}

impl AppState {
    /// Wires every use case to the same registry instance.
    pub fn in_memory(registry: Arc<InMemoryActivityRegistry>) -> Self {
        Self {
            queries: registry.clone(),
            sign_up_handler: Arc::new(SignUpHandler::new(registry.clone())),
            unregister_handler: Arc::new(UnregisterHandler::new(registry)),
        }
    }
}
