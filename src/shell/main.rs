use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use activities::modules::activities::adapters::outbound::activity_registry::in_memory::InMemoryActivityRegistry;
use activities::shell::config::Config;
use activities::shell::http::router;
use activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("activities=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let registry = Arc::new(InMemoryActivityRegistry::seeded());
    let state = AppState::in_memory(registry);
    let app = router(state, &config.static_dir);

    let addr = config.socket_addr()?;
    tracing::info!("Activities API: http://{}/activities", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
