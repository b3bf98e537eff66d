use axum_helpers::server::create_app;
use cae_api::{build_router, config::Config};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_cae_projects::InMemoryStore;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    // One store per process, constructed here and injected; it lives as
    // long as the server does.
    let store = InMemoryStore::shared();
    let app = build_router(store);

    info!("Starting {} v{}", config.app.name, config.app.version);

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("CAE API shutdown complete");
    Ok(())
}
