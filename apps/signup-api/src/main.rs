use signup_api::{config::SignupConfig, router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "signup_api=debug,activity_directory=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config
    let config = SignupConfig::load()?;
    tracing::info!("Activity signup service starting...");
    tracing::info!("Capacity enforced: {}", config.enforce_capacity);

    let state = AppState::from_config(&config)?;
    tracing::info!("Loaded {} activities", state.directory.len().await);

    let app = router(state);

    let addr = config.socket_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
