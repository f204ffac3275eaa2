use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use vehicle_commands::shell::config::AppConfig;
use vehicle_commands::shell::state::AppState;
use vehicle_commands::shell::{graphql, http};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    if config.vins.is_empty() {
        tracing::warn!("no vehicles configured, set VEHICLE_COMMANDS_VINS");
    }

    // Dry-run sinks until a real transport is wired in
    let state = AppState::dry_run(&config.vins, config.history);

    let app = http::router(state.clone())
        .merge(graphql::router(graphql::schema(state)))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!(
        vehicles = config.vins.len(),
        history = config.history,
        "command endpoint: http://{}/api/1/vehicles",
        config.addr
    );
    tracing::info!("GraphQL endpoint: http://{}/gql", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
