use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use roster_core::tracing::init_tracing;
use roster_groups::config::GroupsConfig;
use roster_groups::router::build_router;
use roster_groups::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = GroupsConfig::from_env()?;

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let state = AppState {
        db: Arc::new(db),
        join_code_max_attempts: config.join_code_max_attempts,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.groups_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("groups service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
