//! Habit tracker entry point.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use habit_tracker::inbound::http::health::HealthState;
use habit_tracker::outbound::persistence::{
    DbPool, PoolError, SchemaBootstrapError, ensure_schema,
};
use habit_tracker::settings::{HabitSettings, SettingsError};

use server::{ServerConfig, create_server};

/// Failures that stop the process before it serves traffic.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("failed to load configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Schema(#[from] SchemaBootstrapError),
    #[error("HTTP server failed: {0}")]
    Io(#[from] std::io::Error),
}

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = HabitSettings::load().map_err(|err| StartupError::Config(err.to_string()))?;
    let bind_addr = settings.bind_addr()?;

    let pool = DbPool::new(settings.pool_config()).await?;
    ensure_schema(&pool).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, pool))?;
    info!(%bind_addr, "habit tracker listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result.map_err(StartupError::from)
}
