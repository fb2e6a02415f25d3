use database::db::create_connection;
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use sea_orm::DbErr;
use server::{
    app,
    config::{Config, ConfigError},
    state::AppState,
    utils::{shutdown::shutdown_signal, sweep},
};
use std::{io, process::ExitCode};
use thiserror::Error;

#[derive(Debug, Error)]
enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("server error: {0}")]
    Io(#[from] io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::load()?;

    let db = create_connection(&config.database_url, config.max_connections).await?;
    info!("Connected to the database");

    if config.run_migrations {
        Migrator::up(&db, None).await?;
        info!("Applied pending migrations");
    }

    if let Some(period) = config.sweep_interval {
        info!("Completing elapsed reservations every {}s", period.as_secs());
        sweep::spawn(db.clone(), period);
    }

    info!(
        "Lead time {}h, cancel policy {}",
        config.policy.lead_time.num_hours(),
        config.policy.cancel
    );
    let app = app(AppState::new(db, config.policy));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Running axum on http://localhost:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
