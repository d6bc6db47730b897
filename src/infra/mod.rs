use crate::{adapters::persistence::PostgresPersistence, infra::config::AppConfig};

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod setup;

pub use error::InfraError;

pub async fn postgres_persistence(config: &AppConfig) -> Result<PostgresPersistence, InfraError> {
    let pool = db::init_db(
        &config.database_url,
        config.database_max_connections,
        config.db_timeout,
    )
    .await?;

    if config.run_migrations {
        db::run_migrations(&pool).await?;
    }

    Ok(PostgresPersistence::new(pool))
}
