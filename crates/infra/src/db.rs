//! Database connection pool wiring.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::AppConfig;

/// Build the Postgres pool and establish one connection up front, so an
/// unreachable database is reported at startup rather than on first request.
pub async fn connect(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    info!(max_connections = config.max_connections, "connected to postgres");
    Ok(pool)
}
