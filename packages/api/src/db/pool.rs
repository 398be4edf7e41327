//! Database connection pool.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::Database;

/// Open a connection pool and check that the server answers.
pub async fn connect(database: &Database) -> Result<PgPool, sqlx::Error> {
    info!(
        "Connecting to PostgreSQL at {}:{}/{}",
        database.host, database.port, database.database
    );

    PgPoolOptions::new()
        .max_connections(database.connections)
        .connect(&database.url())
        .await
}

/// Create or upgrade the schema.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
