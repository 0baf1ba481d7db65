//! Database connection pool management
//!
//! One PgPool is created at startup and shared by every request.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// Fails if the database can't be reached, so a bad connection string
/// stops startup instead of surfacing on the first request.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/gym").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with a custom connection limit.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    ping(&pool).await?;
    tracing::debug!(max_connections, "database pool ready");

    Ok(pool)
}

/// Round-trip a trivial query to confirm the database answers.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
