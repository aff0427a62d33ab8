use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns the shared PostgreSQL connection pool, bootstrapping the
/// `saved_messages` table on first run. No migration framework — one table,
/// append-only, no schema evolution to manage.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS saved_messages (
            id UUID PRIMARY KEY,
            emotion TEXT NOT NULL,
            language TEXT NOT NULL,
            text TEXT NOT NULL,
            timestamp TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
