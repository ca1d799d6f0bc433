use sqlx::{postgres::PgPoolOptions, PgPool};

/// Upper bound on pooled connections
const MAX_CONNECTIONS: u32 = 5;

/// Creates the PostgreSQL connection pool shared by the repositories
pub async fn create_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await?;

    Ok(pool)
}
