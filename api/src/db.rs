//! # Database module — PostgreSQL pool and schema bootstrap
//!
//! The server opens one pool at startup and creates the tables if they don't
//! exist; there is no separate migration step for this schema.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Open a connection pool against `url`.
pub async fn connect(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}

/// Create the tables and indexes if they don't exist.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        );",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS notes (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            owner_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            title TEXT NOT NULL,
            body TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        );",
    )
    .execute(pool)
    .await?;

    // list() reads are always owner-scoped and ordered by update recency.
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS notes_owner_updated_idx
            ON notes (owner_id, updated_at DESC);",
    )
    .execute(pool)
    .await?;

    Ok(())
}
