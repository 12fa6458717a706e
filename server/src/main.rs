//! QuillNotes API server entry point.

use std::sync::Arc;

use api::auth::token::TokenKeys;
use api::db;
use api::repo::{PgNoteStore, PgUserStore};
use server::routes;
use server::settings::Settings;
use server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::new()?;

    let pool = db::connect(&settings.database.url()).await?;
    db::init_schema(&pool).await?;

    let state = AppState {
        users: Arc::new(PgUserStore::new(pool.clone())),
        notes: Arc::new(PgNoteStore::new(pool)),
        keys: Arc::new(TokenKeys::new(settings.auth.secret.as_bytes())),
    };

    let app = routes::router(state);
    let addr = settings.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => result?,
        _ = tokio::signal::ctrl_c() => tracing::info!("shutdown signal received"),
    }

    Ok(())
}
