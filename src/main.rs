//! Book API server: loads settings, picks the store, serves the router.

use book_api::{
    build_router, ensure_book_table, AppState, BookStore, MemoryBookStore, PgBookStore, Settings,
    StoreKind,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("book_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;

    let store: Arc<dyn BookStore> = match settings.store {
        StoreKind::Postgres => {
            let store = PgBookStore::new(&settings.database_url)?;
            if settings.ensure_schema {
                ensure_book_table(&store).await?;
                tracing::info!("book table ready");
            }
            Arc::new(store)
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            Arc::new(MemoryBookStore::new())
        }
    };

    let app = build_router(AppState::new(store), &settings);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
