use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use event_backend::shared::infrastructure::blob_store::disk::DiskBlobStore;
use event_backend::shell::{config::Settings, http, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = Settings::from_env()?;

    let blobs = Arc::new(DiskBlobStore::new(&settings.upload_dir, "/uploads"));
    let state = AppState::new(blobs);
    let app = http::router(state, &settings.upload_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "event backend listening");
    axum::serve(listener, app).await?;

    Ok(())
}
