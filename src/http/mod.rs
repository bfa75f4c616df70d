pub mod page;
pub mod routes;

use crate::config::StoreConfig;
use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

/// 上傳內容整份讀進記憶體，先用大小上限擋住異常請求
const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub store: StoreConfig,
}

pub fn router(store: StoreConfig) -> Router {
    Router::new()
        .route("/", get(routes::upload_page))
        .route("/upload/", post(routes::upload_csv))
        .with_state(AppState { store })
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

pub async fn serve(bind_addr: &str, store: StoreConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(store))
        .await
        .context("server failed")
}
