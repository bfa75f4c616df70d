use crate::adapters::sqlite::SqliteStore;
use crate::core::ingest;
use crate::http::{page, AppState};
use crate::utils::error::IngestError;
use crate::utils::validation::validate_upload_filename;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
}

/// GET /: self-contained upload form, no server-side state.
pub async fn upload_page() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

/// POST /upload/: ingests one uploaded CSV file into the store.
pub async fn upload_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();

            // 解析之前先檢查副檔名
            validate_upload_filename(&filename)?;

            let data = field.bytes().await?;
            upload = Some((filename, data));
            break;
        }
    }

    let Some((filename, data)) = upload else {
        return Err(IngestError::MissingUploadField.into());
    };

    tracing::info!("Ingesting upload '{}' ({} bytes)", filename, data.len());

    // 連線只活在這次請求內，處理完即關閉
    let mut store = SqliteStore::open(&state.store)?;
    let summary = ingest::ingest_csv(&mut store, &data)?;

    if summary.skipped > 0 {
        tracing::warn!(
            "Upload '{}': skipped {} rows with unexpected field counts",
            filename,
            summary.skipped
        );
    }
    tracing::info!(
        "Upload '{}': inserted {} records",
        filename,
        summary.inserted
    );

    Ok(Json(UploadResponse {
        message: summary.message(),
    }))
}

/// Maps ingestion failures onto the HTTP contract: invalid input is a 400,
/// everything else a 500, both carrying a JSON `detail` body.
#[derive(Debug)]
pub struct ApiError(IngestError);

impl<E> From<E> for ApiError
where
    E: Into<IngestError>,
{
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_invalid_input() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        tracing::error!("Upload rejected ({}): {}", status, self.0);

        let body = Json(serde_json::json!({ "detail": self.0.to_string() }));
        (status, body).into_response()
    }
}
