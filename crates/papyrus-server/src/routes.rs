use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use papyrus_core::error::ExtractError;
use papyrus_core::traits::{Fetcher, PdfParser};

use crate::dto::{
    BatchExtractRequest, BatchExtractResponse, ExtractRequest, ExtractResponse, HealthResponse,
};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes.
pub fn router<F, P>(state: Arc<AppState<F, P>>) -> Router
where
    F: Fetcher + 'static,
    P: PdfParser + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/v1/extract", post(extract_text::<F, P>))
        .route("/v1/extract/batch", post(extract_batch::<F, P>))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "system"
)]
pub async fn health() -> impl IntoResponse {
    axum::Json(HealthResponse { status: "healthy" })
}

#[utoipa::path(
    post,
    path = "/v1/extract",
    request_body = ExtractRequest,
    responses(
        (status = 200, description = "Extracted text", body = ExtractResponse),
        (status = 400, description = "URL invalid or unfetchable", body = crate::dto::ErrorResponse),
        (status = 408, description = "Download timed out", body = crate::dto::ErrorResponse),
        (status = 422, description = "PDF could not be processed", body = crate::dto::ErrorResponse),
    ),
    tag = "extract"
)]
pub async fn extract_text<F, P>(
    State(state): State<Arc<AppState<F, P>>>,
    axum::Json(body): axum::Json<ExtractRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    F: Fetcher + 'static,
    P: PdfParser + 'static,
{
    tracing::info!(url = %body.url, "Extraction requested");
    let extracted = state.service.extract_from_url(&body.url).await?;
    Ok(axum::Json(ExtractResponse::from(extracted)))
}

#[utoipa::path(
    post,
    path = "/v1/extract/batch",
    request_body = BatchExtractRequest,
    responses(
        (status = 200, description = "Per-URL results and errors", body = BatchExtractResponse),
        (status = 400, description = "Empty URL list", body = crate::dto::ErrorResponse),
    ),
    tag = "extract"
)]
pub async fn extract_batch<F, P>(
    State(state): State<Arc<AppState<F, P>>>,
    axum::Json(body): axum::Json<BatchExtractRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    F: Fetcher + 'static,
    P: PdfParser + 'static,
{
    if body.urls.is_empty() {
        return Err(ApiError(ExtractError::Url("No URLs provided".into())));
    }

    tracing::info!(urls = body.urls.len(), "Batch extraction requested");
    let report = state
        .service
        .extract_batch(&body.urls, state.settings.max_concurrency)
        .await;

    Ok(axum::Json(BatchExtractResponse::from(report)))
}
