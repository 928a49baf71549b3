use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Papyrus API",
        version = "0.2.0",
        description = "Extracts text from PDFs fetched over HTTP, one URL at a time or in concurrent batches."
    ),
    paths(
        crate::routes::health,
        crate::routes::extract_text,
        crate::routes::extract_batch,
    ),
    components(schemas(
        crate::dto::ExtractRequest,
        crate::dto::ExtractResponse,
        crate::dto::BatchExtractRequest,
        crate::dto::BatchExtractResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "extract", description = "PDF text extraction"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
