use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Capture crate version from Cargo
static CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root response from service
#[derive(Serialize, Debug, ToSchema)]
pub struct RootResponse {
    keywords: &'static str,
    version: &'static str,
}

/// Service information
#[utoipa::path(
    get,
    path = "/api",
    tag = "Misc",
    responses(
        (status = 200, description = "Root response", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        keywords: "Hello, I keep track of usernames and their channels!",
        version: CRATE_VERSION,
    })
}
