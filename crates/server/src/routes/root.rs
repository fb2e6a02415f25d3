use axum::http::StatusCode;

/// Banner confirming the API is up
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API is online", content_type = "text/plain", body = String)
    ),
    tag = "Health"
)]
pub async fn root() -> (StatusCode, &'static str) {
    (StatusCode::OK, "API LabFácil Online!")
}
