use crate::routes::{catalog, health, reservation, root};
use axum::Json;
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        catalog::list_laboratories,
        catalog::list_professors,
        catalog::list_disciplines,
        catalog::list_class_groups,
        reservation::list_reservations,
        reservation::create_reservation,
        reservation::update_reservation,
        reservation::cancel_reservation,
        reservation::delete_reservation
    ),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Catalog", description = "Laboratories, professors, disciplines and classes"),
        (name = "Reservations", description = "Laboratory reservations"),
    ),
    info(
        title = "LabFácil API",
        version = "1.0.0",
        description = "Laboratory reservation API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
