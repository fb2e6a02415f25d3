//! HTTP API of LabFácil.

pub mod config;
pub mod doc;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{
    Router,
    routing::{get, put},
};
use routes::{catalog, health, reservation, root};
use state::SharedState;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};

/// Builds the application router
pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(doc::openapi_json))
        .route("/laboratorios", get(catalog::list_laboratories))
        .route("/professores", get(catalog::list_professors))
        .route("/disciplinas", get(catalog::list_disciplines))
        .route("/turmas", get(catalog::list_class_groups))
        .route(
            "/reservas",
            get(reservation::list_reservations).post(reservation::create_reservation),
        )
        .route(
            "/reservas/{codigo}",
            put(reservation::update_reservation).delete(reservation::delete_reservation),
        )
        .route(
            "/reservas/{codigo}/cancelar",
            put(reservation::cancel_reservation),
        )
        .layer(
            ServiceBuilder::new()
                // The browser front end is served from another origin
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
