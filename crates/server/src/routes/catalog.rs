use crate::{error::ApiError, state::SharedState};
use axum::{Json, extract::State};
use database::services::CatalogService;
use models::records::{ClassGroup, Discipline, ErrorBody, Laboratory, Professor};

/// List every laboratory, by name
#[utoipa::path(
    get,
    path = "/laboratorios",
    responses(
        (status = 200, description = "Laboratories", body = [Laboratory]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Catalog"
)]
pub async fn list_laboratories(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Laboratory>>, ApiError> {
    CatalogService::laboratories(&state.db)
        .await
        .map(Json)
        .map_err(|err| ApiError::database(err, "Erro ao buscar laboratórios"))
}

/// List every professor, by name
#[utoipa::path(
    get,
    path = "/professores",
    responses(
        (status = 200, description = "Professors", body = [Professor]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Catalog"
)]
pub async fn list_professors(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Professor>>, ApiError> {
    CatalogService::professors(&state.db)
        .await
        .map(Json)
        .map_err(|err| ApiError::database(err, "Erro ao buscar professores"))
}

/// List every discipline, by name
#[utoipa::path(
    get,
    path = "/disciplinas",
    responses(
        (status = 200, description = "Disciplines", body = [Discipline]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Catalog"
)]
pub async fn list_disciplines(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Discipline>>, ApiError> {
    CatalogService::disciplines(&state.db)
        .await
        .map(Json)
        .map_err(|err| ApiError::database(err, "Erro ao buscar disciplinas"))
}

/// List every class, by name
#[utoipa::path(
    get,
    path = "/turmas",
    responses(
        (status = 200, description = "Classes", body = [ClassGroup]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Catalog"
)]
pub async fn list_class_groups(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ClassGroup>>, ApiError> {
    CatalogService::class_groups(&state.db)
        .await
        .map(Json)
        .map_err(|err| ApiError::database(err, "Erro ao buscar turmas"))
}
