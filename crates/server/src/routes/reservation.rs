use crate::{error::ApiError, state::SharedState};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use chrono::Local;
use database::services::ReservationService;
use models::records::{
    DeleteConfirmation, ErrorBody, Reservation, ReservationDetails, ReservationInput,
};

/// List every reservation with the names of what it references
#[utoipa::path(
    get,
    path = "/reservas",
    responses(
        (status = 200, description = "Reservations, latest start first", body = [ReservationDetails]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Reservations"
)]
pub async fn list_reservations(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ReservationDetails>>, ApiError> {
    ReservationService::list(&state.db)
        .await
        .map(Json)
        .map_err(|err| ApiError::database(err, "Erro ao buscar reservas"))
}

/// Create a pending reservation
#[utoipa::path(
    post,
    path = "/reservas",
    request_body = ReservationInput,
    responses(
        (status = 201, description = "Reservation created", body = Reservation),
        (status = 400, description = "Reservation rejected", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Reservations"
)]
pub async fn create_reservation(
    State(state): State<SharedState>,
    payload: Result<Json<ReservationInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Reservation>), ApiError> {
    let Json(input) = payload?;
    let now = Local::now().naive_local();

    let created = ReservationService::create(&state.db, &state.policy, input, now)
        .await
        .map_err(|err| ApiError::service(err, "Falha interna ao criar reserva."))?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace every writable field of a reservation
#[utoipa::path(
    put,
    path = "/reservas/{codigo}",
    params(("codigo" = i32, Path, description = "Reservation code")),
    request_body = ReservationInput,
    responses(
        (status = 200, description = "Reservation updated", body = Reservation),
        (status = 400, description = "Reservation rejected", body = ErrorBody),
        (status = 404, description = "Reservation not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Reservations"
)]
pub async fn update_reservation(
    State(state): State<SharedState>,
    code: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ReservationInput>, JsonRejection>,
) -> Result<Json<Reservation>, ApiError> {
    let Path(code) = code?;
    let Json(input) = payload?;
    let now = Local::now().naive_local();

    ReservationService::update(&state.db, &state.policy, code, input, now)
        .await
        .map(Json)
        .map_err(|err| ApiError::service(err, "Falha interna ao atualizar reserva"))
}

/// Cancel a reservation
#[utoipa::path(
    put,
    path = "/reservas/{codigo}/cancelar",
    params(("codigo" = i32, Path, description = "Reservation code")),
    responses(
        (status = 200, description = "Reservation canceled", body = Reservation),
        (status = 400, description = "Reservation cannot be canceled", body = ErrorBody),
        (status = 404, description = "Reservation not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Reservations"
)]
pub async fn cancel_reservation(
    State(state): State<SharedState>,
    code: Result<Path<i32>, PathRejection>,
) -> Result<Json<Reservation>, ApiError> {
    let Path(code) = code?;

    ReservationService::cancel(&state.db, &state.policy, code)
        .await
        .map(Json)
        .map_err(|err| ApiError::service(err, "Falha interna cancelar reserva"))
}

/// Delete a reservation for good
#[utoipa::path(
    delete,
    path = "/reservas/{codigo}",
    params(("codigo" = i32, Path, description = "Reservation code")),
    responses(
        (status = 200, description = "Reservation deleted", body = DeleteConfirmation),
        (status = 404, description = "Reservation not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Reservations"
)]
pub async fn delete_reservation(
    State(state): State<SharedState>,
    code: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    let Path(code) = code?;

    ReservationService::delete(&state.db, code)
        .await
        .map_err(|err| ApiError::service(err, "Falha interna ao excluir reserva"))?;

    Ok(Json(DeleteConfirmation {
        message: "Reserva excluída com sucesso".to_string(),
        code,
    }))
}
