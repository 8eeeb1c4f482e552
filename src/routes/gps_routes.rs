use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::gps_controller::GpsController;
use crate::dto::gps_dto::{PuntoGpsResponse, RegistrarPuntoRequest, TrackResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_gps_router() -> Router<AppState> {
    Router::new()
        .route("/", post(registrar_punto))
        .route("/:paseo_id", get(obtener_track))
}

async fn registrar_punto(
    State(state): State<AppState>,
    Extension(usuario): Extension<AuthenticatedUser>,
    Json(request): Json<RegistrarPuntoRequest>,
) -> Result<(StatusCode, Json<PuntoGpsResponse>), AppError> {
    let controller = GpsController::new(state.pool.clone());
    let response = controller.registrar_punto(&usuario, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn obtener_track(
    State(state): State<AppState>,
    Path(paseo_id): Path<Uuid>,
) -> Result<Json<TrackResponse>, AppError> {
    let controller = GpsController::new(state.pool.clone());
    let response = controller.obtener_track(paseo_id).await?;
    Ok(Json(response))
}
