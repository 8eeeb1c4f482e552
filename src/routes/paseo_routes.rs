use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::paseo_controller::PaseoController;
use crate::dto::paseo_dto::{ApiResponse, CrearPaseoRequest, PaseoResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_paseo_router() -> Router<AppState> {
    Router::new()
        .route("/", post(crear_paseo))
        .route("/:id", get(obtener_paseo))
        .route("/:id/iniciar", post(iniciar_paseo))
        .route("/:id/finalizar", post(finalizar_paseo))
        .route("/:id/cancelar", post(cancelar_paseo))
}

async fn crear_paseo(
    State(state): State<AppState>,
    Extension(usuario): Extension<AuthenticatedUser>,
    Json(request): Json<CrearPaseoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PaseoResponse>>), AppError> {
    let controller = PaseoController::new(state.pool.clone());
    let response = controller.crear(&usuario, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn obtener_paseo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PaseoResponse>, AppError> {
    let controller = PaseoController::new(state.pool.clone());
    let response = controller.obtener(id).await?;
    Ok(Json(response))
}

async fn iniciar_paseo(
    State(state): State<AppState>,
    Extension(usuario): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PaseoResponse>>, AppError> {
    let controller = PaseoController::new(state.pool.clone());
    let response = controller.iniciar(&usuario, id).await?;
    Ok(Json(response))
}

async fn finalizar_paseo(
    State(state): State<AppState>,
    Extension(usuario): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PaseoResponse>>, AppError> {
    let controller = PaseoController::new(state.pool.clone());
    let response = controller.finalizar(&usuario, id).await?;
    Ok(Json(response))
}

async fn cancelar_paseo(
    State(state): State<AppState>,
    Extension(usuario): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PaseoResponse>>, AppError> {
    let controller = PaseoController::new(state.pool.clone());
    let response = controller.cancelar(&usuario, id).await?;
    Ok(Json(response))
}
