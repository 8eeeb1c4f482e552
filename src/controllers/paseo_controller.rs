//! Controller del ciclo de vida del paseo
//!
//! Creación y transiciones de estado. Cada transición se verifica contra la
//! tabla de la máquina de estados antes de tocar la base de datos, y el
//! UPDATE vuelve a exigir el estado esperado para no pisar una carrera.

use crate::dto::paseo_dto::{ApiResponse, CrearPaseoRequest, PaseoResponse};
use crate::middleware::auth::{AuthenticatedUser, UserRole};
use crate::models::paseo::PaseoStatus;
use crate::repositories::paseo_repository::PaseoRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::{validate_enum, validate_non_negative};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Tipos de servicio aceptados
const TIPOS_SERVICIO: [&str; 3] = ["estandar", "premium", "grupal"];

pub struct PaseoController {
    repository: PaseoRepository,
}

impl PaseoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PaseoRepository::new(pool),
        }
    }

    /// Crear un paseo en estado PENDIENTE (lo solicita el dueño de la mascota)
    pub async fn crear(
        &self,
        usuario: &AuthenticatedUser,
        request: CrearPaseoRequest,
    ) -> Result<ApiResponse<PaseoResponse>, AppError> {
        if usuario.rol == UserRole::Paseador {
            return Err(AppError::Forbidden(
                "Un paseador no puede crear paseos".to_string(),
            ));
        }

        request.validate()?;

        if validate_enum(request.tipo_servicio.as_str(), &TIPOS_SERVICIO).is_err() {
            return Err(validation_error(
                "tipoServicio",
                "tipo de servicio no soportado",
            ));
        }

        if validate_non_negative(request.precio).is_err() {
            return Err(validation_error("precio", "el precio no puede ser negativo"));
        }

        let paseo = self
            .repository
            .create(
                request.mascota_id,
                request.fecha,
                request.hora_inicio,
                request.duracion_minutos,
                request.tipo_servicio,
                request.precio,
                request.latitud_origen,
                request.longitud_origen,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            paseo.into(),
            "Paseo creado exitosamente".to_string(),
        ))
    }

    pub async fn obtener(&self, id: Uuid) -> Result<PaseoResponse, AppError> {
        let paseo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Paseo no encontrado".to_string()))?;

        Ok(paseo.into())
    }

    /// PENDIENTE → EN_CURSO: el paseador reclama el paseo y queda asignado
    pub async fn iniciar(
        &self,
        usuario: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<ApiResponse<PaseoResponse>, AppError> {
        if usuario.rol == UserRole::Dueno {
            return Err(AppError::Forbidden(
                "Solo un paseador puede iniciar el paseo".to_string(),
            ));
        }

        let paseo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Paseo no encontrado".to_string()))?;

        if !paseo.estado.puede_transicionar_a(PaseoStatus::EnCurso) {
            return Err(AppError::Conflict(format!(
                "No se puede iniciar un paseo en estado {}",
                paseo.estado
            )));
        }

        let actualizado = self
            .repository
            .iniciar(id, usuario.user_id)
            .await?
            .ok_or_else(|| {
                // Otro paseador ganó la carrera entre el check y el UPDATE
                AppError::Conflict("El paseo ya no está pendiente".to_string())
            })?;

        Ok(ApiResponse::success_with_message(
            actualizado.into(),
            "Paseo iniciado".to_string(),
        ))
    }

    /// EN_CURSO → FINALIZADO: lo cierra el paseador asignado (o un admin)
    pub async fn finalizar(
        &self,
        usuario: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<ApiResponse<PaseoResponse>, AppError> {
        let paseo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Paseo no encontrado".to_string()))?;

        if !paseo.estado.puede_transicionar_a(PaseoStatus::Finalizado) {
            return Err(AppError::Conflict(format!(
                "No se puede finalizar un paseo en estado {}",
                paseo.estado
            )));
        }

        let autorizado = usuario.es_admin() || paseo.paseador_id == Some(usuario.user_id);
        if !autorizado {
            return Err(AppError::Forbidden(
                "Solo el paseador asignado puede finalizar este paseo".to_string(),
            ));
        }

        let actualizado = self
            .repository
            .transicionar(id, PaseoStatus::EnCurso, PaseoStatus::Finalizado)
            .await?
            .ok_or_else(|| AppError::Conflict("El paseo ya no está en curso".to_string()))?;

        Ok(ApiResponse::success_with_message(
            actualizado.into(),
            "Paseo finalizado".to_string(),
        ))
    }

    /// PENDIENTE → CANCELADO: lo cancela el dueño o un admin antes de iniciar
    pub async fn cancelar(
        &self,
        usuario: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<ApiResponse<PaseoResponse>, AppError> {
        if usuario.rol == UserRole::Paseador {
            return Err(AppError::Forbidden(
                "Un paseador no puede cancelar el paseo".to_string(),
            ));
        }

        let paseo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Paseo no encontrado".to_string()))?;

        if !paseo.estado.puede_transicionar_a(PaseoStatus::Cancelado) {
            return Err(AppError::Conflict(format!(
                "No se puede cancelar un paseo en estado {}",
                paseo.estado
            )));
        }

        let actualizado = self
            .repository
            .transicionar(id, PaseoStatus::Pendiente, PaseoStatus::Cancelado)
            .await?
            .ok_or_else(|| AppError::Conflict("El paseo ya no está pendiente".to_string()))?;

        Ok(ApiResponse::success_with_message(
            actualizado.into(),
            "Paseo cancelado".to_string(),
        ))
    }
}
