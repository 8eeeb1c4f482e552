//! Controller del track GPS
//!
//! Ingesta de puntos para paseos activos y consulta del track con métricas
//! derivadas. Las precondiciones se evalúan en orden: existencia del paseo,
//! estado EN_CURSO, autorización del llamador.

use crate::dto::gps_dto::{PuntoGpsResponse, RegistrarPuntoRequest, TrackResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::paseo_repository::PaseoRepository;
use crate::repositories::punto_gps_repository::PuntoGpsRepository;
use crate::services::track_metrics::compute_track_metrics;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::validate_coordinates;
use sqlx::PgPool;
use uuid::Uuid;

pub struct GpsController {
    paseos: PaseoRepository,
    puntos: PuntoGpsRepository,
}

impl GpsController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            paseos: PaseoRepository::new(pool.clone()),
            puntos: PuntoGpsRepository::new(pool),
        }
    }

    /// Registrar un punto GPS de un paseo activo.
    ///
    /// Si el paseo no está EN_CURSO la muestra se descarta con Conflict: el
    /// servidor no encola ni reintenta, el buffering es responsabilidad del
    /// dispositivo del paseador.
    pub async fn registrar_punto(
        &self,
        usuario: &AuthenticatedUser,
        request: RegistrarPuntoRequest,
    ) -> Result<PuntoGpsResponse, AppError> {
        // Validar rangos de coordenadas
        if validate_coordinates(request.latitud, request.longitud).is_err() {
            return Err(validation_error(
                "coordenadas",
                "latitud debe estar en [-90, 90] y longitud en [-180, 180]",
            ));
        }

        let paseo = self
            .paseos
            .find_by_id(request.paseo_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Paseo no encontrado".to_string()))?;

        if !paseo.estado.acepta_puntos_gps() {
            return Err(AppError::Conflict(format!(
                "El paseo no está activo (estado actual: {})",
                paseo.estado
            )));
        }

        // Solo el paseador asignado registra puntos; admin puede como override
        let autorizado = usuario.es_admin() || paseo.paseador_id == Some(usuario.user_id);
        if !autorizado {
            return Err(AppError::Forbidden(
                "Solo el paseador asignado puede registrar puntos de este paseo".to_string(),
            ));
        }

        let punto = self
            .puntos
            .insert(
                request.paseo_id,
                request.latitud,
                request.longitud,
                request.timestamp,
            )
            .await?;

        Ok(punto.into())
    }

    /// Obtener el track completo de un paseo con métricas derivadas.
    ///
    /// 404 solo si el paseo no existe; un paseo existente sin puntos devuelve
    /// 200 con arrays vacíos y métricas en cero. Cualquier viewer autenticado
    /// puede leer el track, en cualquier estado del paseo.
    pub async fn obtener_track(&self, paseo_id: Uuid) -> Result<TrackResponse, AppError> {
        let paseo = self
            .paseos
            .find_by_id(paseo_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Paseo no encontrado".to_string()))?;

        let puntos = self.puntos.find_by_paseo(paseo.id).await?;
        let metricas = compute_track_metrics(&puntos);

        Ok(TrackResponse::new(paseo.id, &puntos, metricas))
    }
}
