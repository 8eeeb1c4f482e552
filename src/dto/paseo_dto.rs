//! DTOs de paseos
//!
//! Requests y responses del ciclo de vida del paseo, más la
//! response genérica de la API.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::paseo::{Paseo, PaseoStatus};

/// Request para crear un paseo (lo crea el dueño, queda PENDIENTE)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CrearPaseoRequest {
    pub mascota_id: Uuid,

    pub fecha: NaiveDate,

    pub hora_inicio: NaiveTime,

    #[validate(range(min = 1, max = 480))]
    pub duracion_minutos: i32,

    #[validate(length(min = 3, max = 50))]
    pub tipo_servicio: String,

    pub precio: Decimal,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitud_origen: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitud_origen: f64,
}

/// Response de paseo para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaseoResponse {
    pub id: Uuid,
    pub mascota_id: Uuid,
    pub paseador_id: Option<Uuid>,
    pub fecha: NaiveDate,
    pub hora_inicio: NaiveTime,
    pub duracion_minutos: i32,
    pub estado: PaseoStatus,
    pub tipo_servicio: String,
    pub precio: Decimal,
    pub latitud_origen: f64,
    pub longitud_origen: f64,
    pub creado_en: DateTime<Utc>,
}

impl From<Paseo> for PaseoResponse {
    fn from(paseo: Paseo) -> Self {
        Self {
            id: paseo.id,
            mascota_id: paseo.mascota_id,
            paseador_id: paseo.paseador_id,
            fecha: paseo.fecha,
            hora_inicio: paseo.hora_inicio,
            duracion_minutos: paseo.duracion_minutos,
            estado: paseo.estado,
            tipo_servicio: paseo.tipo_servicio,
            precio: paseo.precio,
            latitud_origen: paseo.latitud_origen,
            longitud_origen: paseo.longitud_origen,
            creado_en: paseo.creado_en,
        }
    }
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crear_paseo_duracion_invalida() {
        let body = serde_json::json!({
            "mascotaId": "550e8400-e29b-41d4-a716-446655440000",
            "fecha": "2024-01-15",
            "horaInicio": "10:30:00",
            "duracionMinutos": 0,
            "tipoServicio": "estandar",
            "precio": "15.00",
            "latitudOrigen": 40.4168,
            "longitudOrigen": -3.7038
        });
        let request: CrearPaseoRequest = serde_json::from_value(body).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_estado_serializado_en_mayusculas() {
        let paseo_response = serde_json::to_value(PaseoStatus::Finalizado).unwrap();
        assert_eq!(paseo_response, serde_json::json!("FINALIZADO"));
    }
}
