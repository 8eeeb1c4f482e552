//! DTOs del track GPS
//!
//! Contratos de los endpoints de ingesta y consulta de track.
//! El orden de los pares de coordenadas en la respuesta es [longitud, latitud],
//! inverso al orden de almacenamiento, por convención de las librerías de mapas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::punto_gps::PuntoGps;
use crate::services::track_metrics::TrackMetrics;

/// Request para registrar un punto GPS de un paseo activo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarPuntoRequest {
    pub paseo_id: Uuid,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitud: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitud: f64,

    pub timestamp: DateTime<Utc>,
}

/// Response con el punto creado
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuntoGpsResponse {
    pub id: i64,
    pub paseo_id: Uuid,
    pub latitud: f64,
    pub longitud: f64,
    pub timestamp: DateTime<Utc>,
}

impl From<PuntoGps> for PuntoGpsResponse {
    fn from(punto: PuntoGps) -> Self {
        Self {
            id: punto.id,
            paseo_id: punto.paseo_id,
            latitud: punto.latitud,
            longitud: punto.longitud,
            timestamp: punto.timestamp,
        }
    }
}

/// Response del track completo con métricas derivadas
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackResponse {
    pub paseo_id: Uuid,
    /// Pares [longitud, latitud] listos para dibujar la polilínea
    pub coordenadas: Vec<[f64; 2]>,
    /// Metros
    pub distancia_total: f64,
    /// km/h
    pub velocidad_promedio: f64,
    pub cantidad_puntos: usize,
}

impl TrackResponse {
    pub fn new(paseo_id: Uuid, puntos: &[PuntoGps], metricas: TrackMetrics) -> Self {
        Self {
            paseo_id,
            coordenadas: puntos.iter().map(|p| [p.longitud, p.latitud]).collect(),
            distancia_total: metricas.distancia_total,
            velocidad_promedio: metricas.velocidad_promedio,
            cantidad_puntos: metricas.cantidad_puntos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn punto(id: i64, lat: f64, lng: f64) -> PuntoGps {
        PuntoGps {
            id,
            paseo_id: Uuid::nil(),
            latitud: lat,
            longitud: lng,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_request_valida_rangos() {
        let request = RegistrarPuntoRequest {
            paseo_id: Uuid::new_v4(),
            latitud: 91.0,
            longitud: 0.0,
            timestamp: Utc::now(),
        };
        assert!(request.validate().is_err());

        let request = RegistrarPuntoRequest {
            paseo_id: Uuid::new_v4(),
            latitud: -40.4168,
            longitud: -3.7038,
            timestamp: Utc::now(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_nombres_de_campo() {
        let body = serde_json::json!({
            "paseoId": "550e8400-e29b-41d4-a716-446655440000",
            "latitud": 40.4168,
            "longitud": -3.7038,
            "timestamp": "2024-01-15T10:30:00Z"
        });
        let request: RegistrarPuntoRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.latitud, 40.4168);
    }

    #[test]
    fn test_coordenadas_en_orden_lng_lat() {
        let puntos = vec![punto(1, 40.0, -3.0)];
        let metricas = TrackMetrics {
            distancia_total: 0.0,
            velocidad_promedio: 0.0,
            cantidad_puntos: 1,
        };
        let response = TrackResponse::new(Uuid::nil(), &puntos, metricas);
        // [longitud, latitud], no [latitud, longitud]
        assert_eq!(response.coordenadas, vec![[-3.0, 40.0]]);
    }

    #[test]
    fn test_response_nombres_de_campo() {
        let metricas = TrackMetrics {
            distancia_total: 0.0,
            velocidad_promedio: 0.0,
            cantidad_puntos: 0,
        };
        let response = TrackResponse::new(Uuid::nil(), &[], metricas);
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("paseoId").is_some());
        assert!(value.get("distanciaTotal").is_some());
        assert!(value.get("velocidadPromedio").is_some());
        assert!(value.get("cantidadPuntos").is_some());
        assert_eq!(value["coordenadas"], serde_json::json!([]));
    }
}
