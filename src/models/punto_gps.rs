//! Modelo de PuntoGPS
//!
//! Una muestra de ubicación con timestamp perteneciente a exactamente un paseo.
//! Las filas son append-only: se crean solo por el endpoint de ingesta mientras
//! el paseo está EN_CURSO y nunca se mutan después.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Punto GPS - mapea exactamente a la tabla puntos_gps
///
/// La primary key es un BIGSERIAL: para timestamps empatados el orden de
/// inserción queda determinado por el id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PuntoGps {
    pub id: i64,
    pub paseo_id: Uuid,
    pub latitud: f64,
    pub longitud: f64,
    pub timestamp: DateTime<Utc>,
}
