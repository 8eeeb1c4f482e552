//! Modelo de Paseo
//!
//! Este módulo contiene el struct Paseo y su máquina de estados.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del paseo - mapea al ENUM paseo_status
///
/// Transiciones permitidas (y ninguna otra):
/// Pendiente → EnCurso, Pendiente → Cancelado, EnCurso → Finalizado.
/// Finalizado y Cancelado son estados terminales.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "paseo_status", rename_all = "snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaseoStatus {
    Pendiente,
    EnCurso,
    Finalizado,
    Cancelado,
}

impl PaseoStatus {
    /// Tabla de transiciones de la máquina de estados.
    /// Cualquier par no listado se rechaza.
    pub fn puede_transicionar_a(&self, destino: PaseoStatus) -> bool {
        matches!(
            (self, destino),
            (PaseoStatus::Pendiente, PaseoStatus::EnCurso)
                | (PaseoStatus::Pendiente, PaseoStatus::Cancelado)
                | (PaseoStatus::EnCurso, PaseoStatus::Finalizado)
        )
    }

    /// Solo un paseo EN_CURSO acepta nuevos puntos GPS.
    /// Todos los estados permiten leer los puntos existentes.
    pub fn acepta_puntos_gps(&self) -> bool {
        match self {
            PaseoStatus::EnCurso => true,
            PaseoStatus::Pendiente | PaseoStatus::Finalizado | PaseoStatus::Cancelado => false,
        }
    }

    pub fn es_terminal(&self) -> bool {
        matches!(self, PaseoStatus::Finalizado | PaseoStatus::Cancelado)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaseoStatus::Pendiente => "PENDIENTE",
            PaseoStatus::EnCurso => "EN_CURSO",
            PaseoStatus::Finalizado => "FINALIZADO",
            PaseoStatus::Cancelado => "CANCELADO",
        }
    }
}

impl std::fmt::Display for PaseoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paseo principal - mapea exactamente a la tabla paseos
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Paseo {
    pub id: Uuid,
    pub mascota_id: Uuid,
    /// Nulo hasta que un paseador inicia el paseo
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transiciones_permitidas() {
        assert!(PaseoStatus::Pendiente.puede_transicionar_a(PaseoStatus::EnCurso));
        assert!(PaseoStatus::Pendiente.puede_transicionar_a(PaseoStatus::Cancelado));
        assert!(PaseoStatus::EnCurso.puede_transicionar_a(PaseoStatus::Finalizado));
    }

    #[test]
    fn test_transiciones_rechazadas() {
        assert!(!PaseoStatus::Pendiente.puede_transicionar_a(PaseoStatus::Finalizado));
        assert!(!PaseoStatus::EnCurso.puede_transicionar_a(PaseoStatus::Cancelado));
        assert!(!PaseoStatus::EnCurso.puede_transicionar_a(PaseoStatus::Pendiente));
        assert!(!PaseoStatus::Finalizado.puede_transicionar_a(PaseoStatus::EnCurso));
        assert!(!PaseoStatus::Cancelado.puede_transicionar_a(PaseoStatus::Pendiente));
        assert!(!PaseoStatus::Pendiente.puede_transicionar_a(PaseoStatus::Pendiente));
    }

    #[test]
    fn test_solo_en_curso_acepta_puntos() {
        assert!(PaseoStatus::EnCurso.acepta_puntos_gps());
        assert!(!PaseoStatus::Pendiente.acepta_puntos_gps());
        assert!(!PaseoStatus::Finalizado.acepta_puntos_gps());
        assert!(!PaseoStatus::Cancelado.acepta_puntos_gps());
    }

    #[test]
    fn test_estados_terminales() {
        assert!(PaseoStatus::Finalizado.es_terminal());
        assert!(PaseoStatus::Cancelado.es_terminal());
        assert!(!PaseoStatus::Pendiente.es_terminal());
        assert!(!PaseoStatus::EnCurso.es_terminal());
    }

    #[test]
    fn test_serializacion_wire() {
        assert_eq!(
            serde_json::to_string(&PaseoStatus::EnCurso).unwrap(),
            "\"EN_CURSO\""
        );
        assert_eq!(
            serde_json::to_string(&PaseoStatus::Pendiente).unwrap(),
            "\"PENDIENTE\""
        );
    }
}
