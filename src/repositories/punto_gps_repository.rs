use crate::models::punto_gps::PuntoGps;
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PuntoGpsRepository {
    pool: PgPool,
}

impl PuntoGpsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar un punto GPS. Cada insert es independiente y atómico a nivel
    /// de fila; no hay transacciones que abarquen varios puntos.
    pub async fn insert(
        &self,
        paseo_id: Uuid,
        latitud: f64,
        longitud: f64,
        timestamp: DateTime<Utc>,
    ) -> Result<PuntoGps, AppError> {
        let punto = sqlx::query_as::<_, PuntoGps>(
            r#"
            INSERT INTO puntos_gps (paseo_id, latitud, longitud, timestamp)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(paseo_id)
        .bind(latitud)
        .bind(longitud)
        .bind(timestamp)
        .fetch_one(&self.pool)
        .await?;

        Ok(punto)
    }

    /// Puntos de un paseo en orden cronológico. El desempate por id (BIGSERIAL)
    /// fija el orden de inserción cuando dos muestras comparten timestamp, y
    /// corrige en lectura las llegadas fuera de orden.
    pub async fn find_by_paseo(&self, paseo_id: Uuid) -> Result<Vec<PuntoGps>, AppError> {
        let puntos = sqlx::query_as::<_, PuntoGps>(
            r#"
            SELECT * FROM puntos_gps
            WHERE paseo_id = $1
            ORDER BY timestamp ASC, id ASC
            "#,
        )
        .bind(paseo_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(puntos)
    }

    pub async fn count_by_paseo(&self, paseo_id: Uuid) -> Result<i64, AppError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM puntos_gps WHERE paseo_id = $1")
                .bind(paseo_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}
