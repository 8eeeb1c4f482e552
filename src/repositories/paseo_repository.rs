use crate::models::paseo::{Paseo, PaseoStatus};
use crate::utils::errors::AppError;
use chrono::{NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PaseoRepository {
    pool: PgPool,
}

impl PaseoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        mascota_id: Uuid,
        fecha: NaiveDate,
        hora_inicio: NaiveTime,
        duracion_minutos: i32,
        tipo_servicio: String,
        precio: Decimal,
        latitud_origen: f64,
        longitud_origen: f64,
    ) -> Result<Paseo, AppError> {
        let id = Uuid::new_v4();

        let paseo = sqlx::query_as::<_, Paseo>(
            r#"
            INSERT INTO paseos (id, mascota_id, fecha, hora_inicio, duracion_minutos, estado, tipo_servicio, precio, latitud_origen, longitud_origen, creado_en)
            VALUES ($1, $2, $3, $4, $5, 'pendiente', $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(mascota_id)
        .bind(fecha)
        .bind(hora_inicio)
        .bind(duracion_minutos)
        .bind(tipo_servicio)
        .bind(precio)
        .bind(latitud_origen)
        .bind(longitud_origen)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(paseo)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Paseo>, AppError> {
        let paseo = sqlx::query_as::<_, Paseo>("SELECT * FROM paseos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(paseo)
    }

    /// Asignar el paseador e iniciar el paseo.
    ///
    /// El UPDATE exige el estado actual en el WHERE: si otro paseador ganó la
    /// carrera (o el paseo ya no está pendiente) devuelve None en vez de pisar
    /// la fila.
    pub async fn iniciar(&self, id: Uuid, paseador_id: Uuid) -> Result<Option<Paseo>, AppError> {
        let paseo = sqlx::query_as::<_, Paseo>(
            r#"
            UPDATE paseos
            SET estado = $3, paseador_id = $2
            WHERE id = $1 AND estado = $4
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(paseador_id)
        .bind(PaseoStatus::EnCurso)
        .bind(PaseoStatus::Pendiente)
        .fetch_optional(&self.pool)
        .await?;

        Ok(paseo)
    }

    /// Transición guardada de estado: solo aplica si la fila sigue en `desde`.
    /// Devuelve None si el estado actual ya no coincide.
    pub async fn transicionar(
        &self,
        id: Uuid,
        desde: PaseoStatus,
        hacia: PaseoStatus,
    ) -> Result<Option<Paseo>, AppError> {
        let paseo = sqlx::query_as::<_, Paseo>(
            r#"
            UPDATE paseos
            SET estado = $3
            WHERE id = $1 AND estado = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(desde)
        .bind(hacia)
        .fetch_optional(&self.pool)
        .await?;

        Ok(paseo)
    }
}
