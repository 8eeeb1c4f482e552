//! Repositorios de acceso a datos
//!
//! Queries sqlx contra PostgreSQL. El schema (tablas paseos y puntos_gps,
//! índice (paseo_id, timestamp)) es propiedad del colaborador de persistencia;
//! aquí no se corren migraciones.

pub mod paseo_repository;
pub mod punto_gps_repository;
