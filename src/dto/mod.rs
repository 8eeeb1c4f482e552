//! DTOs de la API
//!
//! Requests y responses serializados con nombres de campo camelCase
//! en español, tal como los consume el cliente web/móvil.

pub mod gps_dto;
pub mod paseo_dto;
