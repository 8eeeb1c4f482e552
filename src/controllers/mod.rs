//! Controllers de la API
//!
//! Lógica de negocio de cada endpoint: precondiciones, autorización y
//! orquestación de repositorios.

pub mod gps_controller;
pub mod paseo_controller;
