//! Backend de Pet Walker
//!
//! API REST del marketplace de paseos de mascotas: ciclo de vida del paseo,
//! ingesta de puntos GPS durante un paseo activo y consulta del track con
//! métricas derivadas (distancia haversine y velocidad promedio).

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
