//! Métricas derivadas del track GPS
//!
//! Este módulo calcula la distancia total y la velocidad promedio de un
//! paseo a partir de sus puntos GPS ordenados cronológicamente.

use crate::models::punto_gps::PuntoGps;

/// Radio medio de la Tierra en metros
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Métricas de un track: distancia en metros, velocidad en km/h
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMetrics {
    pub distancia_total: f64,
    pub velocidad_promedio: f64,
    pub cantidad_puntos: usize,
}

/// Distancia haversine (gran círculo) entre dos pares lat/lng, en metros
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Calcular las métricas de un track.
///
/// Los puntos deben venir ordenados por timestamp ascendente; la distancia es
/// la suma de los segmentos haversine consecutivos. La velocidad promedio es
/// distancia / tiempo transcurrido entre el primer y el último punto.
///
/// Con cero o un punto, o con tiempo transcurrido cero (todos los puntos
/// comparten timestamp), la velocidad es 0. Este guard contra división por
/// cero es política del contrato, no un detalle incidental.
pub fn compute_track_metrics(puntos: &[PuntoGps]) -> TrackMetrics {
    let distancia_total: f64 = puntos
        .windows(2)
        .map(|w| haversine_distance(w[0].latitud, w[0].longitud, w[1].latitud, w[1].longitud))
        .sum();

    let velocidad_promedio = match (puntos.first(), puntos.last()) {
        (Some(primero), Some(ultimo)) => {
            let segundos = (ultimo.timestamp - primero.timestamp).num_milliseconds() as f64 / 1000.0;
            if segundos > 0.0 {
                // m/s → km/h
                (distancia_total / segundos) * 3.6
            } else {
                0.0
            }
        }
        _ => 0.0,
    };

    TrackMetrics {
        distancia_total,
        velocidad_promedio,
        cantidad_puntos: puntos.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn punto(id: i64, lat: f64, lng: f64, segundos: i64) -> PuntoGps {
        PuntoGps {
            id,
            paseo_id: Uuid::nil(),
            latitud: lat,
            longitud: lng,
            timestamp: Utc.timestamp_opt(segundos, 0).unwrap(),
        }
    }

    #[test]
    fn test_track_vacio() {
        let metricas = compute_track_metrics(&[]);
        assert_eq!(metricas.distancia_total, 0.0);
        assert_eq!(metricas.velocidad_promedio, 0.0);
        assert_eq!(metricas.cantidad_puntos, 0);
    }

    #[test]
    fn test_un_solo_punto() {
        let metricas = compute_track_metrics(&[punto(1, 40.4168, -3.7038, 0)]);
        assert_eq!(metricas.distancia_total, 0.0);
        assert_eq!(metricas.velocidad_promedio, 0.0);
        assert_eq!(metricas.cantidad_puntos, 1);
    }

    #[test]
    fn test_escenario_ecuador() {
        // 0.001° de longitud en el ecuador ≈ 111.19 m, recorridos en 10 s
        let puntos = vec![punto(1, 0.0, 0.0, 0), punto(2, 0.0, 0.001, 10)];
        let metricas = compute_track_metrics(&puntos);

        assert!((metricas.distancia_total - 111.19).abs() < 0.1);
        // 111.19 m / 10 s × 3.6 ≈ 40.03 km/h
        assert!((metricas.velocidad_promedio - 40.03).abs() < 0.05);
        assert_eq!(metricas.cantidad_puntos, 2);
    }

    #[test]
    fn test_timestamps_identicos_velocidad_cero() {
        // Distancia no nula pero tiempo transcurrido cero: el guard de
        // división por cero debe devolver velocidad 0
        let puntos = vec![punto(1, 0.0, 0.0, 100), punto(2, 0.0, 0.001, 100)];
        let metricas = compute_track_metrics(&puntos);

        assert!(metricas.distancia_total > 100.0);
        assert_eq!(metricas.velocidad_promedio, 0.0);
    }

    #[test]
    fn test_camino_de_tres_puntos_no_es_linea_recta() {
        // Ida y vuelta parcial: la suma de segmentos debe superar la
        // distancia directa entre los extremos
        let puntos = vec![
            punto(1, 0.0, 0.0, 0),
            punto(2, 0.001, 0.001, 10),
            punto(3, 0.0, 0.002, 20),
        ];
        let metricas = compute_track_metrics(&puntos);

        let directa = haversine_distance(0.0, 0.0, 0.0, 0.002);
        assert!(metricas.distancia_total > directa);
    }

    #[test]
    fn test_haversine_simetrica_por_segmento() {
        let ida = haversine_distance(40.4168, -3.7038, 41.3874, 2.1686);
        let vuelta = haversine_distance(41.3874, 2.1686, 40.4168, -3.7038);
        assert!((ida - vuelta).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_madrid_barcelona() {
        // Madrid → Barcelona ≈ 505 km en línea recta
        let distancia = haversine_distance(40.4168, -3.7038, 41.3874, 2.1686);
        assert!((distancia - 505_000.0).abs() < 5_000.0);
    }

    #[test]
    fn test_puntos_coincidentes_distancia_cero() {
        let puntos = vec![punto(1, 40.0, -3.0, 0), punto(2, 40.0, -3.0, 30)];
        let metricas = compute_track_metrics(&puntos);
        assert_eq!(metricas.distancia_total, 0.0);
        assert_eq!(metricas.velocidad_promedio, 0.0);
    }
}
