//! Middleware de autenticación JWT
//!
//! Valida el bearer token e inyecta la identidad del llamador en la request.
//! La emisión de tokens y los perfiles de usuario viven en un colaborador
//! externo; aquí solo se verifica la firma y se extraen los claims.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rol del llamador, tal como lo emite el servicio de tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Dueno,
    Paseador,
    Admin,
}

/// Claims del JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub rol: UserRole,
    pub exp: usize,
    pub iat: usize,
}

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub rol: UserRole,
}

impl AuthenticatedUser {
    pub fn es_admin(&self) -> bool {
        self.rol == UserRole::Admin
    }
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    // Decodificar y validar JWT
    let token_data = decode::<Claims>(
        auth_header,
        &DecodingKey::from_secret(state.config.jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

    let claims = token_data.claims;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("ID de usuario inválido".to_string()))?;

    // Inyectar usuario autenticado en las extensions
    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        rol: claims.rol,
    });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    #[test]
    fn test_claims_round_trip() {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            rol: UserRole::Paseador,
            exp: (now + chrono::Duration::hours(1)).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let secret = b"secreto-de-prueba";
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap();

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(secret),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(decoded.claims.sub, claims.sub);
        assert_eq!(decoded.claims.rol, UserRole::Paseador);
    }

    #[test]
    fn test_rol_serializado_en_minusculas() {
        assert_eq!(
            serde_json::to_string(&UserRole::Dueno).unwrap(),
            "\"dueno\""
        );
        assert_eq!(
            serde_json::to_string(&UserRole::Admin).unwrap(),
            "\"admin\""
        );
    }

    #[test]
    fn test_firma_incorrecta_rechazada() {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            rol: UserRole::Admin,
            exp: (now + chrono::Duration::hours(1)).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"secreto-a"),
        )
        .unwrap();

        let resultado = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"secreto-b"),
            &Validation::default(),
        );
        assert!(resultado.is_err());
    }
}
