//! Middleware de autenticación
//!
//! Todas las rutas protegidas exigen el header `x-api-token` con el token
//! compartido configurado en `API_TOKEN`. El health check queda fuera de
//! este middleware. Si el token falta o no coincide, el request se corta
//! aquí y nunca llega al handler ni al pool.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::state::AppState;
use crate::utils::errors::AppError;

/// Middleware de autenticación por token compartido
pub async fn require_api_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = headers
        .get("x-api-token")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    if !constant_time_eq(token.as_bytes(), state.config.api_token.as_bytes()) {
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}

/// Comparación en tiempo constante para no filtrar el token por timing.
/// Recorre siempre todos los bytes aunque ya se conozca el resultado.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_eq_iguales() {
        assert!(constant_time_eq(b"secreto", b"secreto"));
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn test_constant_time_eq_distintos() {
        assert!(!constant_time_eq(b"secreto", b"secreta"));
        assert!(!constant_time_eq(b"secreto", b"secret"));
        assert!(!constant_time_eq(b"", b"x"));
    }
}
