//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de error de la aplicación y su conversión
//! a respuestas HTTP. Todas las respuestas de error usan el mismo cuerpo
//! JSON `{ "error": "<mensaje>" }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Não autorizado")]
    Unauthorized,

    #[error("Não encontrado")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // El mensaje del driver se expone tal cual al cliente,
            // simplificación heredada del diseño original.
            AppError::Database(e) => {
                error!("❌ Error de base de datos: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Não autorizado".to_string()),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Não encontrado".to_string()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unauthorized_status() {
        let response = AppError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
