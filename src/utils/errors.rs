//! Sistema de manejo de errores
//!
//! Este módulo define los errores de la capa HTTP y su conversión a
//! respuestas con el status apropiado.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::services::vehicle_service::ServiceError;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::AlreadyExists(_) => AppError::Conflict(err.to_string()),
            ServiceError::NotFound(_)
            | ServiceError::NotFoundByCriteria(_)
            | ServiceError::NoMatchForBrand(_) => AppError::NotFound(err.to_string()),
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Validation(e) => {
                warn!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => {
                warn!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::Conflict(msg) => {
                warn!("Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: msg,
                        details: None,
                        code: Some("CONFLICT".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::vehicle_repository::RepositoryError;

    #[test]
    fn test_service_errors_map_to_status() {
        let conflict: AppError = ServiceError::AlreadyExists(RepositoryError::AlreadyExists(1)).into();
        assert_eq!(conflict.into_response().status(), StatusCode::CONFLICT);

        let missing: AppError = ServiceError::NotFound(RepositoryError::NotFound(1)).into();
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let criteria: AppError =
            ServiceError::NotFoundByCriteria(RepositoryError::NoVehiclesByColorYear).into();
        assert_eq!(criteria.into_response().status(), StatusCode::NOT_FOUND);

        let brand: AppError = ServiceError::NoMatchForBrand(RepositoryError::NoVehiclesByBrand).into();
        assert_eq!(brand.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let err = validation_error("max_speed", "must be in (0, 400]");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            bad_request_error("Invalid year provided").into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
