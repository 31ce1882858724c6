//! Mapping of request and core failures onto HTTP responses.

use api_shared::HttpError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use diagnosis_core::DiagnosisError;
use std::any::Any;

/// Errors returned by the REST handlers. The display string is the `message` sent to clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid ID")]
    InvalidId,
    #[error("diagnosis cannot be empty")]
    InvalidDiagnosis,
    #[error("invalid patient name")]
    InvalidPatientName,
    /// Body or query string could not be decoded.
    #[error("{0}")]
    BadRequest(String),
    #[error("there no patient for the ID supplied")]
    PatientNotFound,
    #[error("error processing the request")]
    Internal(#[source] DiagnosisError),
    /// A handler panicked; reported to the client like any other internal failure.
    #[error("error processing the request")]
    Panicked,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId
            | ApiError::InvalidDiagnosis
            | ApiError::InvalidPatientName
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PatientNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) | ApiError::Panicked => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DiagnosisError> for ApiError {
    fn from(err: DiagnosisError) -> Self {
        match err {
            DiagnosisError::PatientNotFound => ApiError::PatientNotFound,
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal(source) = &self {
            tracing::error!(error = %source, "request failed");
        }

        let body = HttpError {
            code: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Response for a request whose handler panicked, used with `CatchPanicLayer`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = details, "request handler panicked");

    ApiError::Panicked.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_status() {
        let cases = [
            (DiagnosisError::PatientNotFound, StatusCode::NOT_FOUND),
            (DiagnosisError::GettingPatient, StatusCode::INTERNAL_SERVER_ERROR),
            (DiagnosisError::UpdatingPatient, StatusCode::INTERNAL_SERVER_ERROR),
            (DiagnosisError::AddingDiagnosis, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn test_internal_hides_core_message() {
        let err = ApiError::from(DiagnosisError::UpdatingPatient);
        assert_eq!(err.to_string(), "error processing the request");
    }

    #[test]
    fn test_panic_response_is_internal_error() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
