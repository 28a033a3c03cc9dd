use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::batch::export::ExportError;
use crate::workflows::batch::{BatchImportError, InvalidName};
use crate::workflows::comments::{BankError, CommentError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Bank(BankError),
    Comment(CommentError),
    Name(InvalidName),
    Batch(BatchImportError),
    Export(ExportError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Bank(err) => write!(f, "phrase bank error: {}", err),
            AppError::Comment(err) => write!(f, "comment error: {}", err),
            AppError::Name(err) => write!(f, "invalid input: {}", err),
            AppError::Batch(err) => write!(f, "batch error: {}", err),
            AppError::Export(err) => write!(f, "export error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Bank(err) => Some(err),
            AppError::Comment(err) => Some(err),
            AppError::Name(err) => Some(err),
            AppError::Batch(err) => Some(err),
            AppError::Export(err) => Some(err),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Comment(_) | AppError::Name(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Batch(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Bank(_)
            | AppError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<BankError> for AppError {
    fn from(value: BankError) -> Self {
        Self::Bank(value)
    }
}

impl From<CommentError> for AppError {
    fn from(value: CommentError) -> Self {
        Self::Comment(value)
    }
}

impl From<InvalidName> for AppError {
    fn from(value: InvalidName) -> Self {
        Self::Name(value)
    }
}

impl From<BatchImportError> for AppError {
    fn from(value: BatchImportError) -> Self {
        Self::Batch(value)
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::comments::{Category, SubjectKey};

    #[test]
    fn content_errors_are_unprocessable() {
        let error = AppError::from(CommentError::Configuration {
            subject: SubjectKey::new("French", 5),
            category: Category::Opening,
        });
        assert_eq!(error.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            error.to_string(),
            "comment error: phrase bank has no opening phrases for French Year 5"
        );
    }

    #[test]
    fn blank_names_are_unprocessable() {
        let error = AppError::from(InvalidName);
        assert_eq!(error.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            error.to_string(),
            "invalid input: student name must contain letters or digits"
        );
    }

    #[test]
    fn batch_input_errors_are_bad_requests() {
        let error = AppError::from(BatchImportError::MissingColumn("Student Name"));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);

        let error = AppError::from(ConfigError::InvalidPort);
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
