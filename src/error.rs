use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Question file '{0}' not found")]
    SourceNotFound(String),

    #[error("Question file '{0}' is malformed: {1}")]
    MalformedSource(String, String),

    #[error("The question bank is empty; no test can be started")]
    EmptyBank,

    #[error("No active test session to grade")]
    EmptySession,

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Machine-readable tag used in JSON error bodies.
    pub fn tag(&self) -> &'static str {
        match self {
            Error::Config(_) => "config_error",
            Error::BadRequest(_) => "bad_request",
            Error::SourceNotFound(_) => "source_not_found",
            Error::MalformedSource(_, _) => "malformed_source",
            Error::EmptyBank => "empty_bank",
            Error::EmptySession => "empty_session",
            Error::Validation(_) => "validation_error",
            Error::Json(_) => "json_error",
            Error::Anyhow(_) => "internal_error",
            Error::Internal(_) => "internal_error",
            Error::Io(_) => "io_error",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::SourceNotFound(_) => StatusCode::NOT_FOUND,
            Error::MalformedSource(_, _) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::EmptyBank => StatusCode::UNPROCESSABLE_ENTITY,
            Error::EmptySession => StatusCode::CONFLICT,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Json(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.tag(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
