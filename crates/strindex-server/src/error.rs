use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use strindex_engine::EngineError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid data type for \"{field}\": must be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// The body could not be read, e.g. it exceeds the size limit.
    #[error("{}", .0.body_text())]
    Body(#[from] BytesRejection),

    #[error("Invalid JSON body: {0}")]
    MalformedBody(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Route not found")]
    RouteNotFound,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// HTTP status this error is surfaced with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Engine(err) => match err {
                EngineError::InvalidInput(_) | EngineError::Unparseable(_) => StatusCode::BAD_REQUEST,
                EngineError::Conflict(_) => StatusCode::CONFLICT,
                EngineError::NotFound(_) => StatusCode::NOT_FOUND,
                EngineError::Conflicting(_) => StatusCode::UNPROCESSABLE_ENTITY,
                EngineError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::MissingField(_) | Self::MalformedBody(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Body(rejection) => rejection.status(),
            Self::InvalidType { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
