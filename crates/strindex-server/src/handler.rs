use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use strindex_engine::{
    Catalogue, FilterOutcome, NaturalLanguageOutcome, RawFilterParams, StringEntry,
};

use crate::error::{ServerError, ServerResult};

pub type AppState = Arc<Catalogue>;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: Option<String>,
}

/// Service banner listing the endpoints.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "String Analyzer API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /strings": "Create and analyze a string",
            "GET /strings/:string_value": "Get a specific string",
            "GET /strings": "Get all strings with optional filters",
            "GET /strings/filter-by-natural-language": "Filter strings using natural language",
            "DELETE /strings/:string_value": "Delete a string",
        },
    }))
}

pub async fn health_handler(State(catalogue): State<AppState>) -> ServerResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        count: catalogue.len()?,
    }))
}

/// `POST /strings` with body `{"value": "..."}`.
///
/// The body is decoded by hand so a missing field (400) and a wrongly typed
/// one (422) can be told apart.
pub async fn create_handler(
    State(catalogue): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ServerResult<(StatusCode, Json<StringEntry>)> {
    let body = body?;
    let value = decode_create_body(&body)?;
    let entry = catalogue.create(&value)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

fn decode_create_body(body: &[u8]) -> ServerResult<String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ServerError::MissingField("value"));
    }
    let document: Value =
        serde_json::from_slice(body).map_err(|e| ServerError::MalformedBody(e.to_string()))?;
    match document.get("value") {
        None => Err(ServerError::MissingField("value")),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(ServerError::InvalidType {
            field: "value",
            expected: "string",
        }),
    }
}

/// `GET /strings` with optional filter query parameters.
pub async fn list_handler(
    State(catalogue): State<AppState>,
    params: Result<Query<RawFilterParams>, QueryRejection>,
) -> ServerResult<Json<FilterOutcome>> {
    let Query(params) = params.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    Ok(Json(catalogue.list_with_params(&params)?))
}

/// `GET /strings/filter-by-natural-language?query=...`
pub async fn natural_language_handler(
    State(catalogue): State<AppState>,
    params: Result<Query<NaturalLanguageParams>, QueryRejection>,
) -> ServerResult<Json<NaturalLanguageOutcome>> {
    let Query(params) = params.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let text = params.query.unwrap_or_default();
    Ok(Json(catalogue.translate_and_list(&text)?))
}

/// `GET /strings/{value}`
pub async fn get_handler(
    State(catalogue): State<AppState>,
    Path(value): Path<String>,
) -> ServerResult<Json<StringEntry>> {
    Ok(Json(catalogue.get_by_value(&value)?))
}

/// `DELETE /strings/{value}`
pub async fn delete_handler(
    State(catalogue): State<AppState>,
    Path(value): Path<String>,
) -> ServerResult<StatusCode> {
    catalogue.delete_by_value(&value)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn not_found_handler() -> ServerError {
    ServerError::RouteNotFound
}
