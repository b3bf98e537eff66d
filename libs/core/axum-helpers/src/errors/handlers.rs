use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Handler for 404 Not Found errors.
///
/// Use as the router's fallback. Responds with a plain-text body so
/// clients probing unknown routes get an unambiguous answer without
/// having to parse JSON.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}
