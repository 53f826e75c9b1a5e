use crate::templates;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

/// Renders the welcome page from `thuto_app/welcome.html`.
pub async fn welcome() -> impl IntoResponse {
    (StatusCode::OK, Html(templates::WELCOME))
}
