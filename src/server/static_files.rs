//! Static file serving for the embedded root page
//!
//! Uses rust-embed to bundle the static/ folder into the binary, enabling
//! single-binary distribution.

use axum::{
    body::Body,
    http::{header, Response, StatusCode},
    response::IntoResponse,
};
use rust_embed::Embed;

/// Embedded assets from the static/ folder
#[derive(Embed)]
#[folder = "static/"]
struct StaticAssets;

/// Serve the embedded index page as the root route
pub async fn serve_index() -> impl IntoResponse {
    match serve_file("index.html") {
        Some(response) => response,
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("Not found"))
            .unwrap(),
    }
}

/// Serve a specific file from embedded assets
fn serve_file(path: &str) -> Option<Response<Body>> {
    let file = StaticAssets::get(path)?;

    let mime_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string();

    Some(
        Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime_type)
            .header(header::CACHE_CONTROL, "public, max-age=0, must-revalidate")
            .body(Body::from(file.data.into_owned()))
            .unwrap(),
    )
}
