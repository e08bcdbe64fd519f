use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{Redirect, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "static/"]
struct StaticAssets;

fn build_asset_response(bytes: Vec<u8>, mime: &str) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime)
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from(bytes))
        .unwrap_or_else(|_| {
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(Body::from("Failed to build response"))
                .expect("response builder should work")
        })
}

fn read_asset(path: &str) -> Option<Response> {
    if path.contains("..") {
        return None;
    }

    let file = StaticAssets::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Some(build_asset_response(file.data.into_owned(), mime.as_ref()))
}

/// GET /
pub async fn root_redirect() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// GET /static/{*path}
pub async fn serve_static(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');

    if let Some(response) = read_asset(path) {
        return response;
    }

    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::from("Not Found"))
        .expect("response builder should work")
}
