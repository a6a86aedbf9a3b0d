use crate::assets::AssetStore;
use std::path::Path;
use std::sync::Arc;
use warp::Filter;
use warp::http::header::{CONTENT_TYPE, HeaderValue};
use warp::http::{Response, StatusCode};
use warp::hyper::Body;

/// Page served for the bare root path
pub const INDEX_PAGE: &str = "index.html";

/// Create the asset serving route: every GET or HEAD path is looked up in the store
pub fn create_static_routes(
    store: Arc<AssetStore>,
) -> impl warp::Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::get()
        .or(warp::head())
        .unify()
        .and(warp::path::full())
        .map(move |path: warp::path::FullPath| serve_asset(&store, path.as_str()))
}

/// Serve a single request path from the store
pub fn serve_asset(store: &AssetStore, request_path: &str) -> Response<Body> {
    let asset_path = resolve_asset_path(request_path);

    match store.get(&asset_path) {
        Some(contents) => {
            let mut response = Response::new(Body::from(contents));
            response.headers_mut().insert(
                CONTENT_TYPE,
                HeaderValue::from_static(get_content_type(&asset_path)),
            );
            response
        }
        None => {
            log::debug!("Asset not found: {}", asset_path);
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::NOT_FOUND;
            response
        }
    }
}

/// Map a request path to a store key: decoded, one leading slash stripped,
/// empty meaning the index page
pub fn resolve_asset_path(request_path: &str) -> String {
    let decoded = urlencoding::decode(request_path)
        .map(|path| path.into_owned())
        .unwrap_or_else(|_| request_path.to_string());

    let path = decoded.strip_prefix('/').unwrap_or(&decoded);
    if path.is_empty() {
        INDEX_PAGE.to_string()
    } else {
        path.to_string()
    }
}

/// Determine MIME type based on file extension
pub fn get_content_type(file_path: &str) -> &'static str {
    let extension = Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("json") | Some("map") => "application/json",
        Some("txt") => "text/plain; charset=utf-8",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}
