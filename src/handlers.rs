use axum::{
    body::Body,
    extract::{Multipart, Path as AxumPath, State},
    http::{header, HeaderValue, Response, StatusCode},
    response::{IntoResponse, Redirect},
};
use std::path::Path;

use crate::components::{ListingComponent, TemplateComponent};
use crate::errors::ShareError;
use crate::services::{FileService, UploadService};
use crate::types::AppState;
use crate::utils::{encode_url_segment, ensure_safe_path, http_date, normalize_path};

/// Render the share directory listing
pub async fn handle_root(State(state): State<AppState>) -> Result<Response<Body>, ShareError> {
    let file_service = FileService::new(state.share_dir.as_ref().clone());
    render_listing(&file_service, Path::new(""))
}

/// Accept a multipart upload and redirect back to the listing
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ShareError> {
    let upload_service = UploadService::new(state.share_dir.as_ref().clone());
    match upload_service.save_all(multipart).await {
        Ok(saved) => {
            log::info!("Upload request stored {} file(s)", saved.len());
            Ok(Redirect::to("/"))
        }
        Err(e) => {
            log::warn!("Upload rejected: {}", e);
            Err(e)
        }
    }
}

/// Serve a file, or a listing when the path names a sub-directory
pub async fn handle_path(
    State(state): State<AppState>,
    AxumPath(path): AxumPath<String>,
) -> Result<Response<Body>, ShareError> {
    log::info!("Path request received: '{}'", path);

    let normalized = normalize_path(&path);
    if normalized.is_empty() {
        return handle_root(State(state)).await;
    }
    ensure_safe_path(&normalized).inspect_err(|_| {
        log::warn!("Rejected path outside share directory: '{}'", path);
    })?;

    let file_service = FileService::new(state.share_dir.as_ref().clone());
    let relative = Path::new(&normalized);
    if file_service.is_dir(relative) {
        // Relative links in the listing only resolve under a trailing slash
        if !path.ends_with('/') {
            return Ok(redirect_to_dir(&normalized));
        }
        return render_listing(&file_service, relative);
    }
    let served = file_service.read_file(relative)?;

    let mut resp = sized_response(served.bytes, served.content_type);
    let headers = resp.headers_mut();
    if let Some(date) = served.modified.and_then(http_date) {
        if let Ok(value) = HeaderValue::from_str(&date) {
            headers.insert(header::LAST_MODIFIED, value);
        }
    }
    Ok(resp)
}

fn render_listing(file_service: &FileService, dir: &Path) -> Result<Response<Body>, ShareError> {
    let entries = file_service.list_entries(dir)?;

    let items = ListingComponent::new().render_items(&entries);
    let page = TemplateComponent::new().render_page(&items);
    let bytes = page.into_bytes();

    log::debug!("Rendered listing of {:?} with {} entries, {} bytes", dir, entries.len(), bytes.len());
    Ok(sized_response(bytes, "text/html"))
}

/// 301 to the slash-terminated form of a directory path
fn redirect_to_dir(normalized: &str) -> Response<Body> {
    let location = format!(
        "/{}/",
        normalized.split('/').map(encode_url_segment).collect::<Vec<_>>().join("/")
    );
    let mut resp = Response::new(Body::empty());
    *resp.status_mut() = StatusCode::MOVED_PERMANENTLY;
    if let Ok(value) = HeaderValue::from_str(&location) {
        resp.headers_mut().insert(header::LOCATION, value);
    }
    resp
}

/// 200 response with an explicit Content-Type and exact Content-Length
fn sized_response(bytes: Vec<u8>, content_type: &'static str) -> Response<Body> {
    let len = bytes.len();
    let mut resp = Response::new(Body::from(bytes));
    let headers = resp.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(len));
    resp
}
