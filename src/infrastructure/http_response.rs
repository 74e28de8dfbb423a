// HTTP response utilities for rendered documents
use axum::{
    body::Body,
    http::{header, HeaderValue, Response, StatusCode},
};

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
pub const NOT_FOUND_BODY: &str = "Not Found";

/// Wrap a rendered SVG document in a `200 OK` response
pub fn svg_response(document: String) -> Result<Response<Body>, StatusCode> {
    document_response(document, SVG_CONTENT_TYPE)
}

/// Wrap a rendered HTML page in a `200 OK` response
pub fn html_response(page: String) -> Result<Response<Body>, StatusCode> {
    document_response(page, HTML_CONTENT_TYPE)
}

fn document_response(body: String, content_type: &'static str) -> Result<Response<Body>, StatusCode> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, HeaderValue::from_static(content_type))
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .map_err(|e| {
            tracing::error!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
