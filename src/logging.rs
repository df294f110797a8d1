//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes, to_bytes},
    extract::Request,
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::internal_server_error::InternalServerError;

/// Bodies longer than this many characters are truncated in the `info` logs.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a text body is longer than [LOG_BODY_LENGTH_LIMIT] characters, it is
/// truncated and the full body is logged at the `debug` level.
/// Binary bodies, such as the PDF report, are summarised by their length and
/// passed through untouched.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read request body: {error}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    log_request(
        &parts,
        &describe_body(parts.headers.get(CONTENT_TYPE), &body_bytes),
    );

    let request = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return InternalServerError::default().into_response();
        }
    };

    log_response(
        &parts,
        &describe_body(parts.headers.get(CONTENT_TYPE), &body_bytes),
    );

    Response::from_parts(parts, Body::from(body_bytes))
}

fn is_text(content_type: Option<&HeaderValue>) -> bool {
    let Some(content_type) = content_type.and_then(|value| value.to_str().ok()) else {
        return false;
    };

    content_type.starts_with("text/")
        || content_type.starts_with("application/x-www-form-urlencoded")
        || content_type.starts_with("application/json")
}

/// The loggable form of a body: the text itself, or a summary for binary data.
fn describe_body(content_type: Option<&HeaderValue>, body: &Bytes) -> String {
    if body.is_empty() || is_text(content_type) {
        return String::from_utf8_lossy(body).into_owned();
    }

    let content_type = content_type
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown content type");

    format!("<{} bytes of {content_type}>", body.len())
}

/// The first [LOG_BODY_LENGTH_LIMIT] characters of `body`, or `None` if it is short enough to log in full.
fn truncate_body(body: &str) -> Option<&str> {
    body.char_indices()
        .nth(LOG_BODY_LENGTH_LIMIT)
        .map(|(end, _)| &body[..end])
}

fn log_request(headers: &axum::http::request::Parts, body: &str) {
    if let Some(truncated) = truncate_body(body) {
        tracing::info!("Received request: {headers:#?}\nbody: {truncated:}...");
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Received request: {headers:#?}\nbody: {body:?}");
    }
}

fn log_response(headers: &axum::http::response::Parts, body: &str) {
    if let Some(truncated) = truncate_body(body) {
        tracing::info!("Sending response: {headers:#?}\nbody: {truncated:}...");
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {headers:#?}\nbody: {body:?}");
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Bytes,
        http::{HeaderValue, header::CONTENT_TYPE},
        middleware,
        response::IntoResponse,
        routing::{get, post},
    };
    use axum_test::TestServer;

    use super::{LOG_BODY_LENGTH_LIMIT, describe_body, logging_middleware, truncate_body};

    const BINARY_BODY: [u8; 8] = [0x25, 0x50, 0x44, 0x46, 0xff, 0xfe, 0x00, 0x80];

    async fn get_binary() -> impl IntoResponse {
        ([(CONTENT_TYPE, "application/pdf")], BINARY_BODY.to_vec())
    }

    async fn echo(body: String) -> String {
        body
    }

    fn get_test_server() -> TestServer {
        let app = Router::new()
            .route("/binary", get(get_binary))
            .route("/echo", post(echo))
            .layer(middleware::from_fn(logging_middleware));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn binary_response_passes_through_unchanged() {
        let server = get_test_server();

        let response = server.get("/binary").await;

        response.assert_status_ok();
        assert_eq!(response.as_bytes().as_ref(), BINARY_BODY.as_slice());
    }

    #[tokio::test]
    async fn request_body_reaches_handler() {
        let server = get_test_server();

        let response = server
            .post("/echo")
            .form(&[("description", "Groceries"), ("amount", "150")])
            .await;

        response.assert_status_ok();
        assert_eq!(response.text(), "description=Groceries&amount=150");
    }

    #[test]
    fn text_bodies_are_logged_as_text() {
        let content_type = HeaderValue::from_static("text/html; charset=utf-8");

        let description = describe_body(Some(&content_type), &Bytes::from_static(b"<p>Hi</p>"));

        assert_eq!(description, "<p>Hi</p>");
    }

    #[test]
    fn binary_bodies_are_summarised() {
        let content_type = HeaderValue::from_static("application/pdf");

        let description = describe_body(Some(&content_type), &Bytes::from_static(&BINARY_BODY));

        assert_eq!(description, "<8 bytes of application/pdf>");
    }

    #[test]
    fn short_bodies_are_not_truncated() {
        let body = "a".repeat(LOG_BODY_LENGTH_LIMIT);

        assert_eq!(truncate_body(&body), None);
    }

    #[test]
    fn long_bodies_are_truncated_on_char_boundary() {
        let body = "é".repeat(LOG_BODY_LENGTH_LIMIT + 1);

        let truncated = truncate_body(&body).unwrap();

        assert_eq!(truncated.chars().count(), LOG_BODY_LENGTH_LIMIT);
    }
}
