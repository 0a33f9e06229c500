//! Catch-all status page endpoint.
//! Used by: server.

use axum::http::{header, HeaderValue, Method, Uri};
use axum::response::IntoResponse;

use crate::page::STATUS_PAGE;

/// Answers every GET with the fixed status document. The request is logged
/// and otherwise ignored; nothing in it changes the response.
pub async fn status_page(method: Method, uri: Uri) -> impl IntoResponse {
    tracing::info!(%method, path = %uri.path(), "serving status page");
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static("text/html"))],
        STATUS_PAGE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::Response;

    async fn respond(path: &str) -> Response {
        let uri: Uri = path.parse().unwrap();
        status_page(Method::GET, uri).await.into_response()
    }

    #[tokio::test]
    async fn responds_200_with_html_content_type() {
        let response = respond("/").await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html"
        );
    }

    #[tokio::test]
    async fn path_does_not_change_the_response_headers() {
        let root = respond("/").await;
        let deep = respond("/telegram/bot/status?verbose=1").await;
        assert_eq!(root.status(), deep.status());
        assert_eq!(
            root.headers().get(header::CONTENT_TYPE),
            deep.headers().get(header::CONTENT_TYPE)
        );
    }
}
