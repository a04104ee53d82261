// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Error types for the ACF site

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Site error types
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl SiteError {
    /// HTTP status a handler should answer with for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnknownVariant(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let reason = status.canonical_reason().unwrap_or("Error");
        let body = match crate::site::render_error_page(status.as_u16(), reason, &self.to_string()) {
            Ok(html) => html,
            Err(e) => {
                tracing::error!("Failed to render error page: {}", e);
                reason.to_string()
            }
        };
        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_is_not_found() {
        let err = SiteError::UnknownVariant("retro".to_string());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_error_page_escapes_message() {
        let err = SiteError::UnknownVariant("<script>alert('x')</script>".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("<h1>Not Found</h1>"));
        assert!(body.contains("Unknown variant: &lt;script&gt;alert(&#x27;x&#x27;)"));
        assert!(!body.contains("<script>"));
    }

    #[test]
    fn test_config_error_is_server_error() {
        let err = SiteError::Config("bad".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Configuration error: bad");
    }
}
