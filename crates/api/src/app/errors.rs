//! Error responses.
//!
//! Every error this API produces is a short plain-text body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use catalogue_infra::RepositoryError;

/// How much of a storage failure a 500 response reveals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorExposure {
    /// Body is `"<context>: <storage error>"`.
    #[default]
    Verbose,
    /// Body is a fixed `internal server error`; details only reach the log.
    Opaque,
}

impl ErrorExposure {
    pub fn from_flag(expose_storage_errors: bool) -> Self {
        if expose_storage_errors {
            Self::Verbose
        } else {
            Self::Opaque
        }
    }
}

pub fn text_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, message.into()).into_response()
}

pub fn invalid_json() -> Response {
    text_error(StatusCode::BAD_REQUEST, "invalid JSON")
}

pub fn method_not_allowed() -> Response {
    text_error(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
}

pub fn not_found() -> Response {
    text_error(StatusCode::NOT_FOUND, "not found")
}

/// 500 for a failed repository call. Always logged with the full error.
pub fn storage_error(exposure: ErrorExposure, context: &str, err: &RepositoryError) -> Response {
    error!(context, error = %err, "storage operation failed");

    let body = match exposure {
        ErrorExposure::Verbose => format!("{context}: {err}"),
        ErrorExposure::Opaque => "internal server error".to_string(),
    };
    text_error(StatusCode::INTERNAL_SERVER_ERROR, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(res: Response) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn verbose_storage_error_carries_context_and_cause() {
        let err = RepositoryError::Database("list_products: relation \"products\" does not exist".into());
        let res = storage_error(ErrorExposure::Verbose, "list failed", &err);

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_text(res).await,
            "list failed: database error: list_products: relation \"products\" does not exist"
        );
    }

    #[tokio::test]
    async fn opaque_storage_error_hides_cause() {
        let err = RepositoryError::Unavailable("connection pool closed".into());
        let res = storage_error(ErrorExposure::Opaque, "create failed", &err);

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(res).await, "internal server error");
    }

    #[tokio::test]
    async fn client_errors_are_plain_text() {
        let res = invalid_json();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(
            res.headers()[axum::http::header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
        assert_eq!(body_text(res).await, "invalid JSON");

        assert_eq!(method_not_allowed().status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn exposure_follows_flag() {
        assert_eq!(ErrorExposure::from_flag(true), ErrorExposure::Verbose);
        assert_eq!(ErrorExposure::from_flag(false), ErrorExposure::Opaque);
        assert_eq!(ErrorExposure::default(), ErrorExposure::Verbose);
    }
}
