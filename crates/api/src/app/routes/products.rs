use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{DefaultBodyLimit, Extension},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{MethodRouter, get},
};
use tracing::debug;

use catalogue_products::NewProduct;

use crate::app::errors;
use crate::app::services::AppServices;

/// `/api/products`: GET lists, POST creates, OPTIONS answers preflight,
/// anything else is 405. Request bodies are not size-limited.
pub fn method_router() -> MethodRouter {
    get(list_products)
        .post(create_product)
        .options(preflight)
        .fallback(method_not_allowed)
        .layer(DefaultBodyLimit::disable())
}

pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    method: Method,
) -> Response {
    // axum serves HEAD through the GET handler; this resource does not.
    if method == Method::HEAD {
        return errors::method_not_allowed();
    }

    match services.products.list_all().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => errors::storage_error(services.exposure, "list failed", &e),
    }
}

/// The body is parsed whatever the declared content type; any decode
/// failure is a 400 and storage is never touched.
pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> Response {
    let new_product: NewProduct = match serde_json::from_slice(&body) {
        Ok(p) => p,
        Err(e) => {
            debug!(error = %e, "rejecting product payload");
            return errors::invalid_json();
        }
    };

    match services.products.create(new_product).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => errors::storage_error(services.exposure, "create failed", &e),
    }
}

pub async fn method_not_allowed() -> Response {
    errors::method_not_allowed()
}
