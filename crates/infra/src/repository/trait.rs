use async_trait::async_trait;
use thiserror::Error;

use catalogue_products::{NewProduct, Product};

/// Product storage operation error.
///
/// These are **infrastructure errors**. The message carried by each variant
/// is the raw text reported by the backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Query, constraint, connectivity or row decode failure.
    #[error("database error: {0}")]
    Database(String),

    /// A stored `specs` document could not be decoded (strict policy only).
    #[error("specs decode failed: {0}")]
    Decode(String),

    /// The backing store cannot serve requests (pool closed, lock poisoned).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Single-table product persistence.
///
/// ## Semantics
///
/// - `list_all()` returns every stored product, unfiltered and in no
///   particular order. An empty table yields an empty vector.
/// - `create()` persists a product and returns it with the identifier
///   assigned by the store. The input is stored as-is; no validation.
///
/// Errors are returned exactly once: implementations never retry.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Load every product.
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Insert a product, returning it with its new identifier.
    async fn create(&self, new_product: NewProduct) -> Result<Product, RepositoryError>;
}
