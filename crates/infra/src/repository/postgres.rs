//! Postgres-backed product repository.
//!
//! Maps the `products` table:
//!
//! | Column | SQL type | Rust side |
//! |--------|----------|-----------|
//! | `id` | generated key (uuid, serial, ...) | read back as text, `ProductId` |
//! | `title`, `category`, `description` | `text` | `String` |
//! | `price` | `integer` / `bigint` | `i64` |
//! | `specs` | `jsonb` | `Vec<Spec>` via [`super::specs`] |
//! | `images` | `text[]` | `Vec<String>` |
//!
//! ## Error Mapping
//!
//! | SQLx Error | RepositoryError |
//! |------------|-----------------|
//! | Database (any SQLSTATE) | `Database` |
//! | PoolClosed / PoolTimedOut | `Unavailable` |
//! | Column decode / other | `Database` |
//!
//! ## Thread Safety
//!
//! `PostgresProductRepository` is `Send + Sync`; concurrency is delegated to
//! the SQLx connection pool and the database.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::{FromRow, PgPool, Row};
use tracing::{Span, instrument};

use catalogue_core::ProductId;
use catalogue_products::{NewProduct, Product};

use super::r#trait::{ProductRepository, RepositoryError};
use super::specs::{SpecsDecodePolicy, encode_specs};

/// Postgres-backed product store.
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: Arc<PgPool>,
    specs_policy: SpecsDecodePolicy,
}

impl PostgresProductRepository {
    /// Create a repository over an established connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
            specs_policy: SpecsDecodePolicy::default(),
        }
    }

    /// Choose how undecodable `specs` documents are handled on read.
    pub fn with_specs_policy(mut self, policy: SpecsDecodePolicy) -> Self {
        self.specs_policy = policy;
        self
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    #[instrument(skip(self), fields(row_count = tracing::field::Empty), err)]
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT
                id::text AS id,
                title,
                category,
                description,
                price::bigint AS price,
                specs,
                images
            FROM products
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_products", e))?;

        let mut products = Vec::with_capacity(rows.len());
        for row in rows {
            let row = ProductRow::from_row(&row).map_err(|e| map_sqlx_error("decode_product_row", e))?;
            products.push(row.into_product(self.specs_policy)?);
        }

        Span::current().record("row_count", products.len());
        Ok(products)
    }

    #[instrument(
        skip(self, new_product),
        fields(
            spec_count = new_product.specs.len(),
            image_count = new_product.images.len(),
            product_id = tracing::field::Empty
        ),
        err
    )]
    async fn create(&self, new_product: NewProduct) -> Result<Product, RepositoryError> {
        let specs = encode_specs(&new_product.specs)
            .map_err(|e| RepositoryError::Database(format!("encode_specs: {e}")))?;

        let row = sqlx::query(
            r#"
            INSERT INTO products (
                title,
                category,
                description,
                price,
                specs,
                images
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id::text AS id
            "#,
        )
        .bind(&new_product.title)
        .bind(&new_product.category)
        .bind(&new_product.description)
        .bind(new_product.price)
        .bind(&specs)
        .bind(&new_product.images)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert_product", e))?;

        let id: String = row
            .try_get("id")
            .map_err(|e| map_sqlx_error("read_generated_id", e))?;
        let id = ProductId::try_from(id)
            .map_err(|e| RepositoryError::Database(format!("read_generated_id: {e}")))?;

        Span::current().record("product_id", id.as_str());
        Ok(new_product.into_product(id))
    }
}

/// Map SQLx errors to RepositoryError, keeping the backend's message.
fn map_sqlx_error(operation: &str, err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(db_err) => match db_err.code() {
            Some(code) => RepositoryError::Database(format!(
                "{operation}: {} (SQLSTATE {code})",
                db_err.message()
            )),
            None => RepositoryError::Database(format!("{operation}: {}", db_err.message())),
        },
        sqlx::Error::PoolClosed => {
            RepositoryError::Unavailable(format!("connection pool closed in {operation}"))
        }
        sqlx::Error::PoolTimedOut => {
            RepositoryError::Unavailable(format!("connection pool timed out in {operation}"))
        }
        other => RepositoryError::Database(format!("{operation}: {other}")),
    }
}

// SQLx row types

#[derive(Debug)]
struct ProductRow {
    id: String,
    title: String,
    category: String,
    description: String,
    price: i64,
    specs: Option<JsonValue>,
    images: Option<Vec<String>>,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for ProductRow {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(ProductRow {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            category: row.try_get("category")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            specs: row.try_get("specs")?,
            images: row.try_get("images")?,
        })
    }
}

impl ProductRow {
    fn into_product(self, specs_policy: SpecsDecodePolicy) -> Result<Product, RepositoryError> {
        let specs = specs_policy.decode(&self.id, self.specs)?;
        let id = ProductId::try_from(self.id)
            .map_err(|e| RepositoryError::Database(format!("decode_product_row: {e}")))?;

        Ok(Product {
            id,
            title: self.title,
            category: self.category,
            description: self.description,
            price: self.price,
            specs,
            images: self.images.unwrap_or_default(),
        })
    }
}
