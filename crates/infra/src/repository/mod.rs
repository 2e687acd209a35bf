//! Product storage boundary.
//!
//! The `products` table is the single source of truth. Implementations here
//! translate between [`catalogue_products::Product`] and whatever the backend
//! stores, including the `specs` JSON document and the `images` array.

pub mod in_memory;
pub mod postgres;
pub mod specs;
pub mod r#trait;

pub use in_memory::InMemoryProductRepository;
pub use postgres::PostgresProductRepository;
pub use specs::SpecsDecodePolicy;
pub use r#trait::{ProductRepository, RepositoryError};
