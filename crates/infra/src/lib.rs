//! Infrastructure layer: configuration, database pool, product storage.

pub mod config;
pub mod db;
pub mod repository;

pub use config::{AppConfig, ConfigError};
pub use repository::{
    InMemoryProductRepository, PostgresProductRepository, ProductRepository, RepositoryError,
    SpecsDecodePolicy,
};
