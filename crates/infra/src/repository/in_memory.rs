use std::sync::RwLock;

use async_trait::async_trait;

use catalogue_core::ProductId;
use catalogue_products::{NewProduct, Product};

use super::r#trait::{ProductRepository, RepositoryError};

/// In-memory product store.
///
/// Intended for tests/dev. Identifiers are generated with
/// [`ProductId::generate`], standing in for the database default.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self
            .products
            .read()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".to_string()))?;

        Ok(products.clone())
    }

    async fn create(&self, new_product: NewProduct) -> Result<Product, RepositoryError> {
        let product = new_product.into_product(ProductId::generate());

        let mut products = self
            .products
            .write()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".to_string()))?;
        products.push(product.clone());

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogue_products::Spec;

    fn widget() -> NewProduct {
        NewProduct {
            title: "Widget".to_string(),
            category: "Tools".to_string(),
            description: "A widget".to_string(),
            price: 999,
            specs: vec![Spec::new("Weight", "45g")],
            images: vec!["http://x/1.jpg".to_string()],
        }
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_assigns_id_and_keeps_fields() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(widget()).await.unwrap();

        assert!(!created.id.as_str().is_empty());
        assert_eq!(created, widget().into_product(created.id.clone()));
    }

    #[tokio::test]
    async fn list_after_create_contains_created_product() {
        let repo = InMemoryProductRepository::new();
        let first = repo.create(widget()).await.unwrap();
        let second = repo.create(NewProduct::default()).await.unwrap();

        assert_ne!(first.id, second.id);

        let listed = repo.list_all().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.contains(&first));
        assert!(listed.contains(&second));
    }
}
