use std::sync::Arc;

use catalogue_infra::ProductRepository;

use super::errors::ErrorExposure;

/// Handles shared by every request.
#[derive(Clone)]
pub struct AppServices {
    pub products: Arc<dyn ProductRepository>,
    pub exposure: ErrorExposure,
}

impl AppServices {
    pub fn new(products: Arc<dyn ProductRepository>, exposure: ErrorExposure) -> Self {
        Self { products, exposure }
    }
}
