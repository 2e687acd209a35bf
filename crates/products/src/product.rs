use serde::{Deserialize, Deserializer, Serialize};

use catalogue_core::ProductId;

/// One labelled characteristic of a product (e.g. `Weight` = `45g`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spec {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

impl Spec {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A catalogue product as stored and served.
///
/// `id` is assigned by the storage layer when the product is created and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub price: i64,
    pub specs: Vec<Spec>,
    pub images: Vec<String>,
}

/// Information required to create a new [`Product`].
///
/// Decoding is deliberately forgiving about shape: missing or `null` fields
/// take their zero value and unknown fields (including a client-supplied
/// `id`) are ignored. Type mismatches are still errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specs: Vec<Spec>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
}

impl NewProduct {
    /// Attach the storage-assigned identifier, producing the persisted product.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            category: self.category,
            description: self.description,
            price: self.price,
            specs: self.specs,
            images: self.images,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
