use uuid::Uuid;

use super::validation::ValidProduct;
use super::value_objects::ProductCategory;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category: ProductCategory,
    pub reviews: Vec<String>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        price: f64,
        image_url: String,
        category: ProductCategory,
        reviews: Vec<String>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            image_url,
            category,
            reviews,
        }
    }
}

/// A product ready to be inserted. The store assigns the identity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category: ProductCategory,
}

impl NewProduct {
    pub fn new(valid: ValidProduct, image_url: String) -> Self {
        Self {
            name: valid.name,
            description: valid.description,
            price: valid.price,
            image_url,
            category: valid.category,
        }
    }
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub category: Option<ProductCategory>,
}

impl ProductChanges {
    pub fn from_valid(valid: ValidProduct, image_url: Option<String>) -> Self {
        Self {
            name: Some(valid.name),
            description: Some(valid.description),
            price: Some(valid.price),
            image_url,
            category: Some(valid.category),
        }
    }
}

/// An uploaded image file, handed as-is to the media service.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }
}
