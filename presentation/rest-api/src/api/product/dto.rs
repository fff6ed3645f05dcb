use poem_openapi::types::multipart::Upload;
use poem_openapi::{Enum, Multipart, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::listing::ProductPage;
use business::domain::product::model::{ImageFile, Product};
use business::domain::product::validation::ProductPayload;
use business::domain::product::value_objects::ProductCategory;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum ProductCategoryDto {
    #[oai(rename = "electronics")]
    Electronics,
    #[oai(rename = "clothing")]
    Clothing,
    #[oai(rename = "books")]
    Books,
}

impl From<ProductCategory> for ProductCategoryDto {
    fn from(category: ProductCategory) -> Self {
        match category {
            ProductCategory::Electronics => ProductCategoryDto::Electronics,
            ProductCategory::Clothing => ProductCategoryDto::Clothing,
            ProductCategory::Books => ProductCategoryDto::Books,
        }
    }
}

/// Product creation form.
///
/// Every text field is optional at the transport level so that the domain
/// can report all missing fields at once.
#[derive(Multipart)]
pub struct CreateProductForm {
    /// Product name (3 to 100 characters)
    pub name: Option<String>,
    /// Product description (10 to 500 characters)
    pub description: Option<String>,
    /// Positive price
    pub price: Option<String>,
    /// One of electronics, clothing, books
    pub category: Option<String>,
    /// Product image, uploaded to the media host
    pub image: Option<Upload>,
}

impl CreateProductForm {
    pub fn payload(&self) -> ProductPayload {
        ProductPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            category: self.category.clone(),
        }
    }
}

#[derive(Multipart)]
pub struct UpdateProductForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    /// Replacement image URL, ignored when `image` is sent
    #[oai(rename = "imageUrl")]
    pub image_url: Option<String>,
    /// Replacement image file
    pub image: Option<Upload>,
}

impl UpdateProductForm {
    pub fn payload(&self) -> ProductPayload {
        ProductPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            category: self.category.clone(),
        }
    }
}

/// Reads an uploaded file into memory.
///
/// An empty file part (a form submitted without choosing a file) counts as
/// no image at all.
pub async fn read_image(upload: Option<Upload>) -> std::io::Result<Option<ImageFile>> {
    let Some(upload) = upload else {
        return Ok(None);
    };

    let file_name = upload.file_name().unwrap_or("upload").to_string();
    let content_type = upload.content_type().map(str::to_string);
    let bytes = upload.into_vec().await?;

    if bytes.is_empty() {
        return Ok(None);
    }

    Ok(Some(ImageFile::new(file_name, content_type, bytes)))
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Public URL of the product image
    pub image_url: String,
    pub category: ProductCategoryDto,
    /// Review comments in insertion order
    pub review: Vec<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            category: product.category.into(),
            review: product.reviews,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductPageResponse {
    pub items: Vec<ProductResponse>,
    /// Number of products matching the filter across all pages
    pub total: u64,
    pub total_pages: u64,
    pub page: u64,
    /// Effective page size after clamping
    pub limit: u64,
}

impl From<ProductPage> for ProductPageResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            items: page.items.into_iter().map(ProductResponse::from).collect(),
            total: page.total,
            total_pages: page.total_pages,
            page: page.page,
            limit: page.limit,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DeleteConfirmationResponse {
    pub message: String,
}
