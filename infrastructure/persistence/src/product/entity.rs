use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductCategory;

/// Column list matching [`ProductEntity`], shared by every query.
pub const PRODUCT_COLUMNS: &str = "id, name, description, price, image_url, category, reviews";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub image_url: String,
    pub category: String,
    pub reviews: Vec<String>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let price = self.price.to_f64().ok_or_else(|| {
            tracing::error!(id = %self.id, price = %self.price, "stored price is not representable");
            RepositoryError::DatabaseError
        })?;
        let category = self.category.parse::<ProductCategory>().map_err(|e| {
            tracing::error!(id = %self.id, error = %e, "stored category is not recognised");
            RepositoryError::DatabaseError
        })?;

        Ok(Product::from_repository(
            self.id,
            self.name,
            self.description,
            price,
            self.image_url,
            category,
            self.reviews,
        ))
    }
}

/// Converts a price to NUMERIC through its shortest decimal form,
/// so `89.9` is stored as `89.9` and not as its binary expansion.
pub fn price_to_decimal(price: f64) -> Result<BigDecimal, RepositoryError> {
    price.to_string().parse::<BigDecimal>().map_err(|e| {
        tracing::error!(price, error = %e, "price cannot be stored as decimal");
        RepositoryError::DatabaseError
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn entity(price: &str, category: &str) -> ProductEntity {
        ProductEntity {
            id: Uuid::new_v4(),
            name: "Linen Shirt".to_string(),
            description: "Breathable linen shirt for summer".to_string(),
            price: BigDecimal::from_str(price).unwrap(),
            image_url: "https://cdn.test/shirt.png".to_string(),
            category: category.to_string(),
            reviews: vec!["Fits well".to_string(), "Nice colour".to_string()],
        }
    }

    #[test]
    fn should_map_entity_into_domain() {
        let product = entity("24.99", "clothing").into_domain().unwrap();

        assert_eq!(product.price, 24.99);
        assert_eq!(product.category, ProductCategory::Clothing);
        assert_eq!(product.reviews, vec!["Fits well", "Nice colour"]);
    }

    #[test]
    fn should_fail_when_stored_category_unknown() {
        let result = entity("24.99", "garden").into_domain();

        assert!(matches!(result, Err(RepositoryError::DatabaseError)));
    }

    #[test]
    fn should_store_shortest_decimal_form_of_price() {
        let decimal = price_to_decimal(89.9).unwrap();

        assert_eq!(decimal, BigDecimal::from_str("89.9").unwrap());
        assert_eq!(decimal.to_f64(), Some(89.9));
    }
}
