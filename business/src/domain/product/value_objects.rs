use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Electronics,
    Clothing,
    Books,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::Electronics => write!(f, "electronics"),
            ProductCategory::Clothing => write!(f, "clothing"),
            ProductCategory::Books => write!(f, "books"),
        }
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electronics" => Ok(ProductCategory::Electronics),
            "clothing" => Ok(ProductCategory::Clothing),
            "books" => Ok(ProductCategory::Books),
            _ => Err(format!("Invalid product category: {}", s)),
        }
    }
}

/// Ordering applied to the `price` column when listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSort {
    Asc,
    Desc,
}

impl std::fmt::Display for PriceSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceSort::Asc => write!(f, "asc"),
            PriceSort::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for PriceSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(PriceSort::Asc),
            "desc" => Ok(PriceSort::Desc),
            _ => Err(format!("Invalid price sort: {}", s)),
        }
    }
}
