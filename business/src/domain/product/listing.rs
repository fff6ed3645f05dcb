use super::model::Product;
use super::value_objects::PriceSort;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 30;

/// Page and page size after normalisation.
///
/// Raw values come straight from the query string. Anything that is not a
/// positive integer falls back to the default, and `limit` is clamped to
/// [`MAX_LIMIT`] instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    limit: u64,
}

impl Pagination {
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = positive(page).unwrap_or(DEFAULT_PAGE);
        let limit = positive(limit).unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        Self { page, limit }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of records to skip before this page starts.
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
}

/// Filter predicate: `search` (on name or description) AND `category`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl ProductFilter {
    /// Blank values are treated as absent.
    pub fn new(search: Option<String>, category: Option<String>) -> Self {
        Self {
            search: search.filter(|s| !s.trim().is_empty()),
            category: category.filter(|c| !c.trim().is_empty()),
        }
    }

    /// In-memory evaluation of the filter for store fakes: case-insensitive
    /// substring on name or description, exact category.
    #[cfg(any(test, feature = "test-support"))]
    pub fn matches(&self, product: &Product) -> bool {
        let search_ok = self.search.as_ref().is_none_or(|search| {
            let needle = search.to_lowercase();
            product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
        });
        let category_ok = self
            .category
            .as_ref()
            .is_none_or(|category| product.category.to_string() == *category);

        search_ok && category_ok
    }
}

/// A normalised listing request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListQuery {
    pub filter: ProductFilter,
    pub sort: Option<PriceSort>,
    pub pagination: Pagination,
}

/// One page of products plus the metadata of the filtered set.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub total: u64,
    pub total_pages: u64,
    pub page: u64,
    pub limit: u64,
}
