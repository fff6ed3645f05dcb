use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::listing::{Pagination, ProductFilter, ProductListQuery, ProductPage};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};
use crate::domain::product::value_objects::PriceSort;

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl ListProductsUseCaseImpl {
    fn normalise(params: ListProductsParams) -> ProductListQuery {
        ProductListQuery {
            filter: ProductFilter::new(params.search, params.category),
            sort: params
                .price_sort
                .as_deref()
                .and_then(|s| s.parse::<PriceSort>().ok()),
            pagination: Pagination::parse(params.page.as_deref(), params.limit.as_deref()),
        }
    }
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<ProductPage, ProductError> {
        let query = Self::normalise(params);
        let pagination = query.pagination;

        self.logger.info(&format!(
            "Listing products: page={} limit={} filter={:?} sort={:?}",
            pagination.page(),
            pagination.limit(),
            query.filter,
            query.sort
        ));

        // Total is computed over the filtered set, not the whole collection.
        let (items, total) = tokio::try_join!(
            self.repository.find(
                &query.filter,
                query.sort,
                pagination.skip(),
                pagination.limit()
            ),
            self.repository.count(&query.filter),
        )?;

        self.logger.info(&format!(
            "Found {} products on page {} ({} matching)",
            items.len(),
            pagination.page(),
            total
        ));

        Ok(ProductPage {
            items,
            total,
            total_pages: pagination.total_pages(total),
            page: pagination.page(),
            limit: pagination.limit(),
        })
    }
}
