use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::listing::ProductFilter;
use business::domain::product::model::{NewProduct, Product, ProductChanges};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::PriceSort;

use super::entity::{ProductEntity, price_to_decimal};
use super::query::{
    append_review_returning, count_matching, insert_returning, select_by_id, select_page,
    update_returning,
};

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> RepositoryError {
    move |e| {
        tracing::error!(operation, error = %e, "product query failed");
        RepositoryError::DatabaseError
    }
}

fn into_domain_all(entities: Vec<ProductEntity>) -> Result<Vec<Product>, RepositoryError> {
    entities.into_iter().map(ProductEntity::into_domain).collect()
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find(
        &self,
        filter: &ProductFilter,
        sort: Option<PriceSort>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut builder = select_page(filter, sort, skip, limit);
        let entities = builder
            .build_query_as::<ProductEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(database_error("find"))?;

        into_domain_all(entities)
    }

    async fn count(&self, filter: &ProductFilter) -> Result<u64, RepositoryError> {
        let mut builder = count_matching(filter);
        let total: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(database_error("count"))?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&select_by_id())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("get_by_id"))?
            .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&insert_returning())
            .bind(&product.name)
            .bind(&product.description)
            .bind(price_to_decimal(product.price)?)
            .bind(&product.image_url)
            .bind(product.category.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(database_error("insert"))?;

        entity.into_domain()
    }

    async fn update(&self, id: Uuid, changes: &ProductChanges) -> Result<Product, RepositoryError> {
        let price = changes.price.map(price_to_decimal).transpose()?;

        let entity = sqlx::query_as::<_, ProductEntity>(&update_returning())
            .bind(id)
            .bind(&changes.name)
            .bind(&changes.description)
            .bind(price)
            .bind(&changes.image_url)
            .bind(changes.category.map(|c| c.to_string()))
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("update"))?
            .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn append_review(&self, id: Uuid, comment: &str) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&append_review_returning())
            .bind(id)
            .bind(comment)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("append_review"))?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error("delete"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
