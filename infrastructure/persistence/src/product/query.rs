use sqlx::{Postgres, QueryBuilder};

use business::domain::product::listing::ProductFilter;
use business::domain::product::value_objects::PriceSort;

use super::entity::PRODUCT_COLUMNS;

/// `SELECT` for one page of products matching `filter`.
pub fn select_page(
    filter: &ProductFilter,
    sort: Option<PriceSort>,
    skip: u64,
    limit: u64,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products"));
    push_filter(&mut builder, filter);
    builder.push(order_clause(sort));
    builder
        .push(" LIMIT ")
        .push_bind(to_i64(limit))
        .push(" OFFSET ")
        .push_bind(to_i64(skip));
    builder
}

/// `SELECT COUNT(*)` over the same filtered set as [`select_page`].
pub fn count_matching(filter: &ProductFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM products");
    push_filter(&mut builder, filter);
    builder
}

fn push_filter(builder: &mut QueryBuilder<'static, Postgres>, filter: &ProductFilter) {
    let mut joiner = " WHERE ";

    if let Some(search) = &filter.search {
        let pattern = like_pattern(search);
        builder
            .push(joiner)
            .push("(name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern)
            .push(")");
        joiner = " AND ";
    }

    if let Some(category) = &filter.category {
        builder
            .push(joiner)
            .push("category = ")
            .push_bind(category.clone());
    }
}

/// Insertion order is the natural order; price sorts keep it as a tiebreaker.
fn order_clause(sort: Option<PriceSort>) -> &'static str {
    match sort {
        Some(PriceSort::Asc) => " ORDER BY price ASC, created_at, id",
        Some(PriceSort::Desc) => " ORDER BY price DESC, created_at, id",
        None => " ORDER BY created_at, id",
    }
}

pub fn select_by_id() -> String {
    format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1")
}

pub fn insert_returning() -> String {
    format!(
        "INSERT INTO products (name, description, price, image_url, category) \
         VALUES ($1, $2, $3, $4, $5) RETURNING {PRODUCT_COLUMNS}"
    )
}

/// Partial update: a `NULL` parameter keeps the stored value.
pub fn update_returning() -> String {
    format!(
        "UPDATE products SET \
         name = COALESCE($2, name), \
         description = COALESCE($3, description), \
         price = COALESCE($4, price), \
         image_url = COALESCE($5, image_url), \
         category = COALESCE($6, category) \
         WHERE id = $1 RETURNING {PRODUCT_COLUMNS}"
    )
}

/// Atomic append: concurrent calls never drop a review.
pub fn append_review_returning() -> String {
    format!(
        "UPDATE products SET reviews = array_append(reviews, $2::TEXT) \
         WHERE id = $1 RETURNING {PRODUCT_COLUMNS}"
    )
}

/// Wraps `search` for a substring `ILIKE`, escaping LIKE metacharacters.
pub fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
