use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::{
    ProductChanges, ProductFilter, ProductKey, ProductRepository,
};
use business::domain::product::value_objects::ProductId;

use super::entity::ProductEntity;

const SELECT_PRODUCTS: &str = "SELECT id, name, price, available FROM products";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    tracing::error!("Product query failed: {}", e);
    RepositoryError::DatabaseError
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    let mut separator = " WHERE ";
    if let Some(available) = filter.available {
        builder
            .push(separator)
            .push("available = ")
            .push_bind(available);
        separator = " AND ";
    }
    if let Some(ids) = &filter.ids {
        let ids: Vec<i32> = ids.iter().map(ProductId::value).collect();
        builder.push(separator).push("id = ANY(").push_bind(ids).push(")");
    }
}

fn count_query(filter: &ProductFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM products");
    push_filter(&mut builder, filter);
    builder
}

fn find_many_query(
    filter: &ProductFilter,
    skip: u64,
    take: Option<u64>,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_PRODUCTS);
    push_filter(&mut builder, filter);
    builder.push(" ORDER BY id");
    if skip > 0 {
        builder.push(" OFFSET ").push_bind(to_i64(skip));
    }
    if let Some(take) = take {
        builder.push(" LIMIT ").push_bind(to_i64(take));
    }
    builder
}

fn find_unique_query(key: &ProductKey) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_PRODUCTS);
    builder.push(" WHERE id = ").push_bind(key.id.value());
    if let Some(available) = key.available {
        builder.push(" AND available = ").push_bind(available);
    }
    builder
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn count(&self, filter: &ProductFilter) -> Result<u64, RepositoryError> {
        let total: i64 = count_query(filter)
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn find_many(
        &self,
        filter: &ProductFilter,
        skip: u64,
        take: Option<u64>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let entities = find_many_query(filter, skip, take)
            .build_query_as::<ProductEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_unique(&self, key: &ProductKey) -> Result<Option<Product>, RepositoryError> {
        let entity = find_unique_query(key)
            .build_query_as::<ProductEntity>()
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "INSERT INTO products (name, price, available) VALUES ($1, $2, $3) RETURNING id, name, price, available",
        )
        .bind(&product.name)
        .bind(product.price.value())
        .bind(product.available)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.into_domain())
    }

    async fn update_by_key(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"UPDATE products SET
                name = COALESCE($2, name),
                price = COALESCE($3, price),
                available = COALESCE($4, available)
            WHERE id = $1
            RETURNING id, name, price, available"#,
        )
        .bind(id.value())
        .bind(changes.name.as_deref())
        .bind(changes.price.as_ref().map(|p| p.value()))
        .bind(changes.available)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_count_only_available_rows_when_filtered() {
        let query = count_query(&ProductFilter::available());
        assert_eq!(
            query.sql(),
            "SELECT COUNT(*) FROM products WHERE available = $1"
        );
    }

    #[test]
    fn should_page_available_rows_in_id_order() {
        let query = find_many_query(&ProductFilter::available(), 20, Some(10));
        assert_eq!(
            query.sql(),
            "SELECT id, name, price, available FROM products WHERE available = $1 ORDER BY id OFFSET $2 LIMIT $3"
        );
    }

    #[test]
    fn should_not_filter_availability_when_matching_ids() {
        let query = find_many_query(
            &ProductFilter::ids_in(vec![ProductId::new(1), ProductId::new(2)]),
            0,
            None,
        );
        assert_eq!(
            query.sql(),
            "SELECT id, name, price, available FROM products WHERE id = ANY($1) ORDER BY id"
        );
    }

    #[test]
    fn should_combine_filters_with_and() {
        let filter = ProductFilter {
            available: Some(true),
            ids: Some(vec![ProductId::new(3)]),
        };
        assert_eq!(
            count_query(&filter).sql(),
            "SELECT COUNT(*) FROM products WHERE available = $1 AND id = ANY($2)"
        );
    }

    #[test]
    fn should_scope_unique_lookup_to_available_rows() {
        let query = find_unique_query(&ProductKey::available(ProductId::new(9)));
        assert_eq!(
            query.sql(),
            "SELECT id, name, price, available FROM products WHERE id = $1 AND available = $2"
        );
    }
}
