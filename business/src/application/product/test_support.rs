use std::str::FromStr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::{
    ProductChanges, ProductFilter, ProductKey, ProductRepository,
};
use crate::domain::product::value_objects::{Price, ProductId};

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn count(&self, filter: &ProductFilter) -> Result<u64, RepositoryError>;
        async fn find_many(
            &self,
            filter: &ProductFilter,
            skip: u64,
            take: Option<u64>,
        ) -> Result<Vec<Product>, RepositoryError>;
        async fn find_unique(&self, key: &ProductKey) -> Result<Option<Product>, RepositoryError>;
        async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
        async fn update_by_key(
            &self,
            id: ProductId,
            changes: &ProductChanges,
        ) -> Result<Product, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn price(value: &str) -> Price {
    Price::from_repository(decimal(value))
}

pub fn decimal(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}

pub fn make_product(id: i32, name: &str, available: bool) -> Product {
    Product::from_repository(ProductId::new(id), name.to_string(), price("9.99"), available)
}

/// Store double that honours filters, keys and serial ids.
#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    fn matches(product: &Product, filter: &ProductFilter) -> bool {
        filter.available.is_none_or(|a| product.available == a)
            && filter
                .ids
                .as_ref()
                .is_none_or(|ids| ids.contains(&product.id))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn count(&self, filter: &ProductFilter) -> Result<u64, RepositoryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|p| Self::matches(p, filter)).count() as u64)
    }

    async fn find_many(
        &self,
        filter: &ProductFilter,
        skip: u64,
        take: Option<u64>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let rows = self.rows.lock().unwrap();
        let take = take.map_or(usize::MAX, |t| t as usize);
        Ok(rows
            .iter()
            .filter(|p| Self::matches(p, filter))
            .skip(skip as usize)
            .take(take)
            .cloned()
            .collect())
    }

    async fn find_unique(&self, key: &ProductKey) -> Result<Option<Product>, RepositoryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|p| p.id == key.id && key.available.is_none_or(|a| p.available == a))
            .cloned())
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let id = ProductId::new(rows.len() as i32 + 1);
        let created = Product::from_repository(
            id,
            product.name.clone(),
            product.price.clone(),
            product.available,
        );
        rows.push(created.clone());
        Ok(created)
    }

    async fn update_by_key(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;
        if let Some(name) = &changes.name {
            row.name = name.clone();
        }
        if let Some(price) = &changes.price {
            row.price = price.clone();
        }
        if let Some(available) = changes.available {
            row.available = available;
        }
        Ok(row.clone())
    }
}
