use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};
use super::value_objects::{Price, ProductId};

/// Row filter understood by the store. `None` fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub available: Option<bool>,
    pub ids: Option<Vec<ProductId>>,
}

impl ProductFilter {
    pub fn available() -> Self {
        Self {
            available: Some(true),
            ids: None,
        }
    }

    /// Matches the given ids whatever their availability.
    pub fn ids_in(ids: Vec<ProductId>) -> Self {
        Self {
            available: None,
            ids: Some(ids),
        }
    }
}

/// Unique lookup key: an id, optionally narrowed by availability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductKey {
    pub id: ProductId,
    pub available: Option<bool>,
}

impl ProductKey {
    pub fn available(id: ProductId) -> Self {
        Self {
            id,
            available: Some(true),
        }
    }
}

/// Fields written by a keyed update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<Price>,
    pub available: Option<bool>,
}

impl ProductChanges {
    pub fn soft_delete() -> Self {
        Self {
            available: Some(false),
            ..Default::default()
        }
    }
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn count(&self, filter: &ProductFilter) -> Result<u64, RepositoryError>;
    /// Rows come back in ascending id order.
    async fn find_many(
        &self,
        filter: &ProductFilter,
        skip: u64,
        take: Option<u64>,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn find_unique(&self, key: &ProductKey) -> Result<Option<Product>, RepositoryError>;
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    /// Fails with [`RepositoryError::NotFound`] when no row has the id.
    async fn update_by_key(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError>;
}
