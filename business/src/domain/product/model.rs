use super::errors::ProductError;
use super::repository::ProductChanges;
use super::value_objects::{Price, ProductId};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub available: bool,
}

pub struct NewProductProps {
    pub name: String,
    pub price: Price,
}

/// A product that has not been persisted yet and therefore has no id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Price,
    pub available: bool,
}

impl NewProduct {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        validate_name(&props.name)?;

        Ok(Self {
            name: props.name,
            price: props.price,
            available: true,
        })
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: ProductId, name: String, price: Price, available: bool) -> Self {
        Self {
            id,
            name,
            price,
            available,
        }
    }

    /// Merges the given fields over the current values.
    ///
    /// Omitted fields keep their current value. The id and the availability
    /// flag are never part of the result.
    pub fn merge(
        &self,
        name: Option<String>,
        price: Option<Price>,
    ) -> Result<ProductChanges, ProductError> {
        let name = name.unwrap_or_else(|| self.name.clone());
        validate_name(&name)?;

        Ok(ProductChanges {
            name: Some(name),
            price: Some(price.unwrap_or_else(|| self.price.clone())),
            available: None,
        })
    }
}

fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    Ok(())
}
