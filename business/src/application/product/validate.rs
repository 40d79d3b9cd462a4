use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::{ProductFilter, ProductRepository};
use crate::domain::product::use_cases::validate::{
    ValidateProductsParams, ValidateProductsUseCase,
};
use crate::domain::product::value_objects::ProductId;

/// All-or-nothing existence check over a batch of ids.
///
/// Availability is deliberately ignored: a removed product still exists for
/// callers that hold references to it.
pub struct ValidateProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

fn dedup(ids: Vec<ProductId>) -> Vec<ProductId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

#[async_trait]
impl ValidateProductsUseCase for ValidateProductsUseCaseImpl {
    async fn execute(&self, params: ValidateProductsParams) -> Result<Vec<Product>, ProductError> {
        let unique_ids = dedup(params.ids);
        self.logger
            .info(&format!("Validating {} product ids", unique_ids.len()));

        if unique_ids.is_empty() {
            return Ok(Vec::new());
        }

        let products = self
            .repository
            .find_many(&ProductFilter::ids_in(unique_ids.clone()), 0, None)
            .await?;

        if products.len() != unique_ids.len() {
            let found: HashSet<ProductId> = products.iter().map(|p| p.id).collect();
            let missing: Vec<ProductId> = unique_ids
                .into_iter()
                .filter(|id| !found.contains(id))
                .collect();

            let listed: Vec<String> = missing.iter().map(|id| id.to_string()).collect();
            self.logger
                .warn(&format!("Products not found: {}", listed.join(", ")));
            return Err(ProductError::ValidationFailed(missing));
        }

        Ok(products)
    }
}
