use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::get_by_id::find_available;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::Price;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let price = params.price.map(Price::new).transpose()?;

        let existing = find_available(self.repository.as_ref(), params.id).await?;
        let changes = existing.merge(params.name, price)?;

        // Keyed by the looked-up row, never by anything in the payload.
        let updated = self
            .repository
            .update_by_key(existing.id, &changes)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound(existing.id),
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
