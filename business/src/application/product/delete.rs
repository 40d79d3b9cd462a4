use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::get_by_id::find_available;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::{ProductChanges, ProductRepository};
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

/// Soft delete: the row stays, flagged unavailable.
pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Removing product: {}", params.id));

        // A second removal fails here since the row is no longer available.
        let existing = find_available(self.repository.as_ref(), params.id).await?;

        let removed = self
            .repository
            .update_by_key(existing.id, &ProductChanges::soft_delete())
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound(existing.id),
                other => ProductError::Repository(other),
            })?;

        self.logger.info(&format!("Product removed: {}", removed.id));
        Ok(removed)
    }
}
