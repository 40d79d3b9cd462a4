use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::{ProductKey, ProductRepository};
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::product::value_objects::ProductId;

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

/// Resolves an available product. Removed products are reported as missing.
pub(crate) async fn find_available(
    repository: &dyn ProductRepository,
    id: ProductId,
) -> Result<Product, ProductError> {
    repository
        .find_unique(&ProductKey::available(id))
        .await?
        .ok_or(ProductError::NotFound(id))
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        find_available(self.repository.as_ref(), params.id).await
    }
}
