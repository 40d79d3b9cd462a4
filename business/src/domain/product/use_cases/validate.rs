use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

pub struct ValidateProductsParams {
    pub ids: Vec<ProductId>,
}

#[async_trait]
pub trait ValidateProductsUseCase: Send + Sync {
    async fn execute(&self, params: ValidateProductsParams) -> Result<Vec<Product>, ProductError>;
}
