use super::value_objects::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.price_too_precise")]
    PriceTooPrecise,
    #[error("product.not_found")]
    NotFound(ProductId),
    /// Carries every requested id that has no matching record.
    #[error("product.validation_failed")]
    ValidationFailed(Vec<ProductId>),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
