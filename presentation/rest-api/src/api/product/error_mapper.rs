use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let (status, name, ids) = match self {
            ProductError::NameEmpty
            | ProductError::PriceNegative
            | ProductError::PriceTooPrecise => (StatusCode::BAD_REQUEST, "ValidationError", None),
            ProductError::NotFound(id) => (StatusCode::NOT_FOUND, "NotFound", Some(vec![id.value()])),
            ProductError::ValidationFailed(missing) => (
                StatusCode::BAD_REQUEST,
                "ValidationFailed",
                Some(missing.into_iter().map(|id| id.value()).collect()),
            ),
            ProductError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError", None)
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
                ids,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use business::domain::product::value_objects::ProductId;

    #[test]
    fn should_map_not_found_to_404_with_id() {
        let (status, json) = ProductError::NotFound(ProductId::new(1)).into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "product.not_found");
        assert_eq!(json.0.ids, Some(vec![1]));
    }

    #[test]
    fn should_map_validation_failure_to_400_with_every_missing_id() {
        let missing = vec![ProductId::new(3), ProductId::new(8)];
        let (status, json) = ProductError::ValidationFailed(missing).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationFailed");
        assert_eq!(json.0.ids, Some(vec![3, 8]));
    }

    #[test]
    fn should_map_field_errors_to_400() {
        let (status, json) = ProductError::PriceTooPrecise.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "product.price_too_precise");
        assert_eq!(json.0.ids, None);
    }

    #[test]
    fn should_hide_repository_details_behind_500() {
        let (status, json) =
            ProductError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
