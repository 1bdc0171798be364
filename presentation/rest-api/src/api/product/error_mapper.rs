use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ApiErrorCode, ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let code = match &self {
            ProductError::Validation(_) => ApiErrorCode::UnprocessableEntity,
            ProductError::NotFound => ApiErrorCode::NotFound,
            ProductError::Repository(err) => {
                tracing::error!(error = %err, "Product storage failure");
                ApiErrorCode::Internal
            }
        };

        (code.status(), Json(code.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use business::domain::product::validation::ValidationError;

    #[test]
    fn should_map_every_validation_failure_to_error_1() {
        for reason in [
            ValidationError::PriceMissing,
            ValidationError::PriceNotNumeric,
            ValidationError::PriceNotPositive,
        ] {
            let (status, json) = ProductError::Validation(reason).into_error_response();

            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(json.0.errors[0].code, "ERROR-1");
            assert_eq!(json.0.errors[0].title, "Unprocessable Entity");
        }
    }

    #[test]
    fn should_map_not_found_to_error_2() {
        let (status, json) = ProductError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0, ErrorResponse::from(ApiErrorCode::NotFound));
    }

    #[test]
    fn should_hide_storage_failures_behind_internal_error() {
        let (status, json) =
            ProductError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.errors[0].code, "ERROR-0");
    }
}
