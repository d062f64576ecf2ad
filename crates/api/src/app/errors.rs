use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use addressbook_infra::{ProximityError, StoreError};

pub const ADDRESS_NOT_FOUND: &str = "Address not found";

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "not_found", ADDRESS_NOT_FOUND),
        StoreError::Storage(msg) => {
            tracing::error!(error = %msg, "address store failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", msg)
        }
    }
}

pub fn proximity_error_to_response(err: ProximityError) -> axum::response::Response {
    match err {
        ProximityError::Store(e) => store_error_to_response(e),
        ProximityError::Numeric(e) => {
            tracing::error!(error = %e, "distance computation failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "numeric_error", e.to_string())
        }
    }
}

pub fn json_rejection(rejection: JsonRejection) -> axum::response::Response {
    json_error(
        StatusCode::UNPROCESSABLE_ENTITY,
        "validation_error",
        rejection.body_text(),
    )
}

pub fn query_rejection(rejection: QueryRejection) -> axum::response::Response {
    json_error(
        StatusCode::UNPROCESSABLE_ENTITY,
        "validation_error",
        rejection.body_text(),
    )
}

pub fn invalid_id(raw: &str) -> axum::response::Response {
    json_error(
        StatusCode::UNPROCESSABLE_ENTITY,
        "validation_error",
        format!("address id must be an integer, got '{raw}'"),
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use addressbook_core::{AddressId, DomainError};

    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let res = store_error_to_response(StoreError::NotFound(AddressId::new(1)));
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn numeric_failure_maps_to_500() {
        let res = proximity_error_to_response(ProximityError::Numeric(DomainError::numeric(
            "math domain error",
        )));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn storage_failure_maps_to_500() {
        let res = proximity_error_to_response(ProximityError::Store(StoreError::Storage(
            "disk full".to_string(),
        )));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
