use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use addressbook_core::AddressId;
use addressbook_infra::AddressStore;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn create_address(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::AddressRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection(e),
    };

    match services.store().create(body.into_fields()).await {
        Ok(created) => {
            tracing::info!(id = %created.id, "address created");
            (StatusCode::OK, Json(dto::AddressResponse::from(created))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_address(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: AddressId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::invalid_id(&id),
    };

    match services.store().get(id).await {
        Ok(found) => (StatusCode::OK, Json(dto::AddressResponse::from(found))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_address(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::AddressRequest>, JsonRejection>,
) -> axum::response::Response {
    let id: AddressId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::invalid_id(&id),
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection(e),
    };

    match services.store().update(id, body.into_fields()).await {
        Ok(updated) => {
            tracing::info!(%id, "address updated");
            (StatusCode::OK, Json(dto::AddressResponse::from(updated))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_address(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: AddressId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::invalid_id(&id),
    };

    match services.store().delete(id).await {
        Ok(()) => {
            tracing::info!(%id, "address deleted");
            (StatusCode::OK, Json(dto::ADDRESS_DELETED)).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_addresses(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().list_all().await {
        Ok(items) => (StatusCode::OK, Json(dto::addresses_to_response(items))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn addresses_within_distance(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::WithinDistanceQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return errors::query_rejection(e),
    };

    match services
        .proximity()
        .find_within(query.point(), query.distance)
        .await
    {
        Ok(items) => (StatusCode::OK, Json(dto::addresses_to_response(items))).into_response(),
        Err(e) => errors::proximity_error_to_response(e),
    }
}
