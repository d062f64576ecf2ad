use axum::{
    routing::{get, post, put},
    Router,
};

pub mod addresses;
pub mod system;

/// Router for the address endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/addresses/", post(addresses::create_address))
        .route(
            "/addresses/:id",
            put(addresses::update_address)
                .delete(addresses::delete_address)
                .get(addresses::get_address),
        )
        .route("/address/", get(addresses::list_addresses))
        .route(
            "/addresses/within_distance/",
            get(addresses::addresses_within_distance),
        )
}
