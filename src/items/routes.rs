use axum::{Router, routing::get};

use super::handler;
use crate::handler::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_items)
                .post(handler::create_item)
                .options(handler::preflight),
        )
        .route(
            "/:id",
            get(handler::get_item)
                .put(handler::update_item)
                .delete(handler::delete_item)
                .options(handler::preflight),
        )
}
