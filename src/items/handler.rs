//! HTTP Handlers for the Items API

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::api::{LenientJson, parse_id};
use crate::handler::AppState;

fn success<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

fn created<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

pub async fn list_items(State(state): State<AppState>) -> Response {
    success(state.store.list())
}

pub async fn get_item(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = parse_id(&id);

    match state.store.find_by_id(id) {
        Ok(item) => success(item),
        Err(e) => {
            tracing::debug!("failed to get item: {}", e);
            e.into_response()
        }
    }
}

pub async fn create_item(State(state): State<AppState>, LenientJson(item): LenientJson) -> Response {
    let item = state.store.append(item);
    tracing::info!(id = item.id, "created item");
    created(item)
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    LenientJson(fields): LenientJson,
) -> Response {
    let id = parse_id(&id);

    match state.store.replace_by_id(id, fields) {
        Ok(item) => {
            tracing::info!(id, "updated item");
            success(item)
        }
        Err(e) => {
            tracing::debug!("failed to update item: {}", e);
            e.into_response()
        }
    }
}

pub async fn delete_item(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = parse_id(&id);

    match state.store.remove_by_id(id) {
        Ok(()) => {
            tracing::info!(id, "deleted item");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            tracing::debug!("failed to delete item: {}", e);
            e.into_response()
        }
    }
}

pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
