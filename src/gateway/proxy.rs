//! JSON proxy surface.
//!
//! Five routes mirroring the catalog service. Success bodies pass through
//! unchanged with the upstream status; upstream errors are re-wrapped into
//! the gateway's own envelope; an unreachable catalog maps to a fixed 503
//! body. No retries: a single failed call is surfaced immediately.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use super::{
    client::{CatalogUnreachable, UpstreamResponse},
    GatewayState,
};

const UNAVAILABLE_MESSAGE: &str =
    "Catalog service unavailable. Check that the catalog API is running.";

/// Translate an upstream result into the gateway's response
fn relay(result: Result<UpstreamResponse, CatalogUnreachable>) -> Response {
    match result {
        Ok(upstream) if upstream.is_success() => {
            (upstream.status, Json(upstream.body)).into_response()
        }
        Ok(upstream) => {
            let envelope = json!({
                "erro": upstream.detail(),
                "status_code": upstream.status.as_u16(),
            });
            (upstream.status, Json(envelope)).into_response()
        }
        Err(e) => {
            tracing::warn!("{}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "erro": UNAVAILABLE_MESSAGE })),
            )
                .into_response()
        }
    }
}

/// 400 for a missing or empty JSON body; the catalog is never called
fn empty_body() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "erro": "A non-empty JSON body is required" })),
    )
        .into_response()
}

fn body_is_empty(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

pub async fn list_books(State(state): State<GatewayState>) -> Response {
    relay(state.catalog.list_books().await)
}

pub async fn get_book(State(state): State<GatewayState>, Path(id): Path<i64>) -> Response {
    relay(state.catalog.get_book(id).await)
}

pub async fn create_book(
    State(state): State<GatewayState>,
    body: Option<Json<Value>>,
) -> Response {
    let Some(Json(payload)) = body else {
        return empty_body();
    };
    if body_is_empty(&payload) {
        return empty_body();
    }
    relay(state.catalog.create_book(&payload).await)
}

pub async fn update_book(
    State(state): State<GatewayState>,
    Path(id): Path<i64>,
    body: Option<Json<Value>>,
) -> Response {
    let Some(Json(payload)) = body else {
        return empty_body();
    };
    if body_is_empty(&payload) {
        return empty_body();
    }
    relay(state.catalog.update_book(id, &payload).await)
}

pub async fn delete_book(State(state): State<GatewayState>, Path(id): Path<i64>) -> Response {
    relay(state.catalog.delete_book(id).await)
}
