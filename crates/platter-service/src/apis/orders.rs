//! Order endpoint handlers.

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Json,
};
use platter_core::orders;
use platter_types::{ApiError, Envelope, Order, OrderPayload};

use crate::server::AppState;

/// Handles GET /orders requests.
pub async fn list(State(state): State<AppState>) -> Json<Envelope<Vec<Order>>> {
	let data = orders::list(state.orders.as_ref()).await;
	Json(Envelope { data })
}

/// Handles POST /orders requests.
pub async fn create(
	State(state): State<AppState>,
	Json(body): Json<Envelope<OrderPayload>>,
) -> Result<(StatusCode, Json<Envelope<Order>>), ApiError> {
	match orders::create(state.orders.as_ref(), body.data).await {
		Ok(order) => Ok((StatusCode::CREATED, Json(Envelope { data: order }))),
		Err(e) => {
			tracing::warn!("Order creation rejected: {}", e);
			Err(e)
		}
	}
}

/// Handles GET /orders/{id} requests.
pub async fn read(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<Json<Envelope<Order>>, ApiError> {
	match orders::read(state.orders.as_ref(), &id).await {
		Ok(order) => Ok(Json(Envelope { data: order })),
		Err(e) => {
			tracing::warn!("Order retrieval failed: {}", e);
			Err(e)
		}
	}
}

/// Handles PUT /orders/{id} requests.
pub async fn update(
	Path(id): Path<String>,
	State(state): State<AppState>,
	Json(body): Json<Envelope<OrderPayload>>,
) -> Result<Json<Envelope<Order>>, ApiError> {
	match orders::update(state.orders.as_ref(), &id, body.data).await {
		Ok(order) => Ok(Json(Envelope { data: order })),
		Err(e) => {
			tracing::warn!("Order update rejected: {}", e);
			Err(e)
		}
	}
}

/// Handles DELETE /orders/{id} requests.
pub async fn delete(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
	match orders::delete(state.orders.as_ref(), &id).await {
		Ok(()) => Ok(StatusCode::NO_CONTENT),
		Err(e) => {
			tracing::warn!("Order deletion rejected: {}", e);
			Err(e)
		}
	}
}
