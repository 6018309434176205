//! Dish endpoint handlers.
//!
//! These handlers stay thin: extract the payload, delegate to the core
//! operations, and render the record or the pipeline's error.

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Json,
};
use platter_core::dishes;
use platter_types::{ApiError, Dish, DishPayload, Envelope};

use crate::server::AppState;

/// Handles GET /dishes requests.
pub async fn list(State(state): State<AppState>) -> Json<Envelope<Vec<Dish>>> {
	let data = dishes::list(state.dishes.as_ref()).await;
	Json(Envelope { data })
}

/// Handles POST /dishes requests.
pub async fn create(
	State(state): State<AppState>,
	Json(body): Json<Envelope<DishPayload>>,
) -> Result<(StatusCode, Json<Envelope<Dish>>), ApiError> {
	match dishes::create(state.dishes.as_ref(), body.data).await {
		Ok(dish) => Ok((StatusCode::CREATED, Json(Envelope { data: dish }))),
		Err(e) => {
			tracing::warn!("Dish creation rejected: {}", e);
			Err(e)
		}
	}
}

/// Handles GET /dishes/{id} requests.
pub async fn read(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<Json<Envelope<Dish>>, ApiError> {
	match dishes::read(state.dishes.as_ref(), &id).await {
		Ok(dish) => Ok(Json(Envelope { data: dish })),
		Err(e) => {
			tracing::warn!("Dish retrieval failed: {}", e);
			Err(e)
		}
	}
}

/// Handles PUT /dishes/{id} requests.
pub async fn update(
	Path(id): Path<String>,
	State(state): State<AppState>,
	Json(body): Json<Envelope<DishPayload>>,
) -> Result<Json<Envelope<Dish>>, ApiError> {
	match dishes::update(state.dishes.as_ref(), &id, body.data).await {
		Ok(dish) => Ok(Json(Envelope { data: dish })),
		Err(e) => {
			tracing::warn!("Dish update rejected: {}", e);
			Err(e)
		}
	}
}
