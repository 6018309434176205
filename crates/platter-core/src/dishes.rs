//! Dish validation checks and request operations.
//!
//! Dishes support create, read, update, and list. Each mutating operation
//! runs its validation pipeline to completion before touching the store.

use platter_storage::Repository;
use platter_types::{ApiError, Dish, DishPayload};
use serde_json::Value;

use crate::pipeline::{self, Check, RouteContext};

type DishCheck = Check<DishPayload, Dish>;

/// Checks run before storing a new dish.
const CREATE_CHECKS: &[DishCheck] = &[name, description, price, image];
/// Checks run before returning a stored dish.
const READ_CHECKS: &[DishCheck] = &[exists];
/// Checks run before updating a stored dish.
const UPDATE_CHECKS: &[DishCheck] = &[exists, name, description, price, image, id_matches];

fn exists(_payload: &DishPayload, ctx: &RouteContext<Dish>) -> Result<(), ApiError> {
	if ctx.existing.is_some() {
		return Ok(());
	}
	Err(ApiError::not_found(format!(
		"Dish not found: {}",
		ctx.route_id()
	)))
}

fn name(payload: &DishPayload, _ctx: &RouteContext<Dish>) -> Result<(), ApiError> {
	match payload.name.as_deref() {
		Some(name) if !name.is_empty() => Ok(()),
		_ => Err(ApiError::bad_request("Dish must include a name")),
	}
}

fn description(payload: &DishPayload, _ctx: &RouteContext<Dish>) -> Result<(), ApiError> {
	match payload.description.as_deref() {
		Some(description) if !description.is_empty() => Ok(()),
		_ => Err(ApiError::bad_request("Dish must include a description")),
	}
}

fn price(payload: &DishPayload, _ctx: &RouteContext<Dish>) -> Result<(), ApiError> {
	// Numeric positivity only; fractional prices are accepted.
	let valid = payload
		.price
		.as_ref()
		.and_then(Value::as_f64)
		.is_some_and(|price| price > 0.0);
	if valid {
		Ok(())
	} else {
		Err(ApiError::bad_request(
			"Dish must have a price that is an integer greater than 0",
		))
	}
}

fn image(payload: &DishPayload, _ctx: &RouteContext<Dish>) -> Result<(), ApiError> {
	match payload.image_url.as_deref() {
		Some(image_url) if !image_url.is_empty() => Ok(()),
		_ => Err(ApiError::bad_request("Dish must include an image_url")),
	}
}

fn id_matches(payload: &DishPayload, ctx: &RouteContext<Dish>) -> Result<(), ApiError> {
	match payload.id.as_deref() {
		// An absent, empty, or matching payload id is accepted.
		Some(id) if !id.is_empty() && id != ctx.route_id() => {
			Err(ApiError::bad_request(format!(
				"Dish id does not match route id. Dish: {}, Route: {}",
				id,
				ctx.route_id()
			)))
		},
		_ => Ok(()),
	}
}

/// Validates and stores a new dish, returning the created record.
pub async fn create(
	store: &dyn Repository<Dish>,
	payload: DishPayload,
) -> Result<Dish, ApiError> {
	pipeline::run(&payload, &RouteContext::for_create(), CREATE_CHECKS)?;

	let dish = payload.into_record(crate::next_id());
	store.append(dish.clone()).await;
	tracing::info!(id = %dish.id, "Created dish");
	Ok(dish)
}

/// Returns the dish bound by the existence check.
pub async fn read(store: &dyn Repository<Dish>, id: &str) -> Result<Dish, ApiError> {
	let ctx = RouteContext::for_route(id, store.find(id).await.ok());
	pipeline::run(&DishPayload::default(), &ctx, READ_CHECKS)?;

	ctx.existing
		.ok_or_else(|| ApiError::not_found(format!("Dish not found: {}", id)))
}

/// Validates and applies an in-place update, returning the updated record.
pub async fn update(
	store: &dyn Repository<Dish>,
	id: &str,
	payload: DishPayload,
) -> Result<Dish, ApiError> {
	let ctx = RouteContext::for_route(id, store.find(id).await.ok());
	pipeline::run(&payload, &ctx, UPDATE_CHECKS)?;

	let updated = store
		.update_in_place(id, Box::new(move |dish| payload.apply_to(dish)))
		.await
		.map_err(|_| ApiError::not_found(format!("Dish not found: {}", id)))?;
	tracing::info!(id = %id, "Updated dish");
	Ok(updated)
}

/// Returns the full dish collection in insertion order.
pub async fn list(store: &dyn Repository<Dish>) -> Vec<Dish> {
	store.list().await
}
