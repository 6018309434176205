//! Order validation checks and request operations.
//!
//! Orders support create, read, update, list, and delete. The update and
//! delete pipelines additionally gate on the stored order's delivery status:
//! a delivered order can never change, and only a pending order can be
//! removed.

use platter_storage::Repository;
use platter_types::{order::status, ApiError, Order, OrderPayload};
use serde_json::Value;

use crate::pipeline::{self, Check, RouteContext};

type OrderCheck = Check<OrderPayload, Order>;

/// Checks run before storing a new order.
const CREATE_CHECKS: &[OrderCheck] = &[deliver_to, mobile_number, dishes, dish_quantities];
/// Checks run before returning a stored order.
const READ_CHECKS: &[OrderCheck] = &[exists];
/// Checks run before updating a stored order.
const UPDATE_CHECKS: &[OrderCheck] = &[
	exists,
	deliver_to,
	mobile_number,
	dishes,
	dish_quantities,
	id_matches,
	incoming_status,
	extant_not_delivered,
];
/// Checks run before removing a stored order.
const DELETE_CHECKS: &[OrderCheck] = &[exists, extant_pending];

fn exists(_payload: &OrderPayload, ctx: &RouteContext<Order>) -> Result<(), ApiError> {
	if ctx.existing.is_some() {
		return Ok(());
	}
	Err(ApiError::not_found(format!(
		"Order not found: {}",
		ctx.route_id()
	)))
}

fn deliver_to(payload: &OrderPayload, _ctx: &RouteContext<Order>) -> Result<(), ApiError> {
	match payload.deliver_to.as_deref() {
		Some(deliver_to) if !deliver_to.is_empty() => Ok(()),
		_ => Err(ApiError::bad_request("Order must include a deliverTo")),
	}
}

fn mobile_number(payload: &OrderPayload, _ctx: &RouteContext<Order>) -> Result<(), ApiError> {
	match payload.mobile_number.as_deref() {
		Some(mobile_number) if !mobile_number.is_empty() => Ok(()),
		_ => Err(ApiError::bad_request("Order must include a mobileNumber")),
	}
}

fn dishes(payload: &OrderPayload, _ctx: &RouteContext<Order>) -> Result<(), ApiError> {
	match payload.dishes.as_deref() {
		Some(dishes) if !dishes.is_empty() => Ok(()),
		_ => Err(ApiError::bad_request("Order must include at least one dish")),
	}
}

fn dish_quantities(payload: &OrderPayload, _ctx: &RouteContext<Order>) -> Result<(), ApiError> {
	// Numeric positivity only, as with the dish price. The first offending
	// entry fails the whole request with its zero-based position.
	for (index, dish) in payload.dishes.iter().flatten().enumerate() {
		let valid = dish
			.quantity
			.as_ref()
			.and_then(Value::as_f64)
			.is_some_and(|quantity| quantity > 0.0);
		if !valid {
			return Err(ApiError::bad_request(format!(
				"Dish {} must have a quantity that is an integer greater than 0",
				index
			)));
		}
	}
	Ok(())
}

fn id_matches(payload: &OrderPayload, ctx: &RouteContext<Order>) -> Result<(), ApiError> {
	match payload.id.as_deref() {
		// An absent or empty payload id adopts the route id; the stored id
		// is already the route id, so there is nothing to reconcile.
		Some(id) if !id.is_empty() && id != ctx.route_id() => {
			Err(ApiError::bad_request(format!(
				"Order id does not match route id. Order: {}, Route: {}",
				id,
				ctx.route_id()
			)))
		},
		_ => Ok(()),
	}
}

fn incoming_status(payload: &OrderPayload, _ctx: &RouteContext<Order>) -> Result<(), ApiError> {
	// Any non-empty status other than the literal "invalid" is accepted.
	match payload.status.as_deref() {
		Some(status) if !status.is_empty() && status != "invalid" => Ok(()),
		_ => Err(ApiError::bad_request(
			"Order must have a status of pending, preparing, out-for-delivery, delivered",
		)),
	}
}

fn extant_not_delivered(_payload: &OrderPayload, ctx: &RouteContext<Order>) -> Result<(), ApiError> {
	let delivered = ctx
		.existing
		.as_ref()
		.is_some_and(|order| order.status.as_deref() == Some(status::DELIVERED));
	if delivered {
		Err(ApiError::bad_request("A delivered order cannot be changed"))
	} else {
		Ok(())
	}
}

fn extant_pending(_payload: &OrderPayload, ctx: &RouteContext<Order>) -> Result<(), ApiError> {
	let pending = ctx
		.existing
		.as_ref()
		.is_some_and(|order| order.status.as_deref() == Some(status::PENDING));
	if pending {
		Ok(())
	} else {
		Err(ApiError::bad_request(
			"An order cannot be deleted unless it is pending",
		))
	}
}

/// Validates and stores a new order, returning the created record.
pub async fn create(
	store: &dyn Repository<Order>,
	payload: OrderPayload,
) -> Result<Order, ApiError> {
	pipeline::run(&payload, &RouteContext::for_create(), CREATE_CHECKS)?;

	let order = payload.into_record(crate::next_id());
	store.append(order.clone()).await;
	tracing::info!(id = %order.id, "Created order");
	Ok(order)
}

/// Returns the order bound by the existence check.
pub async fn read(store: &dyn Repository<Order>, id: &str) -> Result<Order, ApiError> {
	let ctx = RouteContext::for_route(id, store.find(id).await.ok());
	pipeline::run(&OrderPayload::default(), &ctx, READ_CHECKS)?;

	ctx.existing
		.ok_or_else(|| ApiError::not_found(format!("Order not found: {}", id)))
}

/// Validates and applies an in-place update, returning the updated record.
pub async fn update(
	store: &dyn Repository<Order>,
	id: &str,
	payload: OrderPayload,
) -> Result<Order, ApiError> {
	let ctx = RouteContext::for_route(id, store.find(id).await.ok());
	pipeline::run(&payload, &ctx, UPDATE_CHECKS)?;

	let updated = store
		.update_in_place(id, Box::new(move |order| payload.apply_to(order)))
		.await
		.map_err(|_| ApiError::not_found(format!("Order not found: {}", id)))?;
	tracing::info!(id = %id, "Updated order");
	Ok(updated)
}

/// Validates and removes a stored order.
pub async fn delete(store: &dyn Repository<Order>, id: &str) -> Result<(), ApiError> {
	let ctx = RouteContext::for_route(id, store.find(id).await.ok());
	pipeline::run(&OrderPayload::default(), &ctx, DELETE_CHECKS)?;

	store
		.remove(id)
		.await
		.map_err(|_| ApiError::not_found(format!("Order not found: {}", id)))?;
	tracing::info!(id = %id, "Deleted order");
	Ok(())
}

/// Returns the full order collection in insertion order.
pub async fn list(store: &dyn Repository<Order>) -> Vec<Order> {
	store.list().await
}
