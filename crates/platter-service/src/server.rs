//! HTTP server for the platter API.
//!
//! This module builds the application router, owns the shared state, and
//! runs the listener. Routing decides only resource and verb; everything
//! about a request's validity is decided by the validation pipelines behind
//! the handlers.

use axum::{
	http::{Method, Uri},
	routing::get,
	Router,
};
use platter_config::ServerConfig;
use platter_storage::{MemoryRepository, Repository};
use platter_types::{ApiError, Dish, Order};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::apis;

/// Shared application state for the API server.
#[derive(Clone)]
pub struct AppState {
	/// Dish collection, process-scoped.
	pub dishes: Arc<dyn Repository<Dish>>,
	/// Order collection, process-scoped.
	pub orders: Arc<dyn Repository<Order>>,
}

impl AppState {
	/// Creates a state with fresh, empty in-memory collections.
	pub fn new() -> Self {
		Self {
			dishes: Arc::new(MemoryRepository::new()),
			orders: Arc::new(MemoryRepository::new()),
		}
	}
}

impl Default for AppState {
	fn default() -> Self {
		Self::new()
	}
}

/// Builds the application router.
///
/// Each route's method router carries a fallback so that unwired verbs
/// answer 405 with the standard error body; the router-level fallback
/// answers 404 for unknown paths.
pub fn app(state: AppState) -> Router {
	Router::new()
		.route(
			"/dishes",
			get(apis::dishes::list)
				.post(apis::dishes::create)
				.fallback(method_not_allowed),
		)
		.route(
			"/dishes/{id}",
			get(apis::dishes::read)
				.put(apis::dishes::update)
				.fallback(method_not_allowed),
		)
		.route(
			"/orders",
			get(apis::orders::list)
				.post(apis::orders::create)
				.fallback(method_not_allowed),
		)
		.route(
			"/orders/{id}",
			get(apis::orders::read)
				.put(apis::orders::update)
				.delete(apis::orders::delete)
				.fallback(method_not_allowed),
		)
		.fallback(not_found)
		.layer(
			ServiceBuilder::new()
				.layer(TraceLayer::new_for_http())
				.layer(CorsLayer::permissive()),
		)
		.with_state(state)
}

/// Starts the HTTP server for the API.
pub async fn start_server(
	config: ServerConfig,
	state: AppState,
) -> Result<(), Box<dyn std::error::Error>> {
	let app = app(state);

	let bind_address = format!("{}:{}", config.host, config.port);
	let listener = TcpListener::bind(&bind_address).await?;

	tracing::info!("Platter API server starting on {}", bind_address);

	axum::serve(listener, app).await?;

	Ok(())
}

/// Answers any verb not wired for a matched route.
async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
	ApiError::method_not_allowed(format!("{} not allowed for {}", method, uri.path()))
}

/// Answers any path no route matched.
async fn not_found(uri: Uri) -> ApiError {
	ApiError::not_found(format!("Not found: {}", uri.path()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::body::{to_bytes, Body};
	use axum::http::{Request, StatusCode};
	use serde_json::{json, Value};
	use tower::ServiceExt;

	fn test_app() -> Router {
		app(AppState::new())
	}

	/// Drives one request through the router and decodes the JSON body.
	async fn send(
		app: &Router,
		method: &str,
		path: &str,
		body: Option<Value>,
	) -> (StatusCode, Value) {
		let builder = Request::builder().method(method).uri(path);
		let request = match body {
			Some(body) => builder
				.header("content-type", "application/json")
				.body(Body::from(body.to_string()))
				.unwrap(),
			None => builder.body(Body::empty()).unwrap(),
		};

		let response = app.clone().oneshot(request).await.unwrap();
		let status = response.status();
		let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
		let value = if bytes.is_empty() {
			Value::Null
		} else {
			serde_json::from_slice(&bytes).unwrap()
		};
		(status, value)
	}

	fn dish_body() -> Value {
		json!({
			"data": {
				"name": "Dolsot bibimbap",
				"description": "Stone-bowl rice with vegetables",
				"price": 14,
				"image_url": "https://images.test/bibimbap.png"
			}
		})
	}

	fn order_body(status: &str) -> Value {
		json!({
			"data": {
				"deliverTo": "221B Baker Street",
				"mobileNumber": "555-0100",
				"status": status,
				"dishes": [{ "id": "dish-1", "quantity": 2 }]
			}
		})
	}

	#[tokio::test]
	async fn test_dish_crud_flow() {
		let app = test_app();

		let (status, created) = send(&app, "POST", "/dishes", Some(dish_body())).await;
		assert_eq!(status, StatusCode::CREATED);
		let id = created["data"]["id"].as_str().unwrap().to_string();
		assert_eq!(created["data"]["name"], "Dolsot bibimbap");

		let (status, listed) = send(&app, "GET", "/dishes", None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(listed["data"].as_array().unwrap().len(), 1);

		let (status, fetched) = send(&app, "GET", &format!("/dishes/{}", id), None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(fetched, created);

		let mut update = dish_body();
		update["data"]["name"] = json!("Haemul pajeon");
		let (status, updated) =
			send(&app, "PUT", &format!("/dishes/{}", id), Some(update)).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(updated["data"]["name"], "Haemul pajeon");
		assert_eq!(updated["data"]["id"], json!(id));
	}

	#[tokio::test]
	async fn test_dish_validation_error_body() {
		let app = test_app();

		let mut body = dish_body();
		body["data"]["price"] = json!(0);
		let (status, error) = send(&app, "POST", "/dishes", Some(body)).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(
			error,
			json!({ "error": "Dish must have a price that is an integer greater than 0" })
		);
	}

	#[tokio::test]
	async fn test_dish_id_mismatch_is_rejected() {
		let app = test_app();

		let (_, created) = send(&app, "POST", "/dishes", Some(dish_body())).await;
		let id = created["data"]["id"].as_str().unwrap().to_string();

		let mut update = dish_body();
		update["data"]["id"] = json!("other");
		let (status, error) =
			send(&app, "PUT", &format!("/dishes/{}", id), Some(update)).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(
			error["error"],
			json!(format!(
				"Dish id does not match route id. Dish: other, Route: {}",
				id
			))
		);
	}

	#[tokio::test]
	async fn test_dish_not_found() {
		let app = test_app();

		let (status, error) = send(&app, "GET", "/dishes/ghost", None).await;
		assert_eq!(status, StatusCode::NOT_FOUND);
		assert_eq!(error, json!({ "error": "Dish not found: ghost" }));
	}

	#[tokio::test]
	async fn test_order_lifecycle() {
		let app = test_app();

		let (status, created) = send(&app, "POST", "/orders", Some(order_body("pending"))).await;
		assert_eq!(status, StatusCode::CREATED);
		let id = created["data"]["id"].as_str().unwrap().to_string();

		// Move it along, then try to change it once delivered.
		let (status, _) = send(
			&app,
			"PUT",
			&format!("/orders/{}", id),
			Some(order_body("delivered")),
		)
		.await;
		assert_eq!(status, StatusCode::OK);

		let (status, error) = send(
			&app,
			"PUT",
			&format!("/orders/{}", id),
			Some(order_body("preparing")),
		)
		.await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(error, json!({ "error": "A delivered order cannot be changed" }));
	}

	#[tokio::test]
	async fn test_order_delete_requires_pending() {
		let app = test_app();

		let (_, created) = send(&app, "POST", "/orders", Some(order_body("preparing"))).await;
		let id = created["data"]["id"].as_str().unwrap().to_string();

		let (status, error) = send(&app, "DELETE", &format!("/orders/{}", id), None).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(
			error,
			json!({ "error": "An order cannot be deleted unless it is pending" })
		);
	}

	#[tokio::test]
	async fn test_order_delete_then_get() {
		let app = test_app();

		let (_, created) = send(&app, "POST", "/orders", Some(order_body("pending"))).await;
		let id = created["data"]["id"].as_str().unwrap().to_string();

		let (status, body) = send(&app, "DELETE", &format!("/orders/{}", id), None).await;
		assert_eq!(status, StatusCode::NO_CONTENT);
		assert_eq!(body, Value::Null);

		let (status, error) = send(&app, "GET", &format!("/orders/{}", id), None).await;
		assert_eq!(status, StatusCode::NOT_FOUND);
		assert_eq!(
			error,
			json!({ "error": format!("Order not found: {}", id) })
		);
	}

	#[tokio::test]
	async fn test_order_quantity_error_embeds_index() {
		let app = test_app();

		let mut body = order_body("pending");
		body["data"]["dishes"] = json!([
			{ "id": "dish-1", "quantity": 2 },
			{ "id": "dish-2", "quantity": 0 }
		]);
		let (status, error) = send(&app, "POST", "/orders", Some(body)).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(
			error,
			json!({ "error": "Dish 1 must have a quantity that is an integer greater than 0" })
		);
	}

	#[tokio::test]
	async fn test_unwired_verbs_answer_405() {
		let app = test_app();

		for (method, path) in [
			("DELETE", "/dishes"),
			("PUT", "/dishes"),
			("DELETE", "/dishes/some-id"),
			("PATCH", "/orders"),
			("POST", "/orders/some-id"),
		] {
			let (status, error) = send(&app, method, path, None).await;
			assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, path);
			assert_eq!(
				error["error"],
				json!(format!("{} not allowed for {}", method, path))
			);
		}
	}

	#[tokio::test]
	async fn test_405_does_not_mutate_state() {
		let app = test_app();

		send(&app, "POST", "/dishes", Some(dish_body())).await;
		send(&app, "DELETE", "/dishes", None).await;

		let (_, listed) = send(&app, "GET", "/dishes", None).await;
		assert_eq!(listed["data"].as_array().unwrap().len(), 1);
	}

	#[tokio::test]
	async fn test_unknown_route_answers_404() {
		let app = test_app();

		let (status, error) = send(&app, "GET", "/menu", None).await;
		assert_eq!(status, StatusCode::NOT_FOUND);
		assert_eq!(error, json!({ "error": "Not found: /menu" }));
	}
}
