//! Menu dish types.
//!
//! A dish is a menu item record with a name, description, price, and image.
//! Dishes are created and updated through validated payloads and are never
//! deleted.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::storage::Record;

/// A menu item available for ordering.
///
/// Every stored dish has all four fields populated and a positive price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
	/// Unique identifier, assigned by the server on creation.
	pub id: String,
	/// Display name shown on the menu.
	pub name: String,
	/// Menu description.
	pub description: String,
	/// Price as it arrived on the wire; positive, not necessarily integral.
	pub price: Number,
	/// URL of the menu image.
	pub image_url: String,
}

impl Record for Dish {
	fn id(&self) -> &str {
		&self.id
	}
}

/// Incoming dish fields from a create or update request body.
///
/// Field presence is a validation-pipeline concern with specific error
/// messages, not a deserialization concern, so every field is optional here.
/// `price` stays a raw JSON value because the pipeline must tell "missing"
/// apart from "not a number".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DishPayload {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub price: Option<Value>,
	#[serde(default)]
	pub image_url: Option<String>,
}

impl DishPayload {
	/// Builds the stored record for a payload that passed create validation.
	pub fn into_record(self, id: String) -> Dish {
		Dish {
			id,
			name: self.name.unwrap_or_default(),
			description: self.description.unwrap_or_default(),
			// Validation guarantees a positive number at this point.
			price: match self.price {
				Some(Value::Number(price)) => price,
				_ => Number::from(0),
			},
			image_url: self.image_url.unwrap_or_default(),
		}
	}

	/// Overwrites each field present in the payload onto the stored record.
	///
	/// The id is never touched, even when the payload carries one.
	pub fn apply_to(&self, dish: &mut Dish) {
		if let Some(name) = &self.name {
			dish.name.clone_from(name);
		}
		if let Some(description) = &self.description {
			dish.description.clone_from(description);
		}
		if let Some(Value::Number(price)) = &self.price {
			dish.price = price.clone();
		}
		if let Some(image_url) = &self.image_url {
			dish.image_url.clone_from(image_url);
		}
	}
}
