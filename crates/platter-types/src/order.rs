//! Customer order types.
//!
//! An order references dish quantities and carries a delivery status that
//! gates updates and deletion. Orders are created, updated in place, and
//! removed while still pending.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::storage::Record;

/// Delivery states an order is expected to move through.
pub mod status {
	pub const PENDING: &str = "pending";
	pub const PREPARING: &str = "preparing";
	pub const OUT_FOR_DELIVERY: &str = "out-for-delivery";
	pub const DELIVERED: &str = "delivered";
}

/// A customer order referencing dish quantities.
///
/// `status` is a free-form optional string: updates accept any non-empty
/// value except the literal "invalid", and creation does not require the
/// field at all. The known states in [`status`] are what the stored-status
/// checks compare against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
	/// Unique identifier, assigned by the server on creation.
	pub id: String,
	/// Delivery address.
	#[serde(rename = "deliverTo")]
	pub deliver_to: String,
	/// Contact number for the delivery.
	#[serde(rename = "mobileNumber")]
	pub mobile_number: String,
	/// Current delivery status, absent when never set.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// Ordered dishes; always non-empty for a stored order.
	pub dishes: Vec<OrderDish>,
}

impl Record for Order {
	fn id(&self) -> &str {
		&self.id
	}
}

/// One line of an order: a dish reference plus a quantity.
///
/// Only `quantity` is ever validated. The dish reference is weak (never
/// checked against the dish store), so the remaining entry fields pass
/// through storage and responses untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDish {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub quantity: Option<Value>,
	#[serde(flatten)]
	pub fields: Map<String, Value>,
}

/// Incoming order fields from a create or update request body.
///
/// As with dishes, presence is checked by the validation pipeline; `quantity`
/// inside each entry stays a raw JSON value for the same reason as the dish
/// price.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderPayload {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default, rename = "deliverTo")]
	pub deliver_to: Option<String>,
	#[serde(default, rename = "mobileNumber")]
	pub mobile_number: Option<String>,
	#[serde(default)]
	pub status: Option<String>,
	#[serde(default)]
	pub dishes: Option<Vec<OrderDish>>,
}

impl OrderPayload {
	/// Builds the stored record for a payload that passed create validation.
	///
	/// Creation does not validate `status`, so whatever the client sent (or
	/// nothing) is stored as-is.
	pub fn into_record(self, id: String) -> Order {
		Order {
			id,
			deliver_to: self.deliver_to.unwrap_or_default(),
			mobile_number: self.mobile_number.unwrap_or_default(),
			status: self.status,
			dishes: self.dishes.unwrap_or_default(),
		}
	}

	/// Overwrites each field present in the payload onto the stored record.
	///
	/// The id is never touched, even when the payload carries one.
	pub fn apply_to(&self, order: &mut Order) {
		if let Some(deliver_to) = &self.deliver_to {
			order.deliver_to.clone_from(deliver_to);
		}
		if let Some(mobile_number) = &self.mobile_number {
			order.mobile_number.clone_from(mobile_number);
		}
		if let Some(status) = &self.status {
			order.status = Some(status.clone());
		}
		if let Some(dishes) = &self.dishes {
			order.dishes.clone_from(dishes);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_wire_field_names() {
		let order = Order {
			id: "abc".to_string(),
			deliver_to: "221B Baker Street".to_string(),
			mobile_number: "555-0100".to_string(),
			status: Some(status::PENDING.to_string()),
			dishes: vec![],
		};

		let value = serde_json::to_value(&order).unwrap();
		assert_eq!(value["deliverTo"], "221B Baker Street");
		assert_eq!(value["mobileNumber"], "555-0100");
		assert_eq!(value["status"], "pending");
	}

	#[test]
	fn test_absent_status_is_omitted() {
		let order = Order {
			id: "abc".to_string(),
			deliver_to: "somewhere".to_string(),
			mobile_number: "555-0100".to_string(),
			status: None,
			dishes: vec![],
		};

		let value = serde_json::to_value(&order).unwrap();
		assert!(value.get("status").is_none());
	}

	#[test]
	fn test_order_dish_passthrough_fields() {
		let entry: OrderDish = serde_json::from_value(json!({
			"id": "dish-1",
			"name": "Dolsot bibimbap",
			"price": 4,
			"quantity": 2
		}))
		.unwrap();

		assert_eq!(entry.quantity, Some(json!(2)));
		assert_eq!(entry.fields["id"], "dish-1");
		assert_eq!(entry.fields["name"], "Dolsot bibimbap");

		// Passthrough fields survive a round trip.
		let value = serde_json::to_value(&entry).unwrap();
		assert_eq!(value["price"], 4);
		assert_eq!(value["quantity"], 2);
	}

	#[test]
	fn test_payload_adopts_wire_names() {
		let payload: OrderPayload = serde_json::from_value(json!({
			"deliverTo": "home",
			"mobileNumber": "555-0101",
			"dishes": [{ "quantity": 1 }]
		}))
		.unwrap();

		assert_eq!(payload.deliver_to.as_deref(), Some("home"));
		assert_eq!(payload.mobile_number.as_deref(), Some("555-0101"));
		assert!(payload.id.is_none());
		assert_eq!(payload.dishes.unwrap().len(), 1);
	}
}
