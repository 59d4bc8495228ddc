//! JSON object type with default-to-absent lookups.

use crate::json::{JsonArray, JsonValue, escape_json_string, stringify};
use anyhow::Result;
use std::{
	collections::BTreeMap,
	fmt::{Debug, Display},
};

/// A JSON object backed by a `BTreeMap<String, JsonValue>`.
///
/// Keys iterate in sorted order; this is the object's natural iteration
/// order everywhere in the workspace, including serialized output.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub BTreeMap<String, JsonValue>);

impl JsonObject {
	/// Create a new, empty `JsonObject`.
	#[must_use]
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	/// Parse a JSON string into a `JsonObject`.
	///
	/// # Errors
	/// Returns an error on invalid JSON or a non-object root.
	pub fn parse_str(json: &str) -> Result<JsonObject> {
		JsonValue::parse_str(json)?.into_object()
	}

	/// Get the raw `JsonValue` for a key, if present.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	/// Get the string value for a key; `None` if missing or not a string.
	#[must_use]
	pub fn get_str(&self, key: &str) -> Option<&str> {
		match self.get(key) {
			Some(JsonValue::String(text)) => Some(text),
			_ => None,
		}
	}

	/// Get the numeric value for a key; `None` if missing or not a number.
	#[must_use]
	pub fn get_f64(&self, key: &str) -> Option<f64> {
		match self.get(key) {
			Some(JsonValue::Number(value)) => Some(*value),
			_ => None,
		}
	}

	/// Get the nested object for a key; `None` if missing or not an object.
	#[must_use]
	pub fn get_object(&self, key: &str) -> Option<&JsonObject> {
		match self.get(key) {
			Some(JsonValue::Object(object)) => Some(object),
			_ => None,
		}
	}

	/// Get the array for a key; `None` if missing or not an array.
	#[must_use]
	pub fn get_array(&self, key: &str) -> Option<&JsonArray> {
		match self.get(key) {
			Some(JsonValue::Array(array)) => Some(array),
			_ => None,
		}
	}

	/// Set a key to the given value, converting it into a `JsonValue`.
	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.insert(key.to_owned(), JsonValue::from(value));
	}

	/// Set a key only if the provided `Option` is `Some`.
	pub fn set_optional<T>(&mut self, key: &str, value: &Option<T>)
	where
		JsonValue: From<T>,
		T: Clone,
	{
		if let Some(v) = value {
			self.0.insert(key.to_owned(), JsonValue::from(v.clone()));
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterate over key-value pairs in sorted key order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
		self.0.iter()
	}

	/// Serialize to a compact JSON string without extra whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\":{}", escape_json_string(key), stringify(value)))
			.collect::<Vec<_>>();
		format!("{{{}}}", items.join(","))
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl Display for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.stringify())
	}
}

impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonObject(
			input
				.into_iter()
				.map(|(key, value)| (key.to_string(), JsonValue::from(value)))
				.collect(),
		)
	}
}

impl<T> From<Vec<(&str, T)>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonValue::Object(JsonObject::from(input))
	}
}
