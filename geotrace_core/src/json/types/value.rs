//! JSON value enum representing any valid JSON data.

use crate::json::{JsonArray, JsonObject, parse_json_str, stringify, stringify_pretty};
use anyhow::{Result, bail};

/// Any JSON value: object, array, string, number, boolean or null.
///
/// Numbers are stored as `f64`, matching the JSON data model. Lookups on
/// containers default to absent rather than failing, which is what the
/// schemaless telematics payloads require.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	Null,
	Number(f64),
	Object(JsonObject),
	String(String),
}

impl JsonValue {
	/// Parse a JSON document into a `JsonValue`.
	///
	/// # Errors
	/// Returns an error if the JSON is invalid or followed by trailing input.
	pub fn parse_str(json: &str) -> Result<JsonValue> {
		parse_json_str(json)
	}

	/// Return the JSON type as a lowercase string (`"array"`, `"object"`, ...).
	#[must_use]
	pub fn type_as_str(&self) -> &str {
		use JsonValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Null => "null",
			Number(_) => "number",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	/// Serialize to a compact JSON string without unnecessary whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}

	/// Serialize to a two-space indented, multi-line JSON string.
	#[must_use]
	pub fn stringify_pretty(&self) -> String {
		stringify_pretty(self)
	}

	/// Borrow the `JsonObject` if this value is an object.
	///
	/// # Errors
	/// Returns an error if not an object.
	pub fn as_object(&self) -> Result<&JsonObject> {
		if let JsonValue::Object(object) = self {
			Ok(object)
		} else {
			bail!("expected an object, found a {}", self.type_as_str())
		}
	}

	/// Consume the value and extract the `JsonObject` if it is an object.
	///
	/// # Errors
	/// Returns an error if not an object.
	pub fn into_object(self) -> Result<JsonObject> {
		if let JsonValue::Object(object) = self {
			Ok(object)
		} else {
			bail!("expected an object, found a {}", self.type_as_str())
		}
	}

	/// Borrow the `JsonArray` if this value is an array.
	///
	/// # Errors
	/// Returns an error if not an array.
	pub fn as_array(&self) -> Result<&JsonArray> {
		if let JsonValue::Array(array) = self {
			Ok(array)
		} else {
			bail!("expected an array, found a {}", self.type_as_str())
		}
	}

	/// Return a string slice if this value is a JSON string.
	///
	/// # Errors
	/// Returns an error if the value is not a JSON string.
	pub fn as_str(&self) -> Result<&str> {
		match self {
			JsonValue::String(text) => Ok(text),
			_ => bail!("expected a string, found a {}", self.type_as_str()),
		}
	}

	/// Return the numeric value.
	///
	/// # Errors
	/// Returns an error if the value is not a JSON number.
	pub fn as_number(&self) -> Result<f64> {
		if let JsonValue::Number(value) = self {
			Ok(*value)
		} else {
			bail!("expected a number, found a {}", self.type_as_str())
		}
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<&String> for JsonValue {
	fn from(input: &String) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<&JsonValue> for JsonValue {
	fn from(input: &JsonValue) -> Self {
		input.clone()
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}

impl<I> From<I> for JsonValue
where
	JsonArray: From<I>,
{
	fn from(input: I) -> Self {
		JsonValue::Array(input.into())
	}
}

macro_rules! impl_from_number {
	($($ty:ty),*) => {
		$(impl From<$ty> for JsonValue {
			fn from(input: $ty) -> Self {
				JsonValue::Number(input as f64)
			}
		})*
	};
}

impl_from_number!(f32, f64, i32, i64, u32, u64, usize);
