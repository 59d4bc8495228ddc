use super::GeoFeature;
use geotrace_core::json::{JsonArray, JsonObject, JsonValue};

/// A GeoJSON `FeatureCollection`.
///
/// Always serializes to a well-formed collection, even with no features.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	#[must_use]
	pub fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}

	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut object = JsonObject::new();
		object.set("type", "FeatureCollection");
		object.set(
			"features",
			JsonValue::Array(JsonArray(
				self
					.features
					.iter()
					.map(|feature| JsonValue::Object(feature.to_json()))
					.collect(),
			)),
		);
		object
	}

	#[must_use]
	pub fn stringify(&self) -> String {
		self.to_json().stringify()
	}

	#[must_use]
	pub fn stringify_pretty(&self) -> String {
		JsonValue::Object(self.to_json()).stringify_pretty()
	}
}
