use geotrace_core::json::{JsonArray, JsonObject, JsonValue};

/// A GeoJSON `Feature` with a `LineString` geometry.
///
/// Coordinates are `[longitude, latitude]` pairs in input order, per RFC
/// 7946. Properties are passed through verbatim from the source event.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub coordinates: Vec<[f64; 2]>,
	pub properties: JsonObject,
}

impl GeoFeature {
	#[must_use]
	pub fn new(coordinates: Vec<[f64; 2]>, properties: JsonObject) -> Self {
		Self {
			coordinates,
			properties,
		}
	}

	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut geometry = JsonObject::new();
		geometry.set("type", "LineString");
		geometry.set(
			"coordinates",
			JsonValue::Array(JsonArray(
				self.coordinates.iter().map(JsonValue::from).collect(),
			)),
		);

		let mut feature = JsonObject::new();
		feature.set("type", "Feature");
		feature.set("geometry", geometry);
		feature.set("properties", self.properties.clone());
		feature
	}
}
