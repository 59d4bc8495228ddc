use geotrace_core::json::{JsonObject, JsonValue};
use std::fmt::Display;

/// Classification of a discovered geographic structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeoKind {
	/// A travelled path: an object carrying a `waypoints` list.
	Path,
	/// A single point of interest with direct or nested coordinates.
	Venue,
}

impl GeoKind {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			GeoKind::Path => "Path",
			GeoKind::Venue => "Venue",
		}
	}
}

impl Display for GeoKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A geographic structure found while scanning a document.
///
/// Findings are transient: they describe one scan of one record and carry
/// the source sub-object (`data`) for detail rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFinding {
	/// Dotted/bracketed location in the document, or `root` at the top level.
	pub source: String,
	pub kind: GeoKind,
	/// Classification from a `type` or `venue_type` field, if a string.
	pub geo_type: Option<String>,
	pub significance: Option<JsonValue>,
	pub accuracy: Option<JsonValue>,
	/// One-line description: waypoint count for paths, coordinates for venues.
	pub summary: String,
	pub data: JsonValue,
	pub lat: Option<f64>,
	pub lon: Option<f64>,
}

impl GeoFinding {
	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut object = JsonObject::new();
		object.set("source", self.source.as_str());
		object.set("kind", self.kind.as_str());
		object.set_optional("geoType", &self.geo_type);
		object.set_optional("significance", &self.significance);
		object.set_optional("accuracy", &self.accuracy);
		object.set("summary", self.summary.as_str());
		object.set_optional("lat", &self.lat);
		object.set_optional("lon", &self.lon);
		object.set("data", self.data.clone());
		object
	}
}
