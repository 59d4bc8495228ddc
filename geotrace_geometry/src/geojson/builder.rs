//! Building a [`GeoCollection`] from resolved event objects.

use super::{GeoCollection, GeoFeature};
use crate::resolve_events;
use geotrace_core::json::{JsonObject, JsonValue};

/// Event fields copied verbatim into feature properties; absent fields
/// become `null`.
const EVENT_PROPERTIES: [&str; 6] = [
	"type",
	"distance",
	"transportMode",
	"transportTags",
	"startTime",
	"endTime",
];

/// Build a feature collection from event objects, one `LineString` feature
/// per event with usable waypoints.
///
/// Events that are not objects, have no `waypoints` array, or whose
/// waypoints all lack coordinates are skipped. Waypoints missing a
/// coordinate are dropped individually; the surviving coordinates keep
/// their input order. The `event_index` property always refers to the
/// position in the input list, so skipped events do not shift it.
pub fn build_collection<'a>(events: impl IntoIterator<Item = &'a JsonValue>) -> GeoCollection {
	let mut features = Vec::new();

	for (event_index, event) in events.into_iter().enumerate() {
		let JsonValue::Object(event) = event else {
			continue;
		};
		let Some(waypoints) = event.get_array("waypoints") else {
			continue;
		};
		if waypoints.is_empty() {
			continue;
		}

		let coordinates: Vec<[f64; 2]> = waypoints.iter().filter_map(waypoint_coordinates).collect();
		if coordinates.is_empty() {
			log::debug!("event {event_index}: all waypoints lack coordinates, skipping");
			continue;
		}

		let mut properties = JsonObject::new();
		properties.set("event_index", event_index);
		for key in EVENT_PROPERTIES {
			properties.set(key, event.get(key).cloned().unwrap_or(JsonValue::Null));
		}

		features.push(GeoFeature::new(coordinates, properties));
	}

	GeoCollection::from(features)
}

/// Resolve a root document and build its feature collection in one step.
#[must_use]
pub fn document_to_collection(document: &JsonValue) -> GeoCollection {
	build_collection(resolve_events(document))
}

/// `[longitude, latitude]` of a waypoint, or `None` if either coordinate is
/// missing or not numeric. `lon`/`lat` are accepted as short key variants.
fn waypoint_coordinates(waypoint: &JsonValue) -> Option<[f64; 2]> {
	let JsonValue::Object(waypoint) = waypoint else {
		return None;
	};
	let lon = waypoint.get_f64("longitude").or_else(|| waypoint.get_f64("lon"))?;
	let lat = waypoint.get_f64("latitude").or_else(|| waypoint.get_f64("lat"))?;
	Some([lon, lat])
}
