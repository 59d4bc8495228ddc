//! Depth-first scan for paths and venues in schema-inconsistent documents.

use super::{GeoFinding, GeoKind};
use geotrace_core::json::{JsonObject, JsonValue};

/// Scan every top-level field of a record for geographic structures.
///
/// String fields that look like embedded JSON (after trimming they start
/// with `{` or `[`) are parsed first and scanned under the field's name;
/// fields that fail to parse are skipped — the error is deliberately
/// discarded (logged at debug level), scanning continues with the rest of
/// the record. Plain scalar fields are never scanned.
#[must_use]
pub fn scan_record(record: &JsonObject) -> Vec<GeoFinding> {
	let mut findings = Vec::new();
	for (field, value) in record.iter() {
		match value {
			JsonValue::Object(_) | JsonValue::Array(_) => scan_value(value, field, false, &mut findings),
			JsonValue::String(text) => {
				let trimmed = text.trim();
				if trimmed.starts_with('{') || trimmed.starts_with('[') {
					match JsonValue::parse_str(trimmed) {
						Ok(parsed) => scan_value(&parsed, field, false, &mut findings),
						Err(error) => log::debug!("field '{field}' does not parse as JSON: {error:#}"),
					}
				}
			}
			_ => {}
		}
	}
	findings
}

/// Recursively collect geographic structures below `value`.
///
/// An object with a `waypoints` array is a [`GeoKind::Path`]; its whole
/// subtree is marked as inside a path, which suppresses venue findings for
/// the path's own waypoints. Any other object with numeric
/// `latitude`/`longitude` — directly or on a nested `location` object — is
/// a [`GeoKind::Venue`], unless suppressed. Findings accumulate in
/// traversal order: object keys in their natural (sorted) iteration order,
/// array elements by index.
pub fn scan_value(value: &JsonValue, path: &str, inside_path: bool, findings: &mut Vec<GeoFinding>) {
	match value {
		JsonValue::Object(object) => {
			let mut inside = inside_path;
			let mut claimed_location = false;
			let geo_type = object
				.get_str("type")
				.or_else(|| object.get_str("venue_type"))
				.map(str::to_string);
			let significance = object.get("significance").cloned();
			let mut accuracy = object.get("accuracy").cloned();

			if let Some(waypoints) = object.get_array("waypoints") {
				findings.push(GeoFinding {
					source: source_label(path),
					kind: GeoKind::Path,
					geo_type,
					significance,
					accuracy,
					summary: format!("{} waypoints found", waypoints.len()),
					data: value.clone(),
					lat: None,
					lon: None,
				});
				inside = true;
			} else {
				let mut coordinates = object_coordinates(object);
				if coordinates.is_none()
					&& let Some(location) = object.get_object("location")
				{
					coordinates = object_coordinates(location);
					claimed_location = coordinates.is_some();
					if claimed_location && accuracy.is_none() {
						accuracy = location.get("accuracy").cloned();
					}
				}

				if let Some((lat, lon)) = coordinates
					&& !inside_path
				{
					findings.push(GeoFinding {
						source: source_label(path),
						kind: GeoKind::Venue,
						geo_type,
						significance,
						accuracy,
						summary: format!("Coord: {lat}, {lon}"),
						data: value.clone(),
						lat: Some(lat),
						lon: Some(lon),
					});
				}
			}

			for (key, child) in object.iter() {
				// a location whose coordinates were claimed by this venue is
				// not reported again as a venue of its own
				let child_inside = inside || (claimed_location && key == "location");
				scan_value(child, &join_path(path, key), child_inside, findings);
			}
		}
		JsonValue::Array(list) => {
			for (index, item) in list.iter().enumerate() {
				scan_value(item, &format!("{path}[{index}]"), inside_path, findings);
			}
		}
		_ => {}
	}
}

fn object_coordinates(object: &JsonObject) -> Option<(f64, f64)> {
	let lat = object.get_f64("latitude")?;
	let lon = object.get_f64("longitude")?;
	Some((lat, lon))
}

fn join_path(path: &str, key: &str) -> String {
	if path.is_empty() {
		key.to_string()
	} else {
		format!("{path}.{key}")
	}
}

fn source_label(path: &str) -> String {
	if path.is_empty() {
		"root".to_string()
	} else {
		path.to_string()
	}
}
