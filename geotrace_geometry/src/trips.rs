//! Extracting `IN_TRANSPORT` trip observations from telematics debug exports.
//!
//! The debug table stores one JSON payload per row, with the payload shape
//! depending on the row's `tipo`. The same trip shows up repeatedly as the
//! backend updates it, so instances are sorted by trip id and record id to
//! group observations of one trip chronologically.

use geotrace_core::json::{JsonArray, JsonObject, JsonValue};
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Ordering;

pub const IN_TRANSPORT: &str = "IN_TRANSPORT";

/// One observation of a transport event in the debug export.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TripInstance {
	pub db_record_id: String,
	pub source_tipo: String,
	pub source_criteria: String,
	pub user_id: String,
	pub trip_id: Option<String>,
	#[serde(rename = "transportMode")]
	pub transport_mode: Option<String>,
	#[serde(rename = "isProvisional")]
	pub is_provisional: Option<bool>,
	#[serde(rename = "startTime")]
	pub start_time: Option<String>,
	#[serde(rename = "endTime")]
	pub end_time: Option<String>,
	pub distance: Option<f64>,
	#[serde(rename = "durationInSeconds")]
	pub duration_in_seconds: Option<f64>,
	pub waypoints_count: usize,
}

/// Extract all `IN_TRANSPORT` observations from one export row.
///
/// Where the transport events live depends on the row type:
/// `DrivingInsights` carries a single `transportEvent`, the user-context
/// types carry an `events` array (possibly nested under `userContext`), and
/// the timeline types are the event themselves. Rows with an empty or
/// unparseable payload contribute nothing — the parse error is discarded on
/// purpose (logged at debug level) so one bad row cannot stop an export.
#[must_use]
pub fn extract_row_trips(record_id: &str, tipo: &str, user_id: &str, payload: &str) -> Vec<TripInstance> {
	let trimmed = payload.trim();
	if trimmed.is_empty() {
		return Vec::new();
	}
	let parsed = match JsonValue::parse_str(trimmed) {
		Ok(value) => value,
		Err(error) => {
			log::debug!("record {record_id}: skipping unparseable payload: {error:#}");
			return Vec::new();
		}
	};
	let JsonValue::Object(root) = &parsed else {
		return Vec::new();
	};
	let criteria = criteria_string(root);

	let mut trips = Vec::new();
	match tipo {
		"DrivingInsights" => {
			if let Some(event) = root.get_object("transportEvent")
				&& is_in_transport(event)
			{
				trips.push(trip_instance(record_id, tipo, &criteria, user_id, event));
			}
		}
		"UserContextUpdate" | "requestUserContext" => {
			let events = match root.get("events") {
				Some(JsonValue::Array(array)) => Some(array),
				Some(_) => None,
				None => root.get_object("userContext").and_then(|uc| uc.get_array("events")),
			};
			if let Some(events) = events {
				for event in events {
					if let JsonValue::Object(event) = event
						&& is_in_transport(event)
					{
						trips.push(trip_instance(record_id, tipo, &criteria, user_id, event));
					}
				}
			}
		}
		"TimelineUpdateListener" | "TimelineEventById" => {
			if is_in_transport(root) {
				trips.push(trip_instance(record_id, tipo, &criteria, user_id, root));
			}
		}
		_ => {}
	}
	trips
}

/// Sort instances by `(trip_id, db_record_id)`, record ids numerically when
/// both parse as integers.
pub fn sort_trips(trips: &mut [TripInstance]) {
	trips.sort_by(|a, b| {
		a.trip_id
			.cmp(&b.trip_id)
			.then_with(|| compare_record_ids(&a.db_record_id, &b.db_record_id))
	});
}

fn compare_record_ids(a: &str, b: &str) -> Ordering {
	match (a.parse::<u64>(), b.parse::<u64>()) {
		(Ok(a), Ok(b)) => a.cmp(&b),
		_ => a.cmp(b),
	}
}

#[must_use]
pub fn unique_trip_count(trips: &[TripInstance]) -> usize {
	trips.iter().map(|trip| trip.trip_id.as_deref()).unique().count()
}

fn is_in_transport(event: &JsonObject) -> bool {
	event.get_str("type") == Some(IN_TRANSPORT)
}

fn trip_instance(record_id: &str, tipo: &str, criteria: &str, user_id: &str, event: &JsonObject) -> TripInstance {
	TripInstance {
		db_record_id: record_id.to_string(),
		source_tipo: tipo.to_string(),
		source_criteria: criteria.to_string(),
		user_id: user_id.to_string(),
		trip_id: event.get_str("id").map(str::to_string),
		transport_mode: event.get_str("transportMode").map(str::to_string),
		is_provisional: match event.get("isProvisional") {
			Some(JsonValue::Boolean(value)) => Some(*value),
			_ => None,
		},
		start_time: event.get_str("startTime").map(str::to_string),
		end_time: event.get_str("endTime").map(str::to_string),
		distance: event.get_f64("distance"),
		duration_in_seconds: event.get_f64("durationInSeconds"),
		waypoints_count: event.get_array("waypoints").map_or(0, JsonArray::len),
	}
}

/// The payload's `criteria` string-array joined with commas; non-string
/// elements are skipped.
fn criteria_string(root: &JsonObject) -> String {
	match root.get_array("criteria") {
		Some(array) => array.iter().filter_map(|value| value.as_str().ok()).join(","),
		None => String::new(),
	}
}
