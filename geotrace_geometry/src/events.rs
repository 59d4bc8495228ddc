//! Normalizing the different event-container shapes of telematics exports.

use geotrace_core::json::JsonValue;

/// Resolve the list of event objects inside a root document.
///
/// Known container shapes, first match wins:
/// 1. an object with a `userContext` object whose `events` value is an
///    array — a full context export;
/// 2. an object with a `transportEvent` key — a single-event export;
/// 3. an object with a `waypoints` array — the document is the event;
/// 4. a bare array of events;
/// 5. anything else resolves to no events.
///
/// Unrecognized shapes are not an error: downstream conversion simply
/// produces an empty feature collection.
#[must_use]
pub fn resolve_events(document: &JsonValue) -> Vec<&JsonValue> {
	if let JsonValue::Object(root) = document {
		if let Some(user_context) = root.get_object("userContext")
			&& let Some(events) = user_context.get_array("events")
		{
			return events.iter().collect();
		}
		if let Some(event) = root.get("transportEvent") {
			return vec![event];
		}
		if root.get_array("waypoints").is_some() {
			return vec![document];
		}
	} else if let JsonValue::Array(list) = document {
		return list.iter().collect();
	}
	Vec::new()
}
