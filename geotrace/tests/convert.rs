mod test_utilities;

use assert_cmd::{Command, cargo};
use geotrace_core::json::JsonValue;
use predicates::str;
use pretty_assertions::assert_eq;
use std::{fs, path::Path};
use tempfile::tempdir;
use test_utilities::testdata;

fn convert(input: &Path, output: &Path) {
	Command::new(cargo::cargo_bin!())
		.arg("convert")
		.arg(input)
		.arg(output)
		.assert()
		.success()
		.stderr(str::contains("finished converting"));
}

#[test]
fn converts_single_transport_event() {
	let dir = tempdir().unwrap();
	let output = dir.path().join("out.geojson");

	convert(&testdata("transport_event.json"), &output);

	let written = fs::read_to_string(&output).unwrap();
	let parsed = JsonValue::parse_str(&written).unwrap();
	assert_eq!(
		parsed.stringify(),
		r#"{"features":[{"geometry":{"coordinates":[[2,1],[4,3]],"type":"LineString"},"properties":{"distance":null,"endTime":null,"event_index":0,"startTime":null,"transportMode":null,"transportTags":null,"type":"IN_TRANSPORT"},"type":"Feature"}],"type":"FeatureCollection"}"#
	);
}

#[test]
fn converts_user_context_export() {
	let dir = tempdir().unwrap();
	let output = dir.path().join("out.geojson");

	convert(&testdata("user_context.json"), &output);

	let written = fs::read_to_string(&output).unwrap();
	let root = JsonValue::parse_str(&written).unwrap().into_object().unwrap();
	assert_eq!(root.get_str("type"), Some("FeatureCollection"));

	// the venue-only event contributes no feature but keeps the indices stable
	let features = root.get_array("features").unwrap();
	assert_eq!(features.len(), 2);

	let first = features.iter().next().unwrap().as_object().unwrap();
	let geometry = first.get_object("geometry").unwrap();
	assert_eq!(geometry.get_str("type"), Some("LineString"));
	// the third waypoint lacks a longitude and is dropped
	assert_eq!(geometry.get_array("coordinates").unwrap().len(), 2);

	let properties = first.get_object("properties").unwrap();
	assert_eq!(properties.get_f64("event_index"), Some(0.0));
	assert_eq!(properties.get_str("transportMode"), Some("CAR"));

	let second = features.iter().nth(1).unwrap().as_object().unwrap();
	let properties = second.get_object("properties").unwrap();
	assert_eq!(properties.get_f64("event_index"), Some(2.0));
	assert_eq!(properties.get_str("transportMode"), Some("BICYCLE"));
}

#[test]
fn unrecognized_shape_yields_empty_collection() {
	let dir = tempdir().unwrap();
	let input = dir.path().join("odd.json");
	let output = dir.path().join("out.geojson");
	fs::write(&input, r#"{"some":"thing","entirely":["different"]}"#).unwrap();

	convert(&input, &output);

	let written = fs::read_to_string(&output).unwrap();
	let parsed = JsonValue::parse_str(&written).unwrap();
	assert_eq!(parsed.stringify(), r#"{"features":[],"type":"FeatureCollection"}"#);
}

#[test]
fn conversion_is_byte_identical_across_runs() {
	let dir = tempdir().unwrap();
	let first = dir.path().join("first.geojson");
	let second = dir.path().join("second.geojson");

	convert(&testdata("user_context.json"), &first);
	convert(&testdata("user_context.json"), &second);

	assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn compact_output_is_a_single_line() {
	let dir = tempdir().unwrap();
	let output = dir.path().join("out.geojson");

	Command::new(cargo::cargo_bin!())
		.arg("convert")
		.arg(testdata("transport_event.json"))
		.arg(&output)
		.arg("--compact")
		.assert()
		.success();

	let written = fs::read_to_string(&output).unwrap();
	assert_eq!(written.trim_end().lines().count(), 1);
}

#[test]
fn malformed_json_fails_with_diagnostic() {
	let dir = tempdir().unwrap();
	let output = dir.path().join("out.geojson");

	Command::new(cargo::cargo_bin!())
		.arg("convert")
		.arg(testdata("invalid.json"))
		.arg(&output)
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("failed to parse JSON in"))
		.stderr(str::contains("invalid.json"));

	assert!(!output.exists());
}

#[test]
fn missing_input_fails() {
	let dir = tempdir().unwrap();
	let output = dir.path().join("out.geojson");

	Command::new(cargo::cargo_bin!())
		.arg("convert")
		.arg(dir.path().join("does_not_exist.json"))
		.arg(&output)
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("failed to read"));
}
