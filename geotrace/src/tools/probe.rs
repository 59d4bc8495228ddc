use anyhow::{Context, Result};
use colored::Colorize;
use geotrace_core::json::{JsonArray, JsonValue, stringify};
use geotrace_geometry::{GeoFinding, GeoKind, scan_record, scan_value};
use std::{fs, path::PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// JSON document or record to scan
	#[arg()]
	input_file: PathBuf,

	/// print findings as a JSON array instead of a table
	#[arg(long)]
	json: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let text = fs::read_to_string(&arguments.input_file)
		.with_context(|| format!("failed to read {:?}", arguments.input_file))?;
	let document = JsonValue::parse_str(&text)
		.with_context(|| format!("failed to parse JSON in {:?}", arguments.input_file))?;

	// a record is scanned per field so that JSON-encoded string fields are
	// parsed first; anything else is scanned directly
	let findings = match &document {
		JsonValue::Object(record) => scan_record(record),
		other => {
			let mut findings = Vec::new();
			scan_value(other, "", false, &mut findings);
			findings
		}
	};
	log::info!("found {} geographic structures", findings.len());

	if arguments.json {
		let array = JsonArray(findings.iter().map(|finding| JsonValue::Object(finding.to_json())).collect());
		println!("{}", JsonValue::Array(array).stringify_pretty());
		return Ok(());
	}

	if findings.is_empty() {
		println!("no geographic structures found");
	} else {
		print_table(&findings);
	}
	Ok(())
}

fn print_table(findings: &[GeoFinding]) {
	println!(
		"{:<6} {:<40} {:<22} {:<13} {:<9} SUMMARY",
		"KIND", "SOURCE", "TYPE", "SIGNIFICANCE", "ACCURACY"
	);
	for finding in findings {
		let kind = match finding.kind {
			GeoKind::Path => finding.kind.as_str().green(),
			GeoKind::Venue => finding.kind.as_str().cyan(),
		};
		println!(
			"{:<6} {:<40} {:<22} {:<13} {:<9} {}",
			kind,
			finding.source,
			finding.geo_type.as_deref().unwrap_or("-"),
			optional(&finding.significance),
			optional(&finding.accuracy),
			finding.summary
		);
	}
}

fn optional(value: &Option<JsonValue>) -> String {
	value.as_ref().map_or_else(|| "-".to_string(), stringify)
}
