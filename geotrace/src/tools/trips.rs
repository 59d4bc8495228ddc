use anyhow::{Context, Result};
use geotrace_geometry::{extract_row_trips, sort_trips, unique_trip_count};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// debug CSV export with id, tipo, sentianceid and JSON columns
	#[arg()]
	input_file: PathBuf,

	/// file to write the extracted trip instances to
	#[arg()]
	output_file: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let mut reader = csv::Reader::from_path(&arguments.input_file)
		.with_context(|| format!("failed to read {:?}", arguments.input_file))?;

	let headers = reader.headers().context("failed to read CSV headers")?.clone();
	let id_column = column_index(&headers, "id")?;
	let tipo_column = column_index(&headers, "tipo")?;
	let user_column = column_index(&headers, "sentianceid")?;
	let json_column = column_index(&headers, "JSON")?;

	let mut trips = Vec::new();
	for (row_number, record) in reader.records().enumerate() {
		let record = record.with_context(|| format!("failed to read CSV row {}", row_number + 2))?;
		let field = |index: usize| record.get(index).unwrap_or("");
		trips.extend(extract_row_trips(
			field(id_column),
			field(tipo_column),
			field(user_column),
			field(json_column),
		));
	}
	sort_trips(&mut trips);

	let mut writer = csv::Writer::from_path(&arguments.output_file)
		.with_context(|| format!("failed to write {:?}", arguments.output_file))?;
	for trip in &trips {
		writer.serialize(trip)?;
	}
	writer.flush()?;

	eprintln!(
		"extracted {} trip instances ({} unique trips)",
		trips.len(),
		unique_trip_count(&trips)
	);
	Ok(())
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
	headers
		.iter()
		.position(|header| header == name)
		.with_context(|| format!("missing column '{name}' in CSV header"))
}
