use anyhow::{Context, Result};
use geotrace_core::json::JsonValue;
use geotrace_geometry::document_to_collection;
use std::{fs, path::PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// JSON document containing telematics events
	#[arg()]
	input_file: PathBuf,

	/// file to write the GeoJSON FeatureCollection to
	#[arg()]
	output_file: PathBuf,

	/// write compact GeoJSON instead of pretty-printed
	#[arg(long)]
	compact: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("convert from {:?} to {:?}", arguments.input_file, arguments.output_file);

	let text = fs::read_to_string(&arguments.input_file)
		.with_context(|| format!("failed to read {:?}", arguments.input_file))?;
	let document = JsonValue::parse_str(&text)
		.with_context(|| format!("failed to parse JSON in {:?}", arguments.input_file))?;

	let collection = document_to_collection(&document);
	log::info!("built {} features", collection.features.len());

	let geojson = if arguments.compact {
		collection.stringify()
	} else {
		collection.stringify_pretty()
	};
	fs::write(&arguments.output_file, geojson + "\n")
		.with_context(|| format!("failed to write {:?}", arguments.output_file))?;

	eprintln!("finished converting");
	Ok(())
}
