mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Convert a telematics JSON export into GeoJSON
	Convert(tools::convert::Subcommand),

	/// List the geographic structures found in a JSON document
	Probe(tools::probe::Subcommand),

	/// Extract transport-event observations from a debug CSV export
	Trips(tools::trips::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	// log level is driven by the -v/-q flags
	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Convert(arguments) => tools::convert::run(arguments),
		Commands::Probe(arguments) => tools::probe::run(arguments),
		Commands::Trips(arguments) => tools::trips::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{:?}", cli);
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["geotrace"]).unwrap_err().to_string();
		assert!(err.contains("Usage: geotrace [OPTIONS] <COMMAND>"), "{err}");
	}

	#[test]
	fn version() {
		let err = run_command(vec!["geotrace", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("geotrace "), "{err}");
	}

	#[test]
	fn convert_subcommand() {
		let err = run_command(vec!["geotrace", "convert"]).unwrap_err().to_string();
		assert!(err.contains("Usage: geotrace convert"), "{err}");
	}

	#[test]
	fn probe_subcommand() {
		let err = run_command(vec!["geotrace", "probe"]).unwrap_err().to_string();
		assert!(err.contains("Usage: geotrace probe"), "{err}");
	}

	#[test]
	fn trips_subcommand() {
		let err = run_command(vec!["geotrace", "trips"]).unwrap_err().to_string();
		assert!(err.contains("Usage: geotrace trips"), "{err}");
	}
}
