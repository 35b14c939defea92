mod cli;
mod settings;
mod workflow;

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use chipsearch::{SelectOption, logging, tui::theme};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if let Some(path) = &resolved.log_file {
		logging::init_file(path)?;
	}

	if cli.print_config {
		resolved.print_summary();
	}

	let options = read_candidates(&resolved)?;
	run_session(cli.output, &resolved, options)
}

/// Read the candidate list from the input file, or stdin when none is given.
fn read_candidates(config: &ResolvedConfig) -> Result<Vec<SelectOption>> {
	match &config.input {
		Some(path) => {
			let file = File::open(path)
				.with_context(|| format!("failed to open candidates file {}", path.display()))?;
			workflow::parse_candidates(BufReader::new(file))
		}
		None => workflow::parse_candidates(io::stdin().lock())
			.context("failed to read candidates from stdin"),
	}
}

/// Run the widget and print the outcome in the chosen format.
fn run_session(
	format: OutputFormat,
	config: &ResolvedConfig,
	options: Vec<SelectOption>,
) -> Result<()> {
	let outcome = workflow::run(config, options)?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
