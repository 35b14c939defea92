use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{MatchArg, OutputFormat, WidgetModeArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `chipsearch` binary.
#[derive(Parser, Debug)]
#[command(
	name = "chipsearch",
	version,
	long_version = long_version(),
	about = "Pick values from a list as chips, searching as you type",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "FILE",
		help = "Read candidates from FILE, one per line, `value<TAB>label` allowed (default: stdin)"
	)]
	pub(crate) input: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CHIPSEARCH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'm',
		long,
		value_enum,
		help = "Choose the widget to run (default: select)"
	)]
	pub(crate) mode: Option<WidgetModeArg>,
	#[arg(
		long = "allow-duplicates",
		help = "Let the phrase builder repeat words (default: disabled)"
	)]
	pub(crate) allow_duplicates: bool,
	#[arg(
		short = 's',
		long = "preselect",
		value_name = "VALUE",
		action = ArgAction::Append,
		help = "Start with VALUE chosen; repeat for more (default: none)"
	)]
	pub(crate) preselect: Vec<String>,
	#[arg(
		short = 'p',
		long,
		value_name = "TEXT",
		help = "Placeholder shown while nothing is chosen (default: widget default)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long = "no-custom-add",
		help = "Only allow values from the list (default: custom values allowed in select mode)"
	)]
	pub(crate) no_custom_add: bool,
	#[arg(
		long = "custom-add-label",
		value_name = "TEXT",
		help = "Prefix of the entry that adds the typed value (default: widget default)"
	)]
	pub(crate) custom_add_label: Option<String>,
	#[arg(
		long = "no-results-label",
		value_name = "TEXT",
		help = "Prefix of the entry shown when nothing matches (default: \"No Matches For: \")"
	)]
	pub(crate) no_results_label: Option<String>,
	#[arg(
		long = "too-many-label",
		value_name = "TEXT",
		help = "Prefix of the entry shown when results were cut (default: \"Too Many Matches For: \")"
	)]
	pub(crate) too_many_label: Option<String>,
	#[arg(
		long = "match",
		value_enum,
		help = "How candidates are matched against the query (default: prefix)"
	)]
	pub(crate) match_mode: Option<MatchArg>,
	#[arg(
		long = "max-results",
		value_name = "N",
		help = "Cap the number of listed candidates, 0 for no cap (default: no cap)"
	)]
	pub(crate) max_results: Option<usize>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Title shown above the widget (default: chipsearch)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(long = "list-themes", help = "List available themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "log-file",
		value_name = "PATH",
		env = "CHIPSEARCH_LOG_FILE",
		help = "Write logs to PATH, filtered by CHIPSEARCH_LOG (default: no logging)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how chosen values are printed"
	)]
	pub(crate) output: OutputFormat,
}
