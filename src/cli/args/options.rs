use chipsearch::MatchMode;
use clap::ValueEnum;

/// Widgets the binary can run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum WidgetModeArg {
	/// Pick options from the list.
	Select,
	/// Build a phrase word by word.
	Phrase,
}

impl WidgetModeArg {
	/// The string consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			WidgetModeArg::Select => "select",
			WidgetModeArg::Phrase => "phrase",
		}
	}
}

/// Candidate matching strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum MatchArg {
	Prefix,
	Fuzzy,
}

impl MatchArg {
	/// The library mode this flag selects.
	pub(crate) fn mode(self) -> MatchMode {
		match self {
			MatchArg::Prefix => MatchMode::Prefix,
			MatchArg::Fuzzy => MatchMode::Fuzzy,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
