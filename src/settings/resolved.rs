use std::path::PathBuf;

use chipsearch::{MatchMode, Theme};

/// Which widget the binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
	Select,
	Phrase,
}

impl WidgetKind {
	fn as_str(self) -> &'static str {
		match self {
			WidgetKind::Select => "select",
			WidgetKind::Phrase => "phrase",
		}
	}
}

/// Result-list labels that replace the widget defaults when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelOverrides {
	pub custom_add: Option<String>,
	pub no_results: Option<String>,
	pub too_many_results: Option<String>,
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub input: Option<PathBuf>,
	pub log_file: Option<PathBuf>,
	pub widget: WidgetKind,
	pub allow_duplicates: bool,
	pub preselect: Vec<String>,
	pub placeholder: Option<String>,
	pub remove_icon: Option<String>,
	pub match_mode: MatchMode,
	pub max_results: Option<usize>,
	pub custom_add: bool,
	pub labels: LabelOverrides,
	pub title: String,
	pub theme_name: Option<String>,
	pub theme: Theme,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		match &self.input {
			Some(path) => println!("  Input: {}", path.display()),
			None => println!("  Input: (stdin)"),
		}
		println!("  Widget: {}", self.widget.as_str());
		if self.widget == WidgetKind::Phrase {
			println!(
				"  Allow duplicates: {}",
				bool_to_word(self.allow_duplicates)
			);
		}
		if !self.preselect.is_empty() {
			println!("  Preselected: {}", self.preselect.join(", "));
		}
		println!("  Match mode: {}", self.match_mode.as_str());
		match self.max_results {
			Some(max) => println!("  Max results: {max}"),
			None => println!("  Max results: unlimited"),
		}
		println!("  Custom values: {}", bool_to_word(self.custom_add));
		if let Some(placeholder) = &self.placeholder {
			println!("  Placeholder: {placeholder}");
		}
		if let Some(icon) = &self.remove_icon {
			println!("  Remove icon: {icon}");
		}
		if let Some(label) = &self.labels.custom_add {
			println!("  Custom add label: {label:?}");
		}
		if let Some(label) = &self.labels.no_results {
			println!("  No results label: {label:?}");
		}
		if let Some(label) = &self.labels.too_many_results {
			println!("  Too many results label: {label:?}");
		}
		println!("  Title: {}", self.title);
		println!(
			"  UI theme: {}",
			self.theme_name.as_deref().unwrap_or("(use the library default)")
		);
		if let Some(path) = &self.log_file {
			println!("  Log file: {}", path.display());
		}
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			input: Some(PathBuf::from("colours.txt")),
			log_file: None,
			widget: WidgetKind::Phrase,
			allow_duplicates: true,
			preselect: vec!["red".into()],
			placeholder: Some("Pick".into()),
			remove_icon: None,
			match_mode: MatchMode::Fuzzy,
			max_results: Some(5),
			custom_add: false,
			labels: LabelOverrides::default(),
			title: "Colours".into(),
			theme_name: Some("slate".into()),
			theme: Theme::default(),
		};

		config.print_summary();
	}
}
