use anyhow::{Result, bail};
use chipsearch::{MatchMode, tui::theme};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{LabelOverrides, ResolvedConfig, WidgetKind};

const DEFAULT_TITLE: &str = "chipsearch";

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	widget: WidgetSection,
	search: SearchSection,
	labels: LabelSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct WidgetSection {
	mode: Option<String>,
	allow_duplicates: Option<bool>,
	preselect: Option<Vec<String>>,
	placeholder: Option<String>,
	remove_icon: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	#[serde(rename = "match")]
	match_mode: Option<MatchMode>,
	max_results: Option<usize>,
	custom_add: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LabelSection {
	custom_add: Option<String>,
	no_results: Option<String>,
	too_many_results: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	title: Option<String>,
	theme: Option<String>,
}

impl RawConfig {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(mode) = cli.mode {
			self.widget.mode = Some(mode.as_str().to_string());
		}
		if cli.allow_duplicates {
			self.widget.allow_duplicates = Some(true);
		}
		if !cli.preselect.is_empty() {
			self.widget.preselect = Some(cli.preselect.clone());
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.widget.placeholder = Some(placeholder);
		}

		if let Some(mode) = cli.match_mode {
			self.search.match_mode = Some(mode.mode());
		}
		if let Some(max) = cli.max_results {
			self.search.max_results = Some(max);
		}
		if cli.no_custom_add {
			self.search.custom_add = Some(false);
		}

		if let Some(label) = cli.custom_add_label.clone() {
			self.labels.custom_add = Some(label);
		}
		if let Some(label) = cli.no_results_label.clone() {
			self.labels.no_results = Some(label);
		}
		if let Some(label) = cli.too_many_label.clone() {
			self.labels.too_many_results = Some(label);
		}

		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
	}

	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let widget = match self.widget.mode.as_deref() {
			Some(mode) => parse_widget(mode)?,
			None => WidgetKind::Select,
		};
		let match_mode = self.search.match_mode.unwrap_or_default();

		let theme = match self.ui.theme.as_deref() {
			Some(name) => match theme::by_name(name) {
				Some(theme) => theme,
				None => bail!(
					"unknown theme '{name}' (available: {})",
					theme::names().join(", ")
				),
			},
			None => theme::default_theme(),
		};

		let preselect = self
			.widget
			.preselect
			.unwrap_or_default()
			.into_iter()
			.map(|value| value.trim().to_string())
			.filter(|value| !value.is_empty())
			.collect();

		Ok(ResolvedConfig {
			input: cli.input.clone(),
			log_file: cli.log_file.clone(),
			widget,
			allow_duplicates: self.widget.allow_duplicates.unwrap_or(false),
			preselect,
			placeholder: non_empty(self.widget.placeholder),
			remove_icon: non_empty(self.widget.remove_icon),
			match_mode,
			max_results: self.search.max_results.filter(|max| *max > 0),
			custom_add: self
				.search
				.custom_add
				.unwrap_or(widget == WidgetKind::Select),
			labels: LabelOverrides {
				custom_add: self.labels.custom_add,
				no_results: self.labels.no_results,
				too_many_results: self.labels.too_many_results,
			},
			title: non_empty(self.ui.title).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
			theme_name: self.ui.theme,
			theme,
		})
	}
}

fn parse_widget(value: &str) -> Result<WidgetKind> {
	match value.trim().to_ascii_lowercase().as_str() {
		"select" | "multiple-select" => Ok(WidgetKind::Select),
		"phrase" | "phrase-builder" => Ok(WidgetKind::Phrase),
		other => bail!("unknown widget mode '{other}'"),
	}
}

fn non_empty(value: Option<String>) -> Option<String> {
	value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	fn cli(args: &[&str]) -> CliArgs {
		let mut full = vec!["chipsearch"];
		full.extend_from_slice(args);
		CliArgs::parse_from(full)
	}

	#[test]
	fn defaults_resolve_to_a_multiple_select() {
		let resolved = RawConfig::default().resolve(&cli(&[])).expect("resolves");
		assert_eq!(resolved.widget, WidgetKind::Select);
		assert_eq!(resolved.match_mode, MatchMode::Prefix);
		assert!(resolved.custom_add);
		assert!(resolved.max_results.is_none());
		assert_eq!(resolved.title, "chipsearch");
		assert_eq!(resolved.theme, theme::default_theme());
	}

	#[test]
	fn phrase_mode_disables_custom_add_unless_configured() {
		let mut raw = RawConfig::default();
		raw.apply_cli_overrides(&cli(&["--mode", "phrase"]));
		assert!(!raw.clone().resolve(&cli(&[])).expect("resolves").custom_add);

		raw.search.custom_add = Some(true);
		assert!(raw.resolve(&cli(&[])).expect("resolves").custom_add);
	}

	#[test]
	fn no_custom_add_flag_wins() {
		let mut raw = RawConfig::default();
		raw.search.custom_add = Some(true);
		raw.apply_cli_overrides(&cli(&["--no-custom-add"]));
		assert!(!raw.resolve(&cli(&[])).expect("resolves").custom_add);
	}

	#[test]
	fn unknown_values_are_rejected() {
		let mut raw = RawConfig::default();
		raw.ui.theme = Some("neon".into());
		let err = raw.resolve(&cli(&[])).expect_err("unknown theme");
		assert!(err.to_string().contains("unknown theme 'neon'"));

		let mut raw = RawConfig::default();
		raw.widget.mode = Some("grid".into());
		assert!(raw.resolve(&cli(&[])).is_err());
	}

	#[test]
	fn match_flag_overrides_the_configured_mode() {
		let mut raw = RawConfig::default();
		raw.search.match_mode = Some(MatchMode::Fuzzy);
		raw.apply_cli_overrides(&cli(&["--match", "prefix"]));
		let resolved = raw.resolve(&cli(&[])).expect("resolves");
		assert_eq!(resolved.match_mode, MatchMode::Prefix);
	}

	#[test]
	fn blank_preselect_values_are_dropped() {
		let mut raw = RawConfig::default();
		raw.apply_cli_overrides(&cli(&["-s", " red ", "-s", "  "]));
		let resolved = raw.resolve(&cli(&[])).expect("resolves");
		assert_eq!(resolved.preselect, vec!["red"]);
	}
}
