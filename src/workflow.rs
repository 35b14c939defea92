use std::collections::HashSet;
use std::io::BufRead;

use anyhow::{Context, Result};
use chipsearch::search::limit_results;
use chipsearch::selection::IdentityStrategy;
use chipsearch::{
	App, MatchMode, MultipleSelect, Outcome, PhraseBuilder, SearchQuery, SearchResult,
	SelectOption, WidgetSurface,
};
use tracing::{debug, info};

use crate::settings::{ResolvedConfig, WidgetKind};

/// Read candidates, one per line, as `value` or `value<TAB>label`.
///
/// Blank lines are skipped and a repeated value keeps its first label.
pub(crate) fn parse_candidates<R: BufRead>(reader: R) -> Result<Vec<SelectOption>> {
	let mut seen = HashSet::new();
	let mut options = Vec::new();
	for (index, line) in reader.lines().enumerate() {
		let line = line.with_context(|| format!("failed to read candidate line {}", index + 1))?;
		let (value, label) = match line.split_once('\t') {
			Some((value, label)) => (value.trim(), label.trim()),
			None => (line.trim(), line.trim()),
		};
		if value.is_empty() {
			continue;
		}
		let label = if label.is_empty() { value } else { label };
		if seen.insert(value.to_string()) {
			options.push(SelectOption::new(value, label));
		}
	}
	Ok(options)
}

/// Build the configured widget over `options` and run it in the terminal.
pub(crate) fn run(config: &ResolvedConfig, options: Vec<SelectOption>) -> Result<Outcome> {
	info!(
		widget = ?config.widget,
		candidates = options.len(),
		"starting session"
	);
	match config.widget {
		WidgetKind::Select => host(config, build_select(config, options)),
		WidgetKind::Phrase => {
			let words: Vec<String> = options.into_iter().map(|option| option.value).collect();
			let search = phrase_search(
				words,
				config.match_mode,
				config.max_results,
				config.allow_duplicates,
			);
			if config.allow_duplicates {
				let builder =
					PhraseBuilder::supporting_duplicates(config.preselect.iter().cloned(), search);
				host(config, configure_phrase(config, builder))
			} else {
				let builder = PhraseBuilder::new(config.preselect.iter().cloned(), search);
				host(config, configure_phrase(config, builder))
			}
		}
	}
}

fn host<W: WidgetSurface>(config: &ResolvedConfig, widget: W) -> Result<Outcome> {
	let app = App::new(widget)
		.with_title(config.title.clone())
		.with_theme(config.theme);
	chipsearch::run(app)
}

/// A multiple select over `options` with the preselected values as chips.
///
/// Preselected values missing from the catalog are added as plain options.
pub(crate) fn build_select(config: &ResolvedConfig, options: Vec<SelectOption>) -> MultipleSelect {
	let mut widget = MultipleSelect::new(options)
		.with_custom_add_enabled(config.custom_add)
		.with_match_mode(config.match_mode)
		.with_max_results(config.max_results);

	if let Some(label) = &config.labels.custom_add {
		widget = widget.with_custom_add_label(label.clone());
	}
	if let Some(label) = &config.labels.no_results {
		widget = widget.with_no_search_results_label(label.clone());
	}
	if let Some(label) = &config.labels.too_many_results {
		widget = widget.with_too_many_search_results_label(label.clone());
	}
	if let Some(placeholder) = &config.placeholder {
		widget = widget.with_placeholder(placeholder.clone());
	}
	if let Some(icon) = &config.remove_icon {
		widget = widget.with_remove_icon(icon.clone());
	}

	if !config.preselect.is_empty() {
		for value in &config.preselect {
			if !widget.contains_option_with_value(value) {
				debug!(%value, "adding preselected value to the catalog");
				widget.add_option(value, value);
			}
		}
		widget.set_selected_values(&config.preselect);
	}
	widget
}

/// Search over a fixed word list. Words already in the phrase are skipped
/// unless duplicates are allowed.
pub(crate) fn phrase_search(
	words: Vec<String>,
	mode: MatchMode,
	max: Option<usize>,
	allow_duplicates: bool,
) -> impl FnMut(&SearchQuery, &[String]) -> SearchResult + 'static {
	move |query: &SearchQuery, current: &[String]| {
		let available = words
			.iter()
			.filter(|word| allow_duplicates || !current.contains(*word))
			.map(String::as_str);
		let (candidates, truncated) = limit_results(mode.matches(available, query.text()), max);
		SearchResult::new(candidates).with_truncated(truncated)
	}
}

fn configure_phrase<S: IdentityStrategy>(
	config: &ResolvedConfig,
	mut builder: PhraseBuilder<S>,
) -> PhraseBuilder<S> {
	if config.custom_add {
		builder = builder.with_custom_add(None::<fn(&str) -> bool>);
	}
	if let Some(label) = &config.labels.custom_add {
		builder = builder.with_custom_add_label(label.clone());
	}
	if let Some(label) = &config.labels.no_results {
		builder = builder.with_no_search_results_label(label.clone());
	}
	if let Some(label) = &config.labels.too_many_results {
		builder = builder.with_too_many_search_results_label(label.clone());
	}
	if let Some(placeholder) = &config.placeholder {
		builder = builder.with_placeholder(placeholder.clone());
	}
	builder
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use chipsearch::Theme;

	use super::*;

	fn config(widget: WidgetKind) -> ResolvedConfig {
		ResolvedConfig {
			input: None,
			log_file: None,
			widget,
			allow_duplicates: false,
			preselect: Vec::new(),
			placeholder: None,
			remove_icon: None,
			match_mode: MatchMode::Prefix,
			max_results: None,
			custom_add: true,
			labels: Default::default(),
			title: "test".into(),
			theme_name: None,
			theme: Theme::default(),
		}
	}

	#[test]
	fn candidates_split_on_tabs_and_skip_blanks_and_repeats() {
		let input = Cursor::new("r\tRed\n\n  green  \nr\tRouge\nb\t\n");
		let options = parse_candidates(input).expect("parse");

		assert_eq!(
			options,
			vec![
				SelectOption::new("r", "Red"),
				SelectOption::new("green", "green"),
				SelectOption::new("b", "b"),
			]
		);
	}

	#[test]
	fn preselected_values_become_chips_and_missing_ones_are_added() {
		let mut config = config(WidgetKind::Select);
		config.preselect = vec!["g".into(), "teal".into()];
		config.placeholder = Some("Colours".into());

		let widget = build_select(
			&config,
			vec![SelectOption::new("r", "Red"), SelectOption::new("g", "Green")],
		);

		assert_eq!(widget.selected_values(), vec!["g", "teal"]);
		assert!(widget.has_option_with_value("teal"));
	}

	#[test]
	fn phrase_search_hides_words_already_used() {
		let words = vec!["the".to_string(), "then".to_string(), "fox".to_string()];
		let mut search = phrase_search(words.clone(), MatchMode::Prefix, None, false);
		let result = search(&SearchQuery::new("th"), &["the".to_string()]);
		assert_eq!(result.candidates, vec!["then"]);

		let mut repeating = phrase_search(words, MatchMode::Prefix, Some(1), true);
		let result = repeating(&SearchQuery::new("th"), &["the".to_string()]);
		assert_eq!(result.candidates, vec!["the"]);
		assert!(result.truncated);
	}

	#[test]
	fn phrase_builder_starts_with_preselected_words() {
		let mut config = config(WidgetKind::Phrase);
		config.preselect = vec!["quick".into(), "fox".into()];
		let search = phrase_search(Vec::new(), MatchMode::Prefix, None, false);
		let builder = configure_phrase(
			&config,
			PhraseBuilder::new(config.preselect.iter().cloned(), search),
		);

		assert_eq!(builder.words(), vec!["quick", "fox"]);
	}
}
