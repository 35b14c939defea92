//! Multi-value select: a catalog of options, the chosen ones shown as chips.

use tracing::debug;

use super::events::{OptionAdded, OptionDeselected, OptionSelected, SelectEvents};
use super::{Chip, RemovalMark, chips};
use crate::error::WidgetError;
use crate::search::{MatchMode, SearchQuery, SearchResult, SearcherCallbacks, limit_results};
use crate::searcher::Searcher;
use crate::selection::{SelectionSet, ValueKeyed};

const DEFAULT_PLACEHOLDER: &str = "Choose";
const DEFAULT_REMOVE_ICON: &str = "X";
const DEFAULT_CUSTOM_ADD_LABEL: &str = "Add Custom Value: ";
const DEFAULT_NO_RESULTS_LABEL: &str = "No Matches For: ";

/// One entry of the catalog a [`MultipleSelect`] chooses from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
	pub value: String,
	pub display: String,
	pub selected: bool,
}

impl SelectOption {
	pub fn new(value: impl Into<String>, display: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			display: display.into(),
			selected: false,
		}
	}

	/// An option whose value doubles as its display text.
	pub fn plain(value: impl Into<String>) -> Self {
		let value = value.into();
		Self::new(value.clone(), value)
	}

	#[must_use]
	pub fn selected(mut self, selected: bool) -> Self {
		self.selected = selected;
		self
	}
}

/// State behind a [`MultipleSelect`]: the catalog, the chips and the event
/// channels. This is what the searcher calls back into.
#[derive(Debug)]
pub struct SelectModel {
	options: Vec<SelectOption>,
	selection: SelectionSet<ValueKeyed>,
	mark: RemovalMark,
	events: SelectEvents,
	match_mode: MatchMode,
	max_results: Option<usize>,
	placeholder: String,
	remove_icon: String,
}

impl SelectModel {
	fn new(options: Vec<SelectOption>) -> Self {
		Self {
			options,
			selection: SelectionSet::value_keyed(),
			mark: RemovalMark::default(),
			events: SelectEvents::default(),
			match_mode: MatchMode::default(),
			max_results: None,
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
			remove_icon: DEFAULT_REMOVE_ICON.to_string(),
		}
	}

	#[must_use]
	pub fn options(&self) -> &[SelectOption] {
		&self.options
	}

	#[must_use]
	pub fn selection(&self) -> &SelectionSet<ValueKeyed> {
		&self.selection
	}

	fn index_of_value(&self, value: &str) -> Option<usize> {
		self.options.iter().position(|option| option.value == value)
	}

	fn index_of_text(&self, text: &str) -> Option<usize> {
		self.options.iter().position(|option| option.display == text)
	}

	fn add_option(&mut self, value: &str, display: &str) -> bool {
		if self.index_of_value(value).is_some() {
			return false;
		}
		self.options.push(SelectOption::new(value, display));
		self.events.add_option.emit(&OptionAdded {
			value: value.to_string(),
		});
		true
	}

	fn select_index(&mut self, index: usize) {
		let Some(option) = self.options.get_mut(index) else {
			return;
		};
		option.selected = true;
		let (value, display) = (option.value.clone(), option.display.clone());
		if self.selection.add(value.clone(), display).is_added() {
			debug!(value = %value, "option selected");
			self.events.select_option.emit(&OptionSelected { value });
		}
	}

	fn deselect_index(&mut self, index: usize) {
		let Some(option) = self.options.get_mut(index) else {
			return;
		};
		option.selected = false;
		let value = option.value.clone();
		self.selection.remove_value(&value);
		self.mark.clear();
		debug!(value = %value, "option deselected");
		self.events.deselect_option.emit(&OptionDeselected { value });
	}

	fn remove_index(&mut self, index: usize) {
		if index >= self.options.len() {
			return;
		}
		let option = self.options.remove(index);
		self.selection.remove_value(&option.value);
		self.mark.clear();
		debug!(value = %option.value, "option removed");
	}

	fn rebuild_selection(&mut self) {
		self.selection.clear();
		self.mark.clear();
		for option in self.options.iter().filter(|option| option.selected) {
			self.selection
				.add(option.value.clone(), option.display.clone());
		}
	}

	fn remove_marked(&mut self) -> Result<(), WidgetError> {
		let value = match self.mark.marked().and_then(|id| self.selection.get(id)) {
			Some(entry) => entry.value.clone(),
			None => return Err(WidgetError::NothingMarked),
		};
		let index = self
			.index_of_value(&value)
			.ok_or_else(|| WidgetError::not_found(&value))?;
		self.deselect_index(index);
		Ok(())
	}
}

impl SearcherCallbacks for SelectModel {
	fn search(&mut self, query: &SearchQuery) -> SearchResult {
		self.mark.clear();
		let unselected = self
			.options
			.iter()
			.filter(|option| !option.selected)
			.map(|option| option.display.as_str());
		let matches = self.match_mode.matches(unselected, query.text());
		let (candidates, truncated) = limit_results(matches, self.max_results);
		SearchResult {
			candidates,
			truncated,
		}
	}

	fn select_search_result(&mut self, value: &str) {
		let index = self.index_of_text(value).or_else(|| {
			self.add_option(value, value);
			self.index_of_value(value)
		});
		if let Some(index) = index {
			self.select_index(index);
		}
	}

	fn deleted_beyond_search_input(&mut self) {
		if self.mark.is_last_marked(&self.selection) {
			let _ = self.remove_marked();
		}
		self.mark.mark_last(&self.selection);
	}

	fn does_not_contain_value(&self, value: &str) -> bool {
		self.index_of_value(value).is_none()
	}
}

/// A searchable multi-value select.
///
/// The catalog plays the role of the options of a multiple select box;
/// selected options render as chips ahead of the search input.
#[derive(Debug)]
pub struct MultipleSelect {
	searcher: Searcher<SelectModel>,
}

impl MultipleSelect {
	/// Build the widget over `options`; options flagged selected become chips.
	pub fn new<I>(options: I) -> Self
	where
		I: IntoIterator<Item = SelectOption>,
	{
		let model = SelectModel::new(options.into_iter().collect());
		let searcher = Searcher::with_callbacks(model)
			.with_custom_add_enabled(true)
			.with_custom_add_label(DEFAULT_CUSTOM_ADD_LABEL)
			.with_no_search_results_label(DEFAULT_NO_RESULTS_LABEL);
		let mut widget = Self { searcher };
		widget.render();
		widget
	}

	#[must_use]
	pub fn with_custom_add_enabled(mut self, enabled: bool) -> Self {
		self.searcher.set_custom_add_enabled(enabled);
		self
	}

	#[must_use]
	pub fn with_custom_add_label(mut self, label: impl Into<String>) -> Self {
		self.searcher.options_mut().labels.custom_add = label.into();
		self
	}

	#[must_use]
	pub fn with_no_search_results_label(mut self, label: impl Into<String>) -> Self {
		self.searcher.options_mut().labels.no_results = label.into();
		self
	}

	#[must_use]
	pub fn with_too_many_search_results_label(mut self, label: impl Into<String>) -> Self {
		self.searcher.options_mut().labels.too_many_results = label.into();
		self
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.model_mut().placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn with_remove_icon(mut self, icon: impl Into<String>) -> Self {
		self.model_mut().remove_icon = icon.into();
		self
	}

	#[must_use]
	pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
		self.model_mut().match_mode = mode;
		self
	}

	/// Cap the number of candidates per search; the rest are reported as
	/// too many results.
	#[must_use]
	pub fn with_max_results(mut self, max: Option<usize>) -> Self {
		self.model_mut().max_results = max;
		self
	}

	#[must_use]
	pub fn searcher(&self) -> &Searcher<SelectModel> {
		&self.searcher
	}

	pub fn searcher_mut(&mut self) -> &mut Searcher<SelectModel> {
		&mut self.searcher
	}

	#[must_use]
	pub fn model(&self) -> &SelectModel {
		self.searcher.callbacks()
	}

	fn model_mut(&mut self) -> &mut SelectModel {
		self.searcher.callbacks_mut()
	}

	pub fn events_mut(&mut self) -> &mut SelectEvents {
		&mut self.model_mut().events
	}

	/// Close the search and rebuild the chips from the catalog.
	pub fn render(&mut self) {
		self.searcher.close_search_results();
		self.model_mut().rebuild_selection();
	}

	/// Chips in selection order.
	pub fn chips(&self) -> impl Iterator<Item = Chip<'_>> + '_ {
		let model = self.model();
		chips(&model.selection, &model.mark)
	}

	/// Placeholder for the input, only while nothing is selected.
	#[must_use]
	pub fn placeholder(&self) -> Option<&str> {
		let model = self.model();
		model
			.selection
			.is_empty()
			.then_some(model.placeholder.as_str())
	}

	#[must_use]
	pub fn remove_icon(&self) -> &str {
		&self.model().remove_icon
	}

	/// Add an option to the catalog. No-op if the value already exists.
	pub fn add_option(&mut self, value: &str, display: &str) -> &mut Self {
		self.model_mut().add_option(value, display);
		self
	}

	#[must_use]
	pub fn contains_option_with_value(&self, value: &str) -> bool {
		self.model().index_of_value(value).is_some()
	}

	#[must_use]
	pub fn has_option_with_value(&self, value: &str) -> bool {
		self.contains_option_with_value(value)
	}

	#[must_use]
	pub fn find_option_with_value(&self, value: &str) -> Option<&SelectOption> {
		self.model().options.iter().find(|option| option.value == value)
	}

	#[must_use]
	pub fn find_option_with_text(&self, text: &str) -> Option<&SelectOption> {
		self.model().options.iter().find(|option| option.display == text)
	}

	/// Selected values in chip order.
	#[must_use]
	pub fn selected_values(&self) -> Vec<String> {
		self.model().selection.values()
	}

	/// Select the option with `value`. Already selected options stay as they
	/// are.
	pub fn select_option_with_value(&mut self, value: &str) -> Result<&mut Self, WidgetError> {
		let index = self
			.model()
			.index_of_value(value)
			.ok_or_else(|| WidgetError::not_found(value))?;
		self.model_mut().select_index(index);
		self.searcher.close_search_results();
		Ok(self)
	}

	pub fn deselect_option_with_value(&mut self, value: &str) -> Result<&mut Self, WidgetError> {
		let index = self
			.model()
			.index_of_value(value)
			.ok_or_else(|| WidgetError::not_found(value))?;
		self.model_mut().deselect_index(index);
		Ok(self)
	}

	/// Remove the option from the catalog, and its chip if selected.
	pub fn remove_option_with_value(&mut self, value: &str) -> Result<&mut Self, WidgetError> {
		let index = self
			.model()
			.index_of_value(value)
			.ok_or_else(|| WidgetError::not_found(value))?;
		self.model_mut().remove_index(index);
		Ok(self)
	}

	pub fn remove_all_options(&mut self) -> &mut Self {
		let model = self.model_mut();
		while !model.options.is_empty() {
			model.remove_index(model.options.len() - 1);
		}
		self
	}

	/// Select exactly the options whose values are listed, then re-render.
	pub fn set_selected_values<I, S>(&mut self, values: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let wanted: Vec<String> = values.into_iter().map(|v| v.as_ref().to_string()).collect();
		for option in &mut self.model_mut().options {
			option.selected = wanted.contains(&option.value);
		}
		self.render();
		self
	}

	pub fn highlight_option_for_unselect(&mut self) -> &mut Self {
		let model = self.model_mut();
		model.mark.mark_last(&model.selection);
		self
	}

	#[must_use]
	pub fn is_last_option_highlighted_for_unselect(&self) -> bool {
		let model = self.model();
		model.mark.is_last_marked(&model.selection)
	}

	pub fn unhighlight_option_for_unselect(&mut self) -> &mut Self {
		self.model_mut().mark.clear();
		self
	}

	/// Deselect the chip currently marked for removal.
	pub fn remove_highlighted_option(&mut self) -> Result<(), WidgetError> {
		self.model_mut().remove_marked()
	}

	/// A click landed somewhere; `inside` tells whether it hit this widget.
	pub fn handle_global_click(&mut self, inside: bool) {
		if !inside {
			self.searcher.close_search_results();
		}
	}

	/// Escape released anywhere in the widget drops the removal mark.
	pub fn handle_display_escape(&mut self) {
		self.unhighlight_option_for_unselect();
	}

	/// Tear down subscriptions and close the search.
	pub fn destroy(&mut self) {
		self.events_mut().clear();
		self.searcher.close_search_results();
	}
}
