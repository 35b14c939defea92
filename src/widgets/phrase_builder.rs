//! Builds a phrase word by word from a caller-provided search.

use std::fmt;

use tracing::debug;

use super::{Chip, RemovalMark, chips};
use crate::error::WidgetError;
use crate::search::{SearchQuery, SearchResult, SearcherCallbacks};
use crate::searcher::{CustomAddCallback, Searcher};
use crate::selection::{EntryId, IdentityStrategy, SelectionSet, SyntheticIds, ValueKeyed};

const DEFAULT_PLACEHOLDER: &str = "Type Words for Phrase Here";

/// Search callback of a phrase builder. Receives the query and the words
/// already in the phrase.
pub type PhraseSearch = Box<dyn FnMut(&SearchQuery, &[String]) -> SearchResult>;

/// State behind a [`PhraseBuilder`].
pub struct PhraseModel<S> {
	words: SelectionSet<S>,
	search: PhraseSearch,
	mark: RemovalMark,
	placeholder: String,
}

impl<S: fmt::Debug> fmt::Debug for PhraseModel<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PhraseModel")
			.field("words", &self.words)
			.field("mark", &self.mark)
			.field("placeholder", &self.placeholder)
			.finish_non_exhaustive()
	}
}

impl<S: IdentityStrategy> PhraseModel<S> {
	#[must_use]
	pub fn words(&self) -> &SelectionSet<S> {
		&self.words
	}

	fn add_word(&mut self, word: &str) -> bool {
		let added = self.words.add(word, word).is_added();
		if added {
			debug!(word, "word added");
		}
		added
	}

	fn remove_marked(&mut self) -> Result<(), WidgetError> {
		let id = self.mark.marked().cloned().ok_or(WidgetError::NothingMarked)?;
		self.mark.clear();
		self.words.remove(&id).ok_or(WidgetError::NothingMarked)?;
		Ok(())
	}
}

impl<S: IdentityStrategy> SearcherCallbacks for PhraseModel<S> {
	fn search(&mut self, query: &SearchQuery) -> SearchResult {
		self.mark.clear();
		let words = self.words.values();
		(self.search)(query, &words)
	}

	fn select_search_result(&mut self, value: &str) {
		self.add_word(value);
	}

	fn deleted_beyond_search_input(&mut self) {
		if self.mark.is_last_marked(&self.words) {
			let _ = self.remove_marked();
		}
		self.mark.mark_last(&self.words);
	}
}

/// Collects words into a phrase, each word shown as a chip.
///
/// `PhraseBuilder<ValueKeyed>` keeps each word once;
/// `PhraseBuilder<SyntheticIds>` lets the same word repeat.
#[derive(Debug)]
pub struct PhraseBuilder<S = ValueKeyed> {
	searcher: Searcher<PhraseModel<S>>,
}

impl PhraseBuilder<ValueKeyed> {
	/// A builder whose words are unique.
	pub fn new<I, W, F>(words: I, search: F) -> Self
	where
		I: IntoIterator<Item = W>,
		W: Into<String>,
		F: FnMut(&SearchQuery, &[String]) -> SearchResult + 'static,
	{
		Self::with_strategy(ValueKeyed, words, search)
	}
}

impl PhraseBuilder<SyntheticIds> {
	/// A builder that accepts the same word more than once.
	pub fn supporting_duplicates<I, W, F>(words: I, search: F) -> Self
	where
		I: IntoIterator<Item = W>,
		W: Into<String>,
		F: FnMut(&SearchQuery, &[String]) -> SearchResult + 'static,
	{
		Self::with_strategy(SyntheticIds::default(), words, search)
	}
}

impl<S: IdentityStrategy> PhraseBuilder<S> {
	pub fn with_strategy<I, W, F>(strategy: S, words: I, search: F) -> Self
	where
		I: IntoIterator<Item = W>,
		W: Into<String>,
		F: FnMut(&SearchQuery, &[String]) -> SearchResult + 'static,
	{
		let mut set = SelectionSet::with_strategy(strategy);
		for word in words {
			let word = word.into();
			set.add(word.clone(), word);
		}
		let model = PhraseModel {
			words: set,
			search: Box::new(search),
			mark: RemovalMark::default(),
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
		};
		let searcher = Searcher::with_callbacks(model).with_custom_add_enabled(false);
		Self { searcher }
	}

	/// Allow typed words that the search didn't return. `confirm`, when
	/// given, may still refuse a word.
	#[must_use]
	pub fn with_custom_add<F>(mut self, confirm: Option<F>) -> Self
	where
		F: FnMut(&str) -> bool + 'static,
	{
		self.searcher.set_custom_add_enabled(true);
		self.searcher
			.set_custom_add_callback(confirm.map(|f| Box::new(f) as CustomAddCallback));
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
		self.searcher.callbacks_mut().placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn searcher(&self) -> &Searcher<PhraseModel<S>> {
		&self.searcher
	}

	pub fn searcher_mut(&mut self) -> &mut Searcher<PhraseModel<S>> {
		&mut self.searcher
	}

	fn model(&self) -> &PhraseModel<S> {
		self.searcher.callbacks()
	}

	fn model_mut(&mut self) -> &mut PhraseModel<S> {
		self.searcher.callbacks_mut()
	}

	/// Drop the removal mark and close the search.
	pub fn render(&mut self) {
		self.model_mut().mark.clear();
		self.searcher.close_search_results();
	}

	pub fn chips(&self) -> impl Iterator<Item = Chip<'_>> + '_ {
		let model = self.model();
		chips(&model.words, &model.mark)
	}

	#[must_use]
	pub fn placeholder(&self) -> Option<&str> {
		let model = self.model();
		model
			.words
			.is_empty()
			.then_some(model.placeholder.as_str())
	}

	/// Append `word` and close the search. Repeats are ignored unless the
	/// builder supports duplicates.
	pub fn add_word(&mut self, word: &str) -> &mut Self {
		self.model_mut().add_word(word);
		self.searcher.close_search_results();
		self
	}

	#[must_use]
	pub fn contains_word(&self, word: &str) -> bool {
		self.model().words.contains(word)
	}

	/// The phrase in order.
	#[must_use]
	pub fn words(&self) -> Vec<String> {
		self.model().words.values()
	}

	/// Remove the first occurrence of `word`. Unknown words are ignored.
	pub fn remove_word(&mut self, word: &str) -> &mut Self {
		let model = self.model_mut();
		if model.words.remove_value(word).is_some() {
			model.mark.clear();
			debug!(word, "word removed");
		}
		self
	}

	/// Remove the chip with `id`. Repeated words are told apart by their id.
	pub fn remove_chip(&mut self, id: &EntryId) -> &mut Self {
		let model = self.model_mut();
		if model.words.remove(id).is_some() {
			model.mark.clear();
		}
		self
	}

	pub fn remove_all_words(&mut self) -> &mut Self {
		let model = self.model_mut();
		model.words.clear();
		model.mark.clear();
		self
	}

	pub fn highlight_word_for_removal(&mut self) -> &mut Self {
		let model = self.model_mut();
		model.mark.mark_last(&model.words);
		self
	}

	#[must_use]
	pub fn is_last_word_highlighted_for_removal(&self) -> bool {
		let model = self.model();
		model.mark.is_last_marked(&model.words)
	}

	pub fn unhighlight_word_for_removal(&mut self) -> &mut Self {
		self.model_mut().mark.clear();
		self
	}

	/// Remove the chip currently marked for removal.
	pub fn remove_highlighted_word(&mut self) -> Result<(), WidgetError> {
		self.model_mut().remove_marked()
	}

	pub fn handle_global_click(&mut self, inside: bool) {
		if !inside {
			self.searcher.close_search_results();
		}
	}

	pub fn handle_display_escape(&mut self) {
		self.unhighlight_word_for_removal();
	}

	pub fn destroy(&mut self) {
		self.remove_all_words();
		self.searcher.close_search_results();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::search::prefix_matches;
	use crate::searcher::Key;

	const VOCABULARY: [&str; 5] = ["quick", "brown", "fox", "jumps", "the"];

	fn vocabulary_search(query: &SearchQuery, _words: &[String]) -> SearchResult {
		SearchResult::new(prefix_matches(VOCABULARY, query.text()))
	}

	fn type_and_commit<S: IdentityStrategy>(builder: &mut PhraseBuilder<S>, text: &str) {
		builder.searcher_mut().search(Some(text));
		builder.searcher_mut().handle_key_press(Key::Enter);
	}

	#[test]
	fn committing_exact_matches_builds_the_phrase() {
		let mut builder = PhraseBuilder::new(Vec::<String>::new(), vocabulary_search);
		assert_eq!(builder.placeholder(), Some("Type Words for Phrase Here"));

		type_and_commit(&mut builder, "the");
		type_and_commit(&mut builder, "fox");
		assert_eq!(builder.words(), vec!["the", "fox"]);
		assert_eq!(builder.placeholder(), None);
	}

	#[test]
	fn custom_add_is_off_by_default() {
		let mut builder = PhraseBuilder::new(Vec::<String>::new(), vocabulary_search);
		builder.searcher_mut().search(Some("lazy"));
		assert!(!builder.searcher().is_custom_add_visible());
		builder.searcher_mut().handle_key_press(Key::Enter);
		assert!(builder.words().is_empty());
	}

	#[test]
	fn custom_add_respects_the_confirmation() {
		let mut builder = PhraseBuilder::new(Vec::<String>::new(), vocabulary_search)
			.with_custom_add(Some(|word: &str| word.len() > 3))
			.with_custom_add_label("Use: ");

		builder.searcher_mut().search(Some("dog"));
		assert_eq!(builder.searcher().results().entries()[0].label, "Use: dog");
		builder.searcher_mut().handle_key_press(Key::Enter);
		assert!(builder.words().is_empty());

		builder.searcher_mut().close_search_results();
		type_and_commit(&mut builder, "lazy");
		assert_eq!(builder.words(), vec!["lazy"]);
	}

	#[test]
	fn search_callback_sees_current_words() {
		let mut builder = PhraseBuilder::new(["the"], |query: &SearchQuery, words: &[String]| {
			let remaining: Vec<&str> = VOCABULARY
				.iter()
				.copied()
				.filter(|word| !words.iter().any(|w| w == word))
				.collect();
			SearchResult::new(prefix_matches(remaining, query.text()))
		});
		builder.searcher_mut().handle_focus();
		let labels: Vec<_> = builder
			.searcher()
			.results()
			.entries()
			.iter()
			.map(|entry| entry.label.as_str())
			.collect();
		assert_eq!(labels, vec!["brown", "fox", "jumps", "quick"]);
	}

	#[test]
	fn value_keyed_builder_ignores_repeats() {
		let mut builder = PhraseBuilder::new(["the"], vocabulary_search);
		builder.add_word("the");
		assert_eq!(builder.words(), vec!["the"]);
	}

	#[test]
	fn duplicate_builder_keeps_repeats_as_separate_chips() {
		let mut builder = PhraseBuilder::supporting_duplicates(["the"], vocabulary_search);
		type_and_commit(&mut builder, "the");
		assert_eq!(builder.words(), vec!["the", "the"]);

		let ids: Vec<_> = builder.chips().map(|chip| chip.id.clone()).collect();
		assert_ne!(ids[0], ids[1]);

		builder.remove_chip(&ids[1]);
		assert_eq!(builder.words(), vec!["the"]);
		assert_eq!(builder.chips().next().map(|chip| chip.id.clone()), Some(ids[0].clone()));
	}

	#[test]
	fn double_backspace_removes_the_marked_duplicate() {
		let mut builder = PhraseBuilder::supporting_duplicates(["the", "fox", "the"], vocabulary_search);
		builder.searcher_mut().handle_focus();

		builder.searcher_mut().handle_key_press(Key::Backspace);
		assert!(builder.is_last_word_highlighted_for_removal());
		builder.searcher_mut().handle_key_press(Key::Backspace);

		assert_eq!(builder.words(), vec!["the", "fox"]);
		assert!(builder.is_last_word_highlighted_for_removal());
	}

	#[test]
	fn remove_word_is_silent_for_unknown_words() {
		let mut builder = PhraseBuilder::new(["the", "fox"], vocabulary_search);
		builder.remove_word("dog");
		builder.remove_word("the");
		assert_eq!(builder.words(), vec!["fox"]);

		assert_eq!(builder.remove_highlighted_word(), Err(WidgetError::NothingMarked));
		builder.highlight_word_for_removal();
		builder.remove_highlighted_word().expect("marked");
		assert!(builder.words().is_empty());
	}

	#[test]
	fn escape_and_render_clear_the_mark() {
		let mut builder = PhraseBuilder::new(["the"], vocabulary_search);
		builder.highlight_word_for_removal();
		builder.handle_display_escape();
		assert!(!builder.is_last_word_highlighted_for_removal());

		builder.highlight_word_for_removal();
		builder.render();
		assert!(!builder.is_last_word_highlighted_for_removal());
	}
}
