//! Interactive search state machine shared by the selection widgets.
//!
//! A [`Searcher`] binds a [`SearchInput`] and a [`ResultList`] together and
//! turns focus, keyboard and mouse events into searches, highlight moves
//! and commits. It reports back to its owner through [`SearcherCallbacks`].
//!
//! The searcher is closed while its result list is hidden and open while it
//! is shown. Every handler completes its state change before returning, so
//! hosts may feed events one at a time from a single loop.

mod input;
mod keys;
pub mod results;

use std::fmt;
use std::time::Duration;

use tracing::debug;

pub use input::SearchInput;
pub use keys::{Key, KeyResponse};
pub use results::{EntryKind, RenderOptions, ResultEntry, ResultLabels, ResultList};

use crate::search::{SearchQuery, SearcherCallbacks};

/// Delay between losing focus and closing the results, leaving room for a
/// click on a result to land first.
pub const BLUR_GRACE: Duration = Duration::from_millis(300);

/// Decides whether a custom value may be added. Receives the trimmed text.
pub type CustomAddCallback = Box<dyn FnMut(&str) -> bool>;

/// Outcome of [`Searcher::select_highlighted_search_result`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
	/// The value was handed to the owner and the searcher closed.
	Committed(String),
	/// The custom-add confirmation refused the value; nothing changed.
	Declined,
	/// No entry was highlighted; nothing changed.
	NothingHighlighted,
}

/// A deferred focus re-check the host must run after `delay` by calling
/// [`Searcher::handle_blur_elapsed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the host has to schedule the blur check"]
pub struct BlurCheck {
	pub delay: Duration,
}

/// The search state machine.
pub struct Searcher<C> {
	input: SearchInput,
	results: ResultList,
	callbacks: C,
	options: RenderOptions,
	custom_add_callback: Option<CustomAddCallback>,
	/// Input value captured when backspace went down.
	previous_search_string: Option<String>,
}

impl<C: fmt::Debug> fmt::Debug for Searcher<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Searcher")
			.field("input", &self.input)
			.field("results", &self.results)
			.field("callbacks", &self.callbacks)
			.field("options", &self.options)
			.field("custom_add_callback", &self.custom_add_callback.is_some())
			.finish()
	}
}

impl<C: SearcherCallbacks> Searcher<C> {
	/// Bind `input` and `results` to `callbacks`. Starts closed with an empty
	/// input.
	pub fn new(input: SearchInput, results: ResultList, callbacks: C) -> Self {
		let mut searcher = Self {
			input,
			results,
			callbacks,
			options: RenderOptions::default(),
			custom_add_callback: None,
			previous_search_string: None,
		};
		searcher.close_search_results();
		searcher
	}

	/// Construct with a fresh input and result list.
	pub fn with_callbacks(callbacks: C) -> Self {
		Self::new(SearchInput::new(), ResultList::new(), callbacks)
	}

	#[must_use]
	pub fn with_custom_add_enabled(mut self, enabled: bool) -> Self {
		self.set_custom_add_enabled(enabled);
		self
	}

	#[must_use]
	pub fn with_custom_add_callback<F>(mut self, callback: F) -> Self
	where
		F: FnMut(&str) -> bool + 'static,
	{
		self.set_custom_add_callback(Some(Box::new(callback)));
		self
	}

	#[must_use]
	pub fn with_custom_add_label(mut self, label: impl Into<String>) -> Self {
		self.options.labels.custom_add = label.into();
		self
	}

	#[must_use]
	pub fn with_no_search_results_label(mut self, label: impl Into<String>) -> Self {
		self.options.labels.no_results = label.into();
		self
	}

	#[must_use]
	pub fn with_too_many_search_results_label(mut self, label: impl Into<String>) -> Self {
		self.options.labels.too_many_results = label.into();
		self
	}

	pub fn set_custom_add_enabled(&mut self, enabled: bool) {
		self.options.custom_add_enabled = enabled;
	}

	/// Replace the custom-add confirmation. `None` allows every value.
	pub fn set_custom_add_callback(&mut self, callback: Option<CustomAddCallback>) {
		self.custom_add_callback = callback;
	}

	#[must_use]
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	pub fn options_mut(&mut self) -> &mut RenderOptions {
		&mut self.options
	}

	#[must_use]
	pub fn input(&self) -> &SearchInput {
		&self.input
	}

	pub fn input_mut(&mut self) -> &mut SearchInput {
		&mut self.input
	}

	#[must_use]
	pub fn results(&self) -> &ResultList {
		&self.results
	}

	#[must_use]
	pub fn callbacks(&self) -> &C {
		&self.callbacks
	}

	pub fn callbacks_mut(&mut self) -> &mut C {
		&mut self.callbacks
	}

	/// Hide the results, drop every entry and highlight, and clear the input.
	pub fn close_search_results(&mut self) {
		self.results.clear();
		self.results.hide();
		self.input.clear();
	}

	/// Focus the input, which opens the results.
	pub fn focus(&mut self) {
		self.handle_focus();
	}

	/// Run a search and rebuild the results.
	///
	/// `text`, when given, replaces the input value and is searched in lower
	/// case; otherwise the input value is searched as typed.
	pub fn search(&mut self, text: Option<&str>) {
		let query = match text {
			Some(text) => {
				if self.input.value() != text {
					self.input.set_value(text);
				}
				SearchQuery::new(text.to_lowercase())
			}
			None => SearchQuery::new(self.input.value()),
		};

		let result = self.callbacks.search(&query);
		// A custom add commits the input as typed, so check that text.
		let callbacks = &self.callbacks;
		let typed = self.input.value().trim();
		self.results.render(&result, &query, &self.options, |_| {
			callbacks.does_not_contain_value(typed)
		});
		debug!(
			query = query.text(),
			candidates = result.candidates.len(),
			truncated = result.truncated,
			rendered = self.results.len(),
			"searched"
		);
	}

	#[must_use]
	pub fn highlighted_search_result(&self) -> Option<&ResultEntry> {
		self.results.highlighted()
	}

	pub fn highlight_next_search_result(&mut self) {
		self.results.highlight_next();
	}

	pub fn highlight_previous_search_result(&mut self) {
		self.results.highlight_previous();
	}

	/// Highlight the entry at `index`. Returns false for informational or
	/// out-of-range entries.
	pub fn highlight_search_result(&mut self, index: usize) -> bool {
		self.results.highlight(index)
	}

	#[must_use]
	pub fn is_search_results_visible(&self) -> bool {
		self.results.is_visible()
	}

	#[must_use]
	pub fn is_custom_add_visible(&self) -> bool {
		self.results.is_custom_add_visible()
	}

	/// Commit the highlighted entry to the owner and close.
	///
	/// A custom-add entry commits the trimmed input text, and only after the
	/// confirmation callback accepts it.
	pub fn select_highlighted_search_result(&mut self) -> CommitOutcome {
		let Some(entry) = self.results.highlighted() else {
			return CommitOutcome::NothingHighlighted;
		};

		let custom = entry.kind == EntryKind::CustomAdd;
		let value = if custom {
			self.input.value().trim().to_string()
		} else {
			entry.value.clone()
		};

		if custom {
			if let Some(confirm) = self.custom_add_callback.as_mut() {
				if !confirm(&value) {
					debug!(value = %value, "custom value declined");
					return CommitOutcome::Declined;
				}
			}
		}

		debug!(value = %value, custom, "committing search result");
		self.callbacks.select_search_result(&value);
		self.close_search_results();
		CommitOutcome::Committed(value)
	}

	pub fn handle_focus(&mut self) {
		self.input.set_focused(true);
		self.search(None);
	}

	pub fn handle_input_click(&mut self) {
		self.search(None);
	}

	/// The input lost focus. The host runs the returned check later.
	pub fn handle_blur(&mut self) -> BlurCheck {
		self.input.set_focused(false);
		BlurCheck { delay: BLUR_GRACE }
	}

	/// Close unless focus came back during the grace period.
	pub fn handle_blur_elapsed(&mut self) {
		if !self.input.is_focused() {
			self.close_search_results();
		}
	}

	pub fn handle_key_down(&mut self, key: Key) -> KeyResponse {
		match key {
			Key::Backspace => {
				self.previous_search_string = Some(self.input.value().to_string());
				KeyResponse::PASS
			}
			Key::Up => {
				self.highlight_previous_search_result();
				KeyResponse::PREVENT
			}
			Key::Down => {
				if self.is_search_results_visible() {
					self.highlight_next_search_result();
				} else {
					self.search(None);
				}
				KeyResponse::PREVENT
			}
			Key::Enter => KeyResponse::PREVENT,
			_ => KeyResponse::PASS,
		}
	}

	pub fn handle_key_up(&mut self, key: Key) -> KeyResponse {
		match key {
			Key::Backspace => {
				let previous_was_empty = self.previous_search_string.as_deref() == Some("");
				if self.input.is_empty() && previous_was_empty {
					self.callbacks.deleted_beyond_search_input();
				} else {
					self.search(None);
				}
				KeyResponse::PASS
			}
			Key::Enter => {
				if self.highlighted_search_result().is_some() {
					let _ = self.select_highlighted_search_result();
				}
				KeyResponse::PREVENT
			}
			Key::Escape => {
				self.results.hide();
				KeyResponse::PASS
			}
			key if key.refreshes_search() => {
				self.search(None);
				KeyResponse::PASS
			}
			_ => KeyResponse::PASS,
		}
	}

	/// Full key stroke: key-down, the input's default edit unless prevented,
	/// then key-up.
	pub fn handle_key_press(&mut self, key: Key) -> KeyResponse {
		let down = self.handle_key_down(key);
		if !down.prevent_default {
			self.input.apply(key);
		}
		let up = self.handle_key_up(key);
		KeyResponse {
			prevent_default: down.prevent_default || up.prevent_default,
		}
	}

	/// The pointer moved over the entry at `index`.
	pub fn handle_result_hover(&mut self, index: usize) -> bool {
		self.results.highlight(index)
	}

	/// The entry at `index` was clicked: highlight it, then commit.
	pub fn handle_result_click(&mut self, index: usize) -> CommitOutcome {
		if !self.results.highlight(index) {
			return CommitOutcome::NothingHighlighted;
		}
		self.select_highlighted_search_result()
	}
}
