//! State of the rendered search results: entries, highlight, viewport.

use tracing::trace;

use crate::search::{SearchQuery, SearchResult};

/// Number of result rows shown before the list scrolls.
pub const MAX_VISIBLE_RESULTS: usize = 10;

/// The role an entry plays in the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
	/// A value returned by the search callback.
	Candidate,
	/// Offers the typed text as a new value.
	CustomAdd,
	/// Nothing matched a non-empty query.
	NoResults,
	/// The search callback dropped some matches.
	TooManyResults,
}

/// A single rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
	pub kind: EntryKind,
	/// Value committed when this entry is selected.
	pub value: String,
	/// Text shown for the row.
	pub label: String,
}

impl ResultEntry {
	fn candidate(value: &str) -> Self {
		Self {
			kind: EntryKind::Candidate,
			value: value.to_string(),
			label: value.to_string(),
		}
	}

	fn pseudo(kind: EntryKind, label: &str, query: &str) -> Self {
		Self {
			kind,
			value: query.to_string(),
			label: format!("{label}{query}"),
		}
	}

	/// Whether the entry can be highlighted and committed.
	#[must_use]
	pub fn is_selectable(&self) -> bool {
		matches!(self.kind, EntryKind::Candidate | EntryKind::CustomAdd)
	}
}

/// Labels prefixed to the query text on pseudo-entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLabels {
	pub custom_add: String,
	pub no_results: String,
	pub too_many_results: String,
}

impl Default for ResultLabels {
	fn default() -> Self {
		Self {
			custom_add: "Add Custom: ".to_string(),
			no_results: "No Matches For: ".to_string(),
			too_many_results: "Too Many Matches For: ".to_string(),
		}
	}
}

/// Settings consulted on every [`ResultList::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
	pub custom_add_enabled: bool,
	pub labels: ResultLabels,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			custom_add_enabled: true,
			labels: ResultLabels::default(),
		}
	}
}

/// The results surface: what is listed, what is highlighted and which slice
/// of the list is scrolled into view.
#[derive(Debug, Clone, Default)]
pub struct ResultList {
	entries: Vec<ResultEntry>,
	highlighted: Option<usize>,
	visible: bool,
	offset: usize,
}

impl ResultList {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the listed entries with the outcome of a search.
	///
	/// Candidates come first in provider order. A custom-add entry follows
	/// when enabled, the query is non-blank, no candidate matches it exactly
	/// and `allow_custom_add` accepts the trimmed query. A no-results entry
	/// stands in when nothing selectable was produced for a non-blank query,
	/// and a too-many-results entry closes the list when the provider
	/// truncated. The exact match, or else the custom-add entry, ends up
	/// highlighted.
	pub fn render<F>(
		&mut self,
		result: &SearchResult,
		query: &SearchQuery,
		options: &RenderOptions,
		allow_custom_add: F,
	) where
		F: FnOnce(&str) -> bool,
	{
		self.clear();
		let trimmed = query.trimmed();

		let mut matching = None;
		for candidate in &result.candidates {
			if matching.is_none() && !query.is_blank() && query.matches_exactly(candidate) {
				matching = Some(self.entries.len());
			}
			self.entries.push(ResultEntry::candidate(candidate));
		}

		if options.custom_add_enabled
			&& !trimmed.is_empty()
			&& matching.is_none()
			&& allow_custom_add(trimmed)
		{
			matching = Some(self.entries.len());
			self.entries.push(ResultEntry::pseudo(
				EntryKind::CustomAdd,
				&options.labels.custom_add,
				trimmed,
			));
		}

		if self.entries.is_empty() && !trimmed.is_empty() {
			self.entries.push(ResultEntry::pseudo(
				EntryKind::NoResults,
				&options.labels.no_results,
				trimmed,
			));
		}

		if result.truncated {
			self.entries.push(ResultEntry::pseudo(
				EntryKind::TooManyResults,
				&options.labels.too_many_results,
				trimmed,
			));
		}

		self.visible = !self.entries.is_empty();
		if let Some(index) = matching {
			self.highlight(index);
		}
	}

	/// Drop every entry and the highlight. Visibility is left untouched.
	pub fn clear(&mut self) {
		self.entries.clear();
		self.highlighted = None;
		self.offset = 0;
	}

	/// Highlight the next selectable entry, wrapping to the first.
	pub fn highlight_next(&mut self) {
		let selectable = self.selectable_indices();
		let next = match self.highlighted {
			Some(current) => selectable
				.iter()
				.copied()
				.find(|&index| index > current)
				.or_else(|| selectable.first().copied()),
			None => selectable.first().copied(),
		};
		if let Some(index) = next {
			self.highlight(index);
		}
	}

	/// Highlight the previous selectable entry, wrapping to the last.
	pub fn highlight_previous(&mut self) {
		let selectable = self.selectable_indices();
		let previous = match self.highlighted {
			Some(current) => selectable
				.iter()
				.rev()
				.copied()
				.find(|&index| index < current)
				.or_else(|| selectable.last().copied()),
			None => selectable.last().copied(),
		};
		if let Some(index) = previous {
			self.highlight(index);
		}
	}

	/// Highlight the entry at `index` if it is selectable, scrolling it into
	/// view. Returns whether the highlight moved there.
	pub fn highlight(&mut self, index: usize) -> bool {
		let Some(entry) = self.entries.get(index) else {
			return false;
		};
		if !entry.is_selectable() {
			return false;
		}
		trace!(index, label = %entry.label, "highlight search result");
		self.highlighted = Some(index);
		self.scroll_into_view(index);
		true
	}

	#[must_use]
	pub fn highlighted(&self) -> Option<&ResultEntry> {
		self.highlighted.and_then(|index| self.entries.get(index))
	}

	#[must_use]
	pub fn highlighted_index(&self) -> Option<usize> {
		self.highlighted
	}

	#[must_use]
	pub fn entries(&self) -> &[ResultEntry] {
		&self.entries
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when nothing is listed, pseudo-entries included.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	pub fn show(&mut self) {
		self.visible = true;
	}

	pub fn hide(&mut self) {
		self.visible = false;
	}

	#[must_use]
	pub fn is_custom_add_visible(&self) -> bool {
		self.entries
			.iter()
			.any(|entry| entry.kind == EntryKind::CustomAdd)
	}

	/// Index of the first entry in view.
	#[must_use]
	pub fn offset(&self) -> usize {
		self.offset
	}

	/// Number of rows the surface needs, capped at [`MAX_VISIBLE_RESULTS`].
	#[must_use]
	pub fn visible_rows(&self) -> usize {
		self.entries.len().min(MAX_VISIBLE_RESULTS)
	}

	/// The entries currently scrolled into view, with their list indices.
	pub fn visible_entries(&self) -> impl Iterator<Item = (usize, &ResultEntry)> + '_ {
		self.entries
			.iter()
			.enumerate()
			.skip(self.offset)
			.take(self.visible_rows())
	}

	/// Map a row of the viewport to an entry index.
	#[must_use]
	pub fn entry_at_row(&self, row: usize) -> Option<usize> {
		if row >= self.visible_rows() {
			return None;
		}
		let index = self.offset + row;
		(index < self.entries.len()).then_some(index)
	}

	fn selectable_indices(&self) -> Vec<usize> {
		self.entries
			.iter()
			.enumerate()
			.filter(|(_, entry)| entry.is_selectable())
			.map(|(index, _)| index)
			.collect()
	}

	fn scroll_into_view(&mut self, index: usize) {
		let rows = self.visible_rows();
		if rows == 0 {
			self.offset = 0;
		} else if index >= self.offset + rows {
			self.offset = index + 1 - rows;
		} else if index < self.offset {
			self.offset = index;
		}
	}
}
