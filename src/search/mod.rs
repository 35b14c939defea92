//! The contract between a [`Searcher`](crate::searcher::Searcher) and the
//! widget that owns it, plus reusable candidate matchers.

mod matcher;

pub use matcher::{MatchMode, fuzzy_matches, limit_results, prefix_matches};

/// Text submitted for a single search invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
	text: String,
}

impl SearchQuery {
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into() }
	}

	/// The query exactly as it was submitted.
	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	/// The submitted text with surrounding whitespace removed.
	#[must_use]
	pub fn trimmed(&self) -> &str {
		self.text.trim()
	}

	/// Trimmed, lower-cased form used for matching.
	#[must_use]
	pub fn normalized(&self) -> String {
		self.trimmed().to_lowercase()
	}

	#[must_use]
	pub fn is_blank(&self) -> bool {
		self.trimmed().is_empty()
	}

	/// Whether `candidate` equals this query ignoring case and outer whitespace.
	#[must_use]
	pub fn matches_exactly(&self, candidate: &str) -> bool {
		candidate.trim().to_lowercase() == self.normalized()
	}
}

/// Candidates produced by one search, replaced wholesale on the next.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResult {
	/// Display strings in the order they should be rendered.
	pub candidates: Vec<String>,
	/// The provider matched more candidates than it returned.
	pub truncated: bool,
}

impl SearchResult {
	pub fn new<I, S>(candidates: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			candidates: candidates.into_iter().map(Into::into).collect(),
			truncated: false,
		}
	}

	#[must_use]
	pub fn empty() -> Self {
		Self::default()
	}

	/// Flag whether more candidates matched than were returned.
	#[must_use]
	pub fn with_truncated(mut self, truncated: bool) -> Self {
		self.truncated = truncated;
		self
	}
}

/// Callbacks a [`Searcher`](crate::searcher::Searcher) uses to talk to the
/// widget that owns it.
pub trait SearcherCallbacks {
	/// Produce the candidates for `query`. Must not change the selection.
	fn search(&mut self, query: &SearchQuery) -> SearchResult;

	/// Commit `value` as chosen by the user.
	fn select_search_result(&mut self, value: &str);

	/// Backspace was pressed twice on an empty input.
	fn deleted_beyond_search_input(&mut self);

	/// Whether `value` is absent from the widget, which allows offering it as
	/// a custom entry.
	fn does_not_contain_value(&self, _value: &str) -> bool {
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn query_normalization_trims_and_lowercases() {
		let query = SearchQuery::new("  ReD ");
		assert_eq!(query.text(), "  ReD ");
		assert_eq!(query.trimmed(), "ReD");
		assert_eq!(query.normalized(), "red");
		assert!(query.matches_exactly(" red"));
		assert!(!query.matches_exactly("redder"));
	}

	#[test]
	fn blank_queries() {
		assert!(SearchQuery::new("   ").is_blank());
		assert!(SearchQuery::default().is_blank());
		assert!(!SearchQuery::new("a").is_blank());
	}
}
