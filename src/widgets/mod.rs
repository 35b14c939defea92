//! Selection widgets built on top of the [`Searcher`](crate::searcher::Searcher).
//!
//! Each widget keeps its chosen values as chips in a
//! [`SelectionSet`](crate::selection::SelectionSet) and hands the searcher a
//! model that implements [`SearcherCallbacks`](crate::search::SearcherCallbacks).

pub mod events;
mod multiple_select;
mod phrase_builder;

pub use events::{ListenerId, Listeners, OptionAdded, OptionDeselected, OptionSelected, SelectEvents};
pub use multiple_select::{MultipleSelect, SelectModel, SelectOption};
pub use phrase_builder::{PhraseBuilder, PhraseModel, PhraseSearch};

use crate::selection::{EntryId, IdentityStrategy, SelectionSet};

/// A chip as a host should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chip<'a> {
	pub id: &'a EntryId,
	pub value: &'a str,
	pub label: &'a str,
	/// The chip is marked and the next delete-beyond-input removes it.
	pub marked: bool,
}

/// Tracks which chip, if any, is marked for removal by backspace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RemovalMark {
	marked: Option<EntryId>,
}

impl RemovalMark {
	/// Mark the last chip of `set`. No-op for an empty set.
	pub(crate) fn mark_last<S: IdentityStrategy>(&mut self, set: &SelectionSet<S>) {
		if let Some(last) = set.last() {
			self.marked = Some(last.id.clone());
		}
	}

	pub(crate) fn is_last_marked<S: IdentityStrategy>(&self, set: &SelectionSet<S>) -> bool {
		match (&self.marked, set.last()) {
			(Some(marked), Some(last)) => *marked == last.id,
			_ => false,
		}
	}

	pub(crate) fn marked(&self) -> Option<&EntryId> {
		self.marked.as_ref()
	}

	pub(crate) fn is_marked(&self, id: &EntryId) -> bool {
		self.marked.as_ref() == Some(id)
	}

	pub(crate) fn clear(&mut self) {
		self.marked = None;
	}
}

pub(crate) fn chips<'a, S: IdentityStrategy>(
	set: &'a SelectionSet<S>,
	mark: &'a RemovalMark,
) -> impl Iterator<Item = Chip<'a>> + 'a {
	set.iter().map(move |entry| Chip {
		id: &entry.id,
		value: &entry.value,
		label: &entry.label,
		marked: mark.is_marked(&entry.id),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mark_follows_the_last_chip() {
		let mut set = SelectionSet::value_keyed();
		let mut mark = RemovalMark::default();

		mark.mark_last(&set);
		assert!(mark.marked().is_none());

		set.add("a", "A");
		set.add("b", "B");
		mark.mark_last(&set);
		assert!(mark.is_last_marked(&set));

		set.add("c", "C");
		assert!(!mark.is_last_marked(&set));

		let marked: Vec<_> = chips(&set, &mark).filter(|chip| chip.marked).map(|chip| chip.value).collect();
		assert_eq!(marked, vec!["b"]);
	}
}
