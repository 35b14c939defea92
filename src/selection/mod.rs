//! Ordered collection of the values a widget has already chosen.
//!
//! A [`SelectionSet`] only tracks membership and order. How entries are
//! identified is delegated to an [`IdentityStrategy`]: the value-keyed
//! strategy rejects duplicates, the synthetic-id strategy hands every entry a
//! fresh display id so the same value may appear more than once.

mod identity;

pub use identity::{EntryId, IdentityStrategy, SyntheticIds, ValueKeyed};

/// A single chosen value together with the label rendered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedValue {
	/// Identity assigned by the set's [`IdentityStrategy`].
	pub id: EntryId,
	/// The value submitted on behalf of this entry.
	pub value: String,
	/// Human-readable label shown on the chip.
	pub label: String,
}

/// Result of [`SelectionSet::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
	/// The value was appended and received the given identity.
	Added(EntryId),
	/// The strategy rejects duplicates and the value was already selected.
	AlreadyPresent,
}

impl AddOutcome {
	/// Whether the set changed.
	#[must_use]
	pub fn is_added(&self) -> bool {
		matches!(self, Self::Added(_))
	}
}

/// Insertion-ordered selection parameterised by an identity strategy.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet<S = ValueKeyed> {
	entries: Vec<SelectedValue>,
	strategy: S,
}

impl SelectionSet<ValueKeyed> {
	/// Create an empty set that rejects duplicate values.
	#[must_use]
	pub fn value_keyed() -> Self {
		Self::with_strategy(ValueKeyed)
	}
}

impl SelectionSet<SyntheticIds> {
	/// Create an empty set that allows the same value more than once.
	#[must_use]
	pub fn supporting_duplicates() -> Self {
		Self::with_strategy(SyntheticIds::default())
	}
}

impl<S: IdentityStrategy> SelectionSet<S> {
	/// Create an empty set using `strategy` to assign identities.
	#[must_use]
	pub fn with_strategy(strategy: S) -> Self {
		Self {
			entries: Vec::new(),
			strategy,
		}
	}

	/// Append `value` unless the strategy forbids another copy of it.
	pub fn add(&mut self, value: impl Into<String>, label: impl Into<String>) -> AddOutcome {
		let value = value.into();
		if !self.strategy.allows_duplicates() && self.contains(&value) {
			return AddOutcome::AlreadyPresent;
		}

		let id = self.strategy.assign(&value);
		self.entries.push(SelectedValue {
			id: id.clone(),
			value,
			label: label.into(),
		});
		AddOutcome::Added(id)
	}

	/// Remove the entry with the given identity, if any.
	pub fn remove(&mut self, id: &EntryId) -> Option<SelectedValue> {
		let position = self.entries.iter().position(|entry| &entry.id == id)?;
		Some(self.entries.remove(position))
	}

	/// Remove the first entry carrying `value`, if any.
	pub fn remove_value(&mut self, value: &str) -> Option<SelectedValue> {
		let position = self.entries.iter().position(|entry| entry.value == value)?;
		Some(self.entries.remove(position))
	}

	/// Whether at least one entry carries `value`.
	#[must_use]
	pub fn contains(&self, value: &str) -> bool {
		self.entries.iter().any(|entry| entry.value == value)
	}

	/// Look up an entry by identity.
	#[must_use]
	pub fn get(&self, id: &EntryId) -> Option<&SelectedValue> {
		self.entries.iter().find(|entry| &entry.id == id)
	}

	/// Iterate over the entries in insertion order.
	///
	/// Each call starts a fresh pass over the state at call time.
	pub fn iter(&self) -> impl Iterator<Item = &SelectedValue> + '_ {
		self.entries.iter()
	}

	/// Snapshot of the selected values in insertion order.
	#[must_use]
	pub fn values(&self) -> Vec<String> {
		self.entries.iter().map(|entry| entry.value.clone()).collect()
	}

	/// The most recently appended entry.
	#[must_use]
	pub fn last(&self) -> Option<&SelectedValue> {
		self.entries.last()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Drop every entry. Identities already handed out are never reused.
	pub fn clear(&mut self) {
		self.entries.clear();
	}
}

impl<'a, S> IntoIterator for &'a SelectionSet<S> {
	type Item = &'a SelectedValue;
	type IntoIter = std::slice::Iter<'a, SelectedValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
