use std::fmt;

/// Identity of an entry inside a [`SelectionSet`](super::SelectionSet).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryId {
	/// Keyed by the selected value itself.
	Value(String),
	/// Keyed by a synthetic display id.
	Synthetic(u64),
}

impl fmt::Display for EntryId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Value(value) => write!(f, "option-{}", value.replace(' ', "-")),
			Self::Synthetic(id) => write!(f, "display-{id}"),
		}
	}
}

/// Decides how selection entries are identified.
pub trait IdentityStrategy {
	/// Whether the same value may be selected more than once.
	fn allows_duplicates(&self) -> bool;

	/// Produce the identity for a value that is about to be appended.
	fn assign(&mut self, value: &str) -> EntryId;
}

/// Entries are identified by their value; duplicates are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueKeyed;

impl IdentityStrategy for ValueKeyed {
	fn allows_duplicates(&self) -> bool {
		false
	}

	fn assign(&mut self, value: &str) -> EntryId {
		EntryId::Value(value.to_string())
	}
}

/// Entries receive a fresh id each; the same value may repeat.
#[derive(Debug, Clone, Default)]
pub struct SyntheticIds {
	next: u64,
}

impl IdentityStrategy for SyntheticIds {
	fn allows_duplicates(&self) -> bool {
		true
	}

	fn assign(&mut self, _value: &str) -> EntryId {
		self.next += 1;
		EntryId::Synthetic(self.next)
	}
}
