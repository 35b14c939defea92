//! Typed observer channels owned by each widget instance.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Handle returned by a subscription, used to unsubscribe. Unique across
/// every channel in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
	fn next() -> Self {
		Self(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
	}
}

/// A list of listeners for one event type.
pub struct Listeners<E> {
	listeners: Vec<(ListenerId, Box<dyn FnMut(&E)>)>,
}

impl<E> Default for Listeners<E> {
	fn default() -> Self {
		Self {
			listeners: Vec::new(),
		}
	}
}

impl<E> fmt::Debug for Listeners<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Listeners")
			.field("count", &self.listeners.len())
			.finish()
	}
}

impl<E> Listeners<E> {
	pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
	where
		F: FnMut(&E) + 'static,
	{
		let id = ListenerId::next();
		self.listeners.push((id, Box::new(listener)));
		id
	}

	/// Returns whether a listener was removed.
	pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
		let before = self.listeners.len();
		self.listeners.retain(|(listener_id, _)| *listener_id != id);
		self.listeners.len() != before
	}

	/// Call every listener in subscription order.
	pub fn emit(&mut self, event: &E) {
		for (_, listener) in &mut self.listeners {
			listener(event);
		}
	}

	pub fn clear(&mut self) {
		self.listeners.clear();
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.listeners.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.listeners.is_empty()
	}
}

/// A new option was added to a [`MultipleSelect`](super::MultipleSelect).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionAdded {
	pub value: String,
}

/// An option was selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSelected {
	pub value: String,
}

/// An option was deselected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDeselected {
	pub value: String,
}

/// Every event channel a [`MultipleSelect`](super::MultipleSelect) exposes.
#[derive(Debug, Default)]
pub struct SelectEvents {
	pub(crate) add_option: Listeners<OptionAdded>,
	pub(crate) select_option: Listeners<OptionSelected>,
	pub(crate) deselect_option: Listeners<OptionDeselected>,
}

impl SelectEvents {
	pub fn on_add_option<F>(&mut self, listener: F) -> ListenerId
	where
		F: FnMut(&OptionAdded) + 'static,
	{
		self.add_option.subscribe(listener)
	}

	pub fn on_select_option<F>(&mut self, listener: F) -> ListenerId
	where
		F: FnMut(&OptionSelected) + 'static,
	{
		self.select_option.subscribe(listener)
	}

	pub fn on_deselect_option<F>(&mut self, listener: F) -> ListenerId
	where
		F: FnMut(&OptionDeselected) + 'static,
	{
		self.deselect_option.subscribe(listener)
	}

	/// Remove `id` from whichever channel holds it.
	pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
		self.add_option.unsubscribe(id)
			|| self.select_option.unsubscribe(id)
			|| self.deselect_option.unsubscribe(id)
	}

	/// Drop every subscription on every channel.
	pub fn clear(&mut self) {
		self.add_option.clear();
		self.select_option.clear();
		self.deselect_option.clear();
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.add_option.len() + self.select_option.len() + self.deselect_option.len()
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;

	#[test]
	fn listeners_fire_in_order_until_unsubscribed() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let mut listeners = Listeners::<OptionSelected>::default();

		let first_log = Rc::clone(&log);
		let first = listeners.subscribe(move |event| {
			first_log.borrow_mut().push(format!("first:{}", event.value));
		});
		let second_log = Rc::clone(&log);
		listeners.subscribe(move |event| {
			second_log.borrow_mut().push(format!("second:{}", event.value));
		});

		listeners.emit(&OptionSelected { value: "a".into() });
		assert!(listeners.unsubscribe(first));
		assert!(!listeners.unsubscribe(first));
		listeners.emit(&OptionSelected { value: "b".into() });

		assert_eq!(*log.borrow(), vec!["first:a", "second:a", "second:b"]);
	}

	#[test]
	fn unsubscribe_targets_only_the_owning_channel() {
		let mut events = SelectEvents::default();
		let added = events.on_add_option(|_| {});
		let selected = events.on_select_option(|_| {});
		events.on_deselect_option(|_| {});
		assert_ne!(added, selected);

		assert!(events.unsubscribe(selected));
		assert_eq!(events.add_option.len(), 1);
		assert!(events.select_option.is_empty());
		assert_eq!(events.len(), 2);

		events.clear();
		assert_eq!(events.len(), 0);
	}
}
