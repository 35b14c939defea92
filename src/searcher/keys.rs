/// Keys the searcher distinguishes. Anything else is [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	Char(char),
	Space,
	Backspace,
	Delete,
	Enter,
	Escape,
	Up,
	Down,
	Other,
}

impl Key {
	/// Whether releasing this key re-runs the search.
	///
	/// Backspace is handled separately because of the delete-beyond-input
	/// check.
	#[must_use]
	pub fn refreshes_search(self) -> bool {
		match self {
			Self::Char(c) => !c.is_control(),
			Self::Space | Self::Delete => true,
			_ => false,
		}
	}
}

/// What the host should do with the event after the searcher saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyResponse {
	/// Suppress the host's default action (text editing, form submission).
	pub prevent_default: bool,
}

impl KeyResponse {
	pub(crate) const PASS: Self = Self {
		prevent_default: false,
	};
	pub(crate) const PREVENT: Self = Self {
		prevent_default: true,
	};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn printable_keys_refresh_search() {
		assert!(Key::Char('a').refreshes_search());
		assert!(Key::Char('7').refreshes_search());
		assert!(Key::Space.refreshes_search());
		assert!(Key::Delete.refreshes_search());
	}

	#[test]
	fn navigation_keys_do_not_refresh_search() {
		for key in [Key::Up, Key::Down, Key::Enter, Key::Escape, Key::Other, Key::Backspace] {
			assert!(!key.refreshes_search(), "{key:?} should not refresh");
		}
		assert!(!Key::Char('\u{7}').refreshes_search());
	}
}
