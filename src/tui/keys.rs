//! Translate crossterm events into searcher input.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::searcher::Key;

/// Cursor movement inside the search input. The searcher never sees these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CursorMove {
	Left,
	Right,
	Home,
	End,
}

/// A key press as the host routes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HostKey {
	/// Ctrl+C.
	Cancel,
	/// Tab or Shift+Tab.
	SwitchFocus,
	Cursor(CursorMove),
	Searcher(Key),
}

pub(crate) fn host_key(event: &KeyEvent) -> HostKey {
	let control = event.modifiers.contains(KeyModifiers::CONTROL);
	match event.code {
		KeyCode::Char('c') if control => HostKey::Cancel,
		KeyCode::Tab | KeyCode::BackTab => HostKey::SwitchFocus,
		KeyCode::Left => HostKey::Cursor(CursorMove::Left),
		KeyCode::Right => HostKey::Cursor(CursorMove::Right),
		KeyCode::Home => HostKey::Cursor(CursorMove::Home),
		KeyCode::End => HostKey::Cursor(CursorMove::End),
		code => HostKey::Searcher(searcher_key(code, event.modifiers)),
	}
}

fn searcher_key(code: KeyCode, modifiers: KeyModifiers) -> Key {
	match code {
		KeyCode::Char(_) if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Key::Other,
		KeyCode::Char(' ') => Key::Space,
		KeyCode::Char(c) => Key::Char(c),
		KeyCode::Backspace => Key::Backspace,
		KeyCode::Delete => Key::Delete,
		KeyCode::Enter => Key::Enter,
		KeyCode::Esc => Key::Escape,
		KeyCode::Up => Key::Up,
		KeyCode::Down => Key::Down,
		_ => Key::Other,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn press(code: KeyCode, modifiers: KeyModifiers) -> HostKey {
		host_key(&KeyEvent::new(code, modifiers))
	}

	#[test]
	fn printable_keys_reach_the_searcher() {
		assert_eq!(press(KeyCode::Char('a'), KeyModifiers::NONE), HostKey::Searcher(Key::Char('a')));
		assert_eq!(press(KeyCode::Char('A'), KeyModifiers::SHIFT), HostKey::Searcher(Key::Char('A')));
		assert_eq!(press(KeyCode::Char(' '), KeyModifiers::NONE), HostKey::Searcher(Key::Space));
		assert_eq!(press(KeyCode::Esc, KeyModifiers::NONE), HostKey::Searcher(Key::Escape));
	}

	#[test]
	fn host_shortcuts_are_intercepted() {
		assert_eq!(press(KeyCode::Char('c'), KeyModifiers::CONTROL), HostKey::Cancel);
		assert_eq!(press(KeyCode::Tab, KeyModifiers::NONE), HostKey::SwitchFocus);
		assert_eq!(press(KeyCode::BackTab, KeyModifiers::SHIFT), HostKey::SwitchFocus);
		assert_eq!(press(KeyCode::Home, KeyModifiers::NONE), HostKey::Cursor(CursorMove::Home));
	}

	#[test]
	fn other_control_chords_are_ignored() {
		assert_eq!(press(KeyCode::Char('x'), KeyModifiers::CONTROL), HostKey::Searcher(Key::Other));
		assert_eq!(press(KeyCode::F(1), KeyModifiers::NONE), HostKey::Searcher(Key::Other));
	}
}
