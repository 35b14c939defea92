use unicode_width::UnicodeWidthStr;

use super::Key;

/// The editable text field a searcher reads its query from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
	text: String,
	/// Cursor position as a char index into `text`.
	cursor: usize,
	focused: bool,
}

impl SearchInput {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn value(&self) -> &str {
		&self.text
	}

	/// Replace the text and move the cursor to its end.
	pub fn set_value(&mut self, value: impl Into<String>) {
		self.text = value.into();
		self.cursor = self.text.chars().count();
	}

	pub fn clear(&mut self) {
		self.text.clear();
		self.cursor = 0;
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	pub(crate) fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
	}

	/// Apply the default editing action for `key`. Returns whether the text
	/// changed.
	pub fn apply(&mut self, key: Key) -> bool {
		match key {
			Key::Char(c) if !c.is_control() => {
				self.insert(c);
				true
			}
			Key::Space => {
				self.insert(' ');
				true
			}
			Key::Backspace => self.delete_before_cursor(),
			Key::Delete => self.delete_at_cursor(),
			_ => false,
		}
	}

	pub fn move_left(&mut self) {
		self.cursor = self.cursor.saturating_sub(1);
	}

	pub fn move_right(&mut self) {
		self.cursor = (self.cursor + 1).min(self.text.chars().count());
	}

	pub fn move_home(&mut self) {
		self.cursor = 0;
	}

	pub fn move_end(&mut self) {
		self.cursor = self.text.chars().count();
	}

	/// Display column of the cursor, accounting for wide characters.
	#[must_use]
	pub fn cursor_column(&self) -> usize {
		self.text[..self.byte_offset(self.cursor)].width()
	}

	/// Display width of the whole text.
	#[must_use]
	pub fn width(&self) -> usize {
		self.text.width()
	}

	fn insert(&mut self, c: char) {
		let offset = self.byte_offset(self.cursor);
		self.text.insert(offset, c);
		self.cursor += 1;
	}

	fn delete_before_cursor(&mut self) -> bool {
		if self.cursor == 0 {
			return false;
		}
		self.cursor -= 1;
		let offset = self.byte_offset(self.cursor);
		self.text.remove(offset);
		true
	}

	fn delete_at_cursor(&mut self) -> bool {
		if self.cursor >= self.text.chars().count() {
			return false;
		}
		let offset = self.byte_offset(self.cursor);
		self.text.remove(offset);
		true
	}

	fn byte_offset(&self, char_index: usize) -> usize {
		self.text
			.char_indices()
			.nth(char_index)
			.map(|(offset, _)| offset)
			.unwrap_or(self.text.len())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn typing_and_deleting_follow_the_cursor() {
		let mut input = SearchInput::new();
		for c in "rd".chars() {
			input.apply(Key::Char(c));
		}
		input.move_left();
		input.apply(Key::Char('e'));
		assert_eq!(input.value(), "red");

		input.move_home();
		assert!(!input.apply(Key::Backspace));
		assert!(input.apply(Key::Delete));
		assert_eq!(input.value(), "ed");

		input.move_end();
		assert!(input.apply(Key::Backspace));
		assert_eq!(input.value(), "e");
	}

	#[test]
	fn cursor_column_counts_wide_characters() {
		let mut input = SearchInput::new();
		input.set_value("日本a");
		assert_eq!(input.cursor_column(), 5);
		input.move_left();
		assert_eq!(input.cursor_column(), 4);
	}

	#[test]
	fn navigation_keys_do_not_edit() {
		let mut input = SearchInput::new();
		input.set_value("x");
		assert!(!input.apply(Key::Up));
		assert!(!input.apply(Key::Enter));
		assert_eq!(input.value(), "x");
	}
}
