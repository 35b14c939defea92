//! Colour themes for the terminal host.

mod builtins;

use ratatui::style::{Color, Modifier, Style};

pub use builtins::{LIGHT, SLATE, SOLARIZED};

use builtins::BUILT_IN_DEFINITIONS;

/// Styles for every element the host draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Title line.
	pub header: Style,
	/// Search input text and the focused border.
	pub prompt: Style,
	/// Chips of the current selection.
	pub chip: Style,
	/// The chip marked for removal.
	pub chip_marked: Style,
	/// The highlighted search result.
	pub row_highlight: Style,
	/// Placeholder text and informational result entries.
	pub empty: Style,
	/// Remove icons and the focused Done button.
	pub highlight: Style,
}

impl Theme {
	#[must_use]
	pub fn chip_style(&self, marked: bool) -> Style {
		if marked { self.chip_marked } else { self.chip }
	}

	/// Border style of a block, depending on focus.
	#[must_use]
	pub fn border_style(&self, focused: bool) -> Style {
		if focused {
			self.prompt
		} else {
			Style::new().fg(self.empty.fg.unwrap_or(Color::Reset))
		}
	}

	#[must_use]
	pub fn button_style(&self, focused: bool) -> Style {
		if focused {
			self.highlight.add_modifier(Modifier::REVERSED)
		} else {
			self.prompt
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// A theme compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	fn answers_to(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.answers_to(name))
		.map(|definition| definition.theme)
}

/// Canonical theme names, sorted case-insensitively.
#[must_use]
pub fn names() -> Vec<&'static str> {
	let mut names: Vec<_> = BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect();
	names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
	names
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_themes_are_listed() {
		assert_eq!(names(), vec!["light", "slate", "solarized"]);
	}

	#[test]
	fn lookup_ignores_case_and_accepts_aliases() {
		assert_eq!(by_name("SLATE"), Some(SLATE));
		assert_eq!(by_name(" dark "), Some(SLATE));
		assert_eq!(by_name("solarised"), Some(SOLARIZED));
		assert!(by_name("neon").is_none());
	}

	#[test]
	fn marked_chips_use_their_own_style() {
		let theme = Theme::default();
		assert_eq!(theme.chip_style(false), theme.chip);
		assert_eq!(theme.chip_style(true), theme.chip_marked);
	}
}
