use std::time::Instant;

use ratatui::crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::debug;

use super::keys::{CursorMove, HostKey, host_key};
use super::surface::WidgetSurface;
use super::theme::Theme;
use crate::searcher::Key;
use crate::selection::EntryId;

const DEFAULT_TITLE: &str = "chipsearch";

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Widget,
	Done,
}

/// How the session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
	pub accepted: bool,
	/// The chosen values. Empty when cancelled.
	pub values: Vec<String>,
}

/// Screen regions from the last draw, used to route mouse events.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitMap {
	pub(crate) widget: Rect,
	pub(crate) results: Option<Rect>,
	pub(crate) done: Rect,
	pub(crate) remove_icons: Vec<(Rect, EntryId)>,
}

/// Hosts one chip widget and a Done button in the terminal.
#[derive(Debug)]
pub struct App<W> {
	pub(crate) widget: W,
	pub(crate) focus: Focus,
	pub(crate) title: String,
	pub(crate) theme: Theme,
	blur_deadline: Option<Instant>,
	pub(crate) hits: HitMap,
}

impl<W: WidgetSurface> App<W> {
	/// Wrap `widget` and give its search input the focus.
	pub fn new(mut widget: W) -> Self {
		widget.searcher_mut().handle_focus();
		Self {
			widget,
			focus: Focus::Widget,
			title: DEFAULT_TITLE.to_string(),
			theme: Theme::default(),
			blur_deadline: None,
			hits: HitMap::default(),
		}
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	#[must_use]
	pub fn widget(&self) -> &W {
		&self.widget
	}

	pub fn widget_mut(&mut self) -> &mut W {
		&mut self.widget
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	/// When the pending blur check fires, if one is scheduled.
	#[must_use]
	pub fn blur_deadline(&self) -> Option<Instant> {
		self.blur_deadline
	}

	/// Route a key press. Returns the outcome once the session ends.
	pub fn handle_key(&mut self, event: KeyEvent, now: Instant) -> Option<Outcome> {
		match host_key(&event) {
			HostKey::Cancel => Some(self.finish(false)),
			HostKey::SwitchFocus => {
				self.switch_focus(now);
				None
			}
			HostKey::Cursor(movement) => {
				if self.focus == Focus::Widget {
					let input = self.widget.searcher_mut().input_mut();
					match movement {
						CursorMove::Left => input.move_left(),
						CursorMove::Right => input.move_right(),
						CursorMove::Home => input.move_home(),
						CursorMove::End => input.move_end(),
					}
				}
				None
			}
			HostKey::Searcher(key) => match self.focus {
				Focus::Done => match key {
					Key::Enter => Some(self.finish(true)),
					Key::Escape => Some(self.finish(false)),
					_ => None,
				},
				Focus::Widget => {
					let _ = self.widget.searcher_mut().handle_key_press(key);
					if key == Key::Escape {
						self.widget.handle_display_escape();
					}
					None
				}
			},
		}
	}

	/// Route a mouse event against the regions of the last draw.
	pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<Outcome> {
		let position = Position::new(event.column, event.row);
		match event.kind {
			MouseEventKind::Moved => {
				if let Some(index) = self.result_at(position) {
					self.widget.searcher_mut().handle_result_hover(index);
				}
				None
			}
			MouseEventKind::Down(MouseButton::Left) => self.handle_click(position),
			MouseEventKind::ScrollDown if self.widget.searcher().is_search_results_visible() => {
				self.widget.searcher_mut().highlight_next_search_result();
				None
			}
			MouseEventKind::ScrollUp if self.widget.searcher().is_search_results_visible() => {
				self.widget.searcher_mut().highlight_previous_search_result();
				None
			}
			_ => None,
		}
	}

	/// Run a due blur check.
	pub fn tick(&mut self, now: Instant) {
		if let Some(deadline) = self.blur_deadline
			&& now >= deadline
		{
			self.blur_deadline = None;
			self.widget.searcher_mut().handle_blur_elapsed();
		}
	}

	fn handle_click(&mut self, position: Position) -> Option<Outcome> {
		if self.hits.done.contains(position) {
			return Some(self.finish(true));
		}

		if let Some(index) = self.result_at(position) {
			let outcome = self.widget.searcher_mut().handle_result_click(index);
			debug!(index, ?outcome, "result clicked");
			return None;
		}

		let icon = self
			.hits
			.remove_icons
			.iter()
			.find(|(area, _)| area.contains(position))
			.map(|(_, id)| id.clone());
		if let Some(id) = icon {
			debug!(%id, "chip removed by click");
			self.widget.remove_chip(&id);
			self.widget.handle_global_click(true);
			return None;
		}

		if self.hits.widget.contains(position) {
			if self.focus == Focus::Widget {
				self.widget.searcher_mut().handle_input_click();
			} else {
				self.focus_widget();
			}
		} else {
			self.widget.handle_global_click(false);
		}
		None
	}

	fn result_at(&self, position: Position) -> Option<usize> {
		let area = self.hits.results?;
		if !area.contains(position) {
			return None;
		}
		let row = usize::from(position.y - area.y);
		self.widget.searcher().results().entry_at_row(row)
	}

	fn switch_focus(&mut self, now: Instant) {
		match self.focus {
			Focus::Widget => {
				let check = self.widget.searcher_mut().handle_blur();
				self.blur_deadline = Some(now + check.delay);
				self.focus = Focus::Done;
			}
			Focus::Done => self.focus_widget(),
		}
	}

	fn focus_widget(&mut self) {
		self.focus = Focus::Widget;
		self.widget.searcher_mut().handle_focus();
	}

	fn finish(&self, accepted: bool) -> Outcome {
		let values = if accepted {
			self.widget.values()
		} else {
			Vec::new()
		};
		debug!(accepted, count = values.len(), "session finished");
		Outcome { accepted, values }
	}
}
