use std::time::Instant;

use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::TestBackend};

use super::render::layout_chips;
use super::theme::SLATE;
use super::*;
use crate::search::{SearchQuery, SearchResult, prefix_matches};
use crate::searcher::BLUR_GRACE;
use crate::selection::EntryId;
use crate::widgets::{Chip, MultipleSelect, PhraseBuilder, SelectOption};

fn colors() -> MultipleSelect {
	MultipleSelect::new([
		SelectOption::new("r", "Red"),
		SelectOption::new("g", "Green"),
		SelectOption::new("b", "Blue"),
	])
}

fn terminal() -> Terminal<TestBackend> {
	Terminal::new(TestBackend::new(40, 20)).expect("test terminal")
}

fn draw<W: WidgetSurface>(terminal: &mut Terminal<TestBackend>, app: &mut App<W>) -> String {
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	terminal.backend().to_string()
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text<W: WidgetSurface>(app: &mut App<W>, text: &str) {
	for c in text.chars() {
		assert!(app.handle_key(key(KeyCode::Char(c)), Instant::now()).is_none());
	}
}

fn mouse(kind: MouseEventKind, area: Rect) -> MouseEvent {
	MouseEvent {
		kind,
		column: area.x,
		row: area.y,
		modifiers: KeyModifiers::NONE,
	}
}

fn results_row(app: &App<MultipleSelect>, row: u16) -> Rect {
	let results = app.hits.results.expect("results are drawn");
	Rect::new(results.x, results.y + row, 1, 1)
}

#[test]
fn initial_draw_shows_placeholder_results_and_done_button() {
	let mut app = App::new(colors()).with_title("Pick colours");
	let view = draw(&mut terminal(), &mut app);

	assert!(view.contains("Pick colours"));
	assert!(view.contains("Choose"));
	assert!(view.contains("Blue"));
	assert!(view.contains("Green"));
	assert!(view.contains("Red"));
	assert!(view.contains("[ Done ]"));
	assert_eq!(app.focus(), Focus::Widget);
}

#[test]
fn typing_and_enter_turn_an_exact_match_into_a_chip() {
	let mut app = App::new(colors());
	type_text(&mut app, "blue");
	assert!(app.handle_key(key(KeyCode::Enter), Instant::now()).is_none());

	assert_eq!(app.widget().selected_values(), vec!["b"]);
	let view = draw(&mut terminal(), &mut app);
	assert!(view.contains(" Blue X "));
	assert!(!view.contains("Choose"));
}

#[test]
fn tab_then_enter_accepts_the_selection() {
	let mut widget = colors();
	widget.select_option_with_value("r").expect("present");
	let mut app = App::new(widget);

	assert!(app.handle_key(key(KeyCode::Tab), Instant::now()).is_none());
	assert_eq!(app.focus(), Focus::Done);

	let outcome = app.handle_key(key(KeyCode::Enter), Instant::now());
	assert_eq!(
		outcome,
		Some(Outcome {
			accepted: true,
			values: vec!["r".to_string()],
		})
	);
}

#[test]
fn ctrl_c_cancels_from_anywhere() {
	let mut app = App::new(colors());
	type_text(&mut app, "re");
	let outcome = app.handle_key(
		KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
		Instant::now(),
	);
	assert_eq!(
		outcome,
		Some(Outcome {
			accepted: false,
			values: Vec::new(),
		})
	);
}

#[test]
fn escape_on_the_done_button_cancels() {
	let mut app = App::new(colors());
	app.handle_key(key(KeyCode::Tab), Instant::now());
	let outcome = app.handle_key(key(KeyCode::Esc), Instant::now());
	assert_eq!(outcome.map(|outcome| outcome.accepted), Some(false));
}

#[test]
fn escape_in_the_widget_only_hides_results() {
	let mut app = App::new(colors());
	type_text(&mut app, "g");
	assert!(app.handle_key(key(KeyCode::Esc), Instant::now()).is_none());
	assert!(!app.widget().searcher().is_search_results_visible());
	assert_eq!(app.widget().searcher().input().value(), "g");
}

#[test]
fn blur_closes_results_after_the_grace_period() {
	let mut app = App::new(colors());
	let start = Instant::now();
	type_text(&mut app, "r");
	app.handle_key(key(KeyCode::Tab), start);

	assert_eq!(app.blur_deadline(), Some(start + BLUR_GRACE));
	app.tick(start);
	assert!(app.widget().searcher().is_search_results_visible());

	app.tick(start + BLUR_GRACE);
	assert!(!app.widget().searcher().is_search_results_visible());
	assert!(app.widget().searcher().input().is_empty());
	assert!(app.blur_deadline().is_none());
}

#[test]
fn refocusing_before_the_deadline_keeps_results_open() {
	let mut app = App::new(colors());
	let start = Instant::now();
	app.handle_key(key(KeyCode::Tab), start);
	app.handle_key(key(KeyCode::Tab), start);
	assert_eq!(app.focus(), Focus::Widget);

	app.tick(start + BLUR_GRACE);
	assert!(app.widget().searcher().is_search_results_visible());
}

#[test]
fn hover_and_click_on_results() {
	let mut terminal = terminal();
	let mut app = App::new(colors());
	draw(&mut terminal, &mut app);

	app.handle_mouse(mouse(MouseEventKind::Moved, results_row(&app, 2)));
	assert_eq!(app.widget().searcher().results().highlighted_index(), Some(2));

	let click = mouse(MouseEventKind::Down(MouseButton::Left), results_row(&app, 1));
	assert!(app.handle_mouse(click).is_none());
	assert_eq!(app.widget().selected_values(), vec!["g"]);
	assert!(!app.widget().searcher().is_search_results_visible());
}

#[test]
fn clicking_a_remove_icon_drops_the_option() {
	let mut terminal = terminal();
	let mut widget = colors();
	widget.set_selected_values(["g"]);
	let mut app = App::new(widget);
	let view = draw(&mut terminal, &mut app);
	assert!(view.contains(" Green X "));

	let (icon, id) = app.hits.remove_icons[0].clone();
	assert_eq!(id, EntryId::Value("g".into()));
	app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), icon));

	assert!(app.widget().selected_values().is_empty());
	assert!(app.widget().find_option_with_value("g").is_none());
}

#[test]
fn clicking_outside_closes_the_results() {
	let mut terminal = terminal();
	let mut app = App::new(colors());
	draw(&mut terminal, &mut app);
	assert!(app.widget().searcher().is_search_results_visible());

	app.handle_mouse(mouse(
		MouseEventKind::Down(MouseButton::Left),
		Rect::new(20, 15, 1, 1),
	));
	assert!(!app.widget().searcher().is_search_results_visible());
}

#[test]
fn clicking_done_accepts() {
	let mut terminal = terminal();
	let mut widget = colors();
	widget.set_selected_values(["b", "r"]);
	let mut app = App::new(widget);
	draw(&mut terminal, &mut app);

	let done = app.hits.done;
	let outcome = app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), done));
	assert_eq!(outcome.map(|outcome| outcome.values), Some(vec!["r".to_string(), "b".to_string()]));
}

#[test]
fn marked_phrase_chip_uses_the_marked_style() {
	let words = ["the", "fox"];
	let builder = PhraseBuilder::new(words, move |query: &SearchQuery, _: &[String]| {
		SearchResult::new(prefix_matches(words, query.text()))
	});
	let mut app = App::new(builder).with_theme(SLATE);
	app.handle_key(key(KeyCode::Backspace), Instant::now());
	assert!(app.widget().is_last_word_highlighted_for_removal());

	let mut terminal = terminal();
	let view = draw(&mut terminal, &mut app);
	assert!(view.contains(" the X "));
	assert!(view.contains(" fox X "));

	let icon = app.hits.remove_icons[1].0;
	let buffer = terminal.backend().buffer();
	assert_eq!(Some(buffer[(icon.x, icon.y)].bg), SLATE.chip_marked.bg);
	let first_icon = app.hits.remove_icons[0].0;
	assert_eq!(Some(buffer[(first_icon.x, first_icon.y)].bg), SLATE.chip.bg);
}

#[test]
fn chips_wrap_and_push_the_input_to_a_new_row() {
	let ids = [EntryId::Value("a".into()), EntryId::Value("b".into())];
	let chips = [
		Chip {
			id: &ids[0],
			value: "a",
			label: "alpha",
			marked: false,
		},
		Chip {
			id: &ids[1],
			value: "b",
			label: "beta",
			marked: false,
		},
	];

	let layout = layout_chips(&chips, "X", 12);
	let rows: Vec<_> = layout.chips.iter().map(|chip| (chip.row, chip.x, chip.icon_x)).collect();
	assert_eq!(rows, vec![(0, 0, 7), (1, 0, 6)]);
	assert_eq!((layout.input_row, layout.input_x, layout.rows), (2, 0, 3));

	let roomy = layout_chips(&chips, "X", 40);
	assert_eq!((roomy.input_row, roomy.input_x, roomy.rows), (0, 19, 1));
}

#[test]
fn short_terminal_rows_match_the_entries_they_hit() {
	let mut terminal = Terminal::new(TestBackend::new(40, 9)).expect("test terminal");
	let mut app = App::new(colors());
	for _ in 0..3 {
		app.handle_key(key(KeyCode::Down), Instant::now());
	}
	assert_eq!(app.widget().searcher().results().highlighted_index(), Some(2));
	draw(&mut terminal, &mut app);

	let results = app.hits.results.expect("results are drawn");
	let buffer = terminal.backend().buffer();
	for row in 0..results.height {
		let y = results.y + row;
		let text: String = (results.x..results.right())
			.map(|x| buffer[(x, y)].symbol())
			.collect();
		let index = app
			.widget()
			.searcher()
			.results()
			.entry_at_row(usize::from(row))
			.expect("an entry on every drawn row");
		let label = &app.widget().searcher().results().entries()[index].label;
		assert!(text.contains(label.as_str()), "row {row} shows {text:?}, hits {label}");
	}
}
