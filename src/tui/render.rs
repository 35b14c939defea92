use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::app::{App, Focus, HitMap};
use super::surface::WidgetSurface;
use super::theme::Theme;
use crate::searcher::{EntryKind, ResultList};
use crate::selection::EntryId;
use crate::widgets::Chip;

/// Narrowest input that still shares a row with chips.
const INPUT_MIN_WIDTH: u16 = 10;
const DONE_LABEL: &str = "[ Done ]";
const HINT: &str = "Tab: switch focus  Enter: choose  Ctrl+C: cancel";

/// Where one chip lands inside the widget box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChipPlacement {
	pub(crate) id: EntryId,
	pub(crate) row: u16,
	pub(crate) x: u16,
	pub(crate) icon_x: u16,
	pub(crate) icon_width: u16,
}

/// Chips flowed left to right and wrapped, followed by the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChipLayout {
	pub(crate) chips: Vec<ChipPlacement>,
	pub(crate) input_row: u16,
	pub(crate) input_x: u16,
	pub(crate) rows: u16,
}

fn text_width(text: &str) -> u16 {
	u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// A chip reads ` label icon ` and chips are one column apart.
pub(crate) fn layout_chips(chips: &[Chip<'_>], icon: &str, width: u16) -> ChipLayout {
	let icon_width = text_width(icon);
	let mut placements = Vec::with_capacity(chips.len());
	let (mut x, mut row) = (0u16, 0u16);

	for chip in chips {
		let label_width = text_width(chip.label);
		let chip_width = label_width.saturating_add(icon_width).saturating_add(3);
		if x > 0 && x.saturating_add(chip_width) > width {
			row += 1;
			x = 0;
		}
		placements.push(ChipPlacement {
			id: chip.id.clone(),
			row,
			x,
			icon_x: x.saturating_add(label_width).saturating_add(2),
			icon_width,
		});
		x = x.saturating_add(chip_width).saturating_add(1);
	}

	if x > 0 && x.saturating_add(INPUT_MIN_WIDTH.min(width)) > width {
		row += 1;
		x = 0;
	}

	ChipLayout {
		chips: placements,
		input_row: row,
		input_x: x,
		rows: row + 1,
	}
}

impl<W: WidgetSurface> App<W> {
	/// Draw the title, the chip box, the open results and the footer.
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let theme = self.theme;
		let widget_focused = self.focus == Focus::Widget;

		let inner_width = area.width.saturating_sub(2);
		let chips = self.widget.chips();
		let layout = layout_chips(&chips, self.widget.remove_icon(), inner_width);

		let searcher = self.widget.searcher();
		let results = searcher.results();
		let results_height = if searcher.is_search_results_visible() {
			u16::try_from(results.visible_rows()).unwrap_or(u16::MAX).saturating_add(2)
		} else {
			0
		};

		let [title_area, box_area, results_area, _, footer_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(layout.rows.saturating_add(2)),
			Constraint::Length(results_height),
			Constraint::Min(0),
			Constraint::Length(1),
		])
		.areas(area);

		frame.render_widget(
			Paragraph::new(Line::from(self.title.as_str())).style(theme.header),
			title_area,
		);

		let block = Block::bordered().border_style(theme.border_style(widget_focused));
		let box_inner = block.inner(box_area);
		frame.render_widget(block, box_area);

		let input = searcher.input();
		let input_span = match (input.is_empty(), self.widget.placeholder()) {
			(true, Some(placeholder)) => Span::styled(placeholder.to_string(), theme.empty),
			_ => Span::styled(input.value().to_string(), theme.prompt),
		};
		let lines = chip_lines(&chips, &layout, self.widget.remove_icon(), input_span, &theme);
		frame.render_widget(Paragraph::new(lines), box_inner);

		if widget_focused {
			let column = u16::try_from(input.cursor_column()).unwrap_or(u16::MAX);
			let x = box_inner
				.x
				.saturating_add(layout.input_x)
				.saturating_add(column)
				.min(box_inner.right().saturating_sub(1));
			frame.set_cursor_position(Position::new(x, box_inner.y + layout.input_row));
		}

		let results_inner = (results_height > 0).then(|| {
			let block = Block::bordered().border_style(theme.border_style(false));
			let inner = block.inner(results_area);
			frame.render_widget(block, results_area);
			render_results(frame, inner, results, &theme);
			inner
		});

		let [hint_area, done_area] =
			Layout::horizontal([Constraint::Min(0), Constraint::Length(text_width(DONE_LABEL))])
				.areas(footer_area);
		frame.render_widget(Paragraph::new(HINT).style(theme.empty), hint_area);
		frame.render_widget(
			Paragraph::new(DONE_LABEL).style(theme.button_style(self.focus == Focus::Done)),
			done_area,
		);

		let remove_icons = layout
			.chips
			.iter()
			.map(|chip| {
				let rect = Rect::new(
					box_inner.x.saturating_add(chip.icon_x),
					box_inner.y.saturating_add(chip.row),
					chip.icon_width,
					1,
				);
				(rect.intersection(box_inner), chip.id.clone())
			})
			.collect();

		self.hits = HitMap {
			widget: box_area,
			results: results_inner,
			done: done_area,
			remove_icons,
		};
	}
}

fn chip_lines(
	chips: &[Chip<'_>],
	layout: &ChipLayout,
	icon: &str,
	input: Span<'static>,
	theme: &Theme,
) -> Vec<Line<'static>> {
	let mut rows: Vec<(u16, Vec<Span<'static>>)> = vec![(0, Vec::new()); usize::from(layout.rows)];

	let pad_to = |row: &mut (u16, Vec<Span<'static>>), x: u16| {
		if row.0 < x {
			row.1.push(Span::raw(" ".repeat(usize::from(x - row.0))));
			row.0 = x;
		}
	};

	for (chip, placement) in chips.iter().zip(&layout.chips) {
		let row = &mut rows[usize::from(placement.row)];
		pad_to(row, placement.x);
		let style = theme.chip_style(chip.marked);
		let label = format!(" {} ", chip.label);
		row.0 = row.0.saturating_add(text_width(&label));
		row.1.push(Span::styled(label, style));
		row.1.push(Span::styled(icon.to_string(), style.patch(theme.highlight)));
		row.1.push(Span::styled(" ", style));
		row.0 = row.0.saturating_add(placement.icon_width).saturating_add(1);
	}

	let row = &mut rows[usize::from(layout.input_row)];
	pad_to(row, layout.input_x);
	row.1.push(input);

	rows.into_iter().map(|(_, spans)| Line::from(spans)).collect()
}

fn render_results(frame: &mut Frame, area: Rect, results: &ResultList, theme: &Theme) {
	// Only the rows that fit, so the list never scrolls on its own and row
	// `n` stays the entry `entry_at_row(n)` reports.
	let rows = usize::from(area.height);
	let items: Vec<ListItem> = results
		.visible_entries()
		.take(rows)
		.map(|(_, entry)| {
			let style = match entry.kind {
				EntryKind::Candidate => Style::default(),
				EntryKind::CustomAdd => theme.prompt.add_modifier(Modifier::ITALIC),
				EntryKind::NoResults | EntryKind::TooManyResults => theme.empty,
			};
			ListItem::new(Line::styled(entry.label.clone(), style))
		})
		.collect();

	let selected = results
		.highlighted_index()
		.and_then(|index| index.checked_sub(results.offset()))
		.filter(|row| *row < rows);
	let mut state = ListState::default().with_selected(selected);
	frame.render_stateful_widget(
		List::new(items).highlight_style(theme.row_highlight),
		area,
		&mut state,
	);
}
