use ratatui::style::{Color, Modifier, Style};

use super::{Theme, ThemeDefinition};

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	prompt: Style::new().fg(Color::LightCyan),
	chip: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(51, 65, 85)),
	chip_marked: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(250, 204, 21)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	chip: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(203, 213, 225)),
	chip_marked: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(120, 120, 0)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
};

pub const SOLARIZED: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(7, 54, 66)),
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	chip: Style::new()
		.fg(Color::Rgb(238, 232, 213))
		.bg(Color::Rgb(7, 54, 66)),
	chip_marked: Style::new()
		.fg(Color::Rgb(0, 43, 54))
		.bg(Color::Rgb(203, 75, 22)),
	row_highlight: Style::new()
		.bg(Color::Rgb(0, 43, 54))
		.fg(Color::Rgb(181, 137, 0)),
	empty: Style::new().fg(Color::Rgb(88, 110, 117)),
	highlight: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
};

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition::new("light", LIGHT),
	ThemeDefinition::new("slate", SLATE).with_aliases(&["dark", "default"]),
	ThemeDefinition::new("solarized", SOLARIZED).with_aliases(&["solarised"]),
];
