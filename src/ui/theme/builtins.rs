use ratatui::style::{Color, Style};

use super::types::{Theme, ThemeDefinition};

/// Blue-to-purple night palette.
pub const SLATE: Theme = Theme {
	title: Style::new().fg(Color::Rgb(241, 245, 249)),
	subtitle: Style::new().fg(Color::Rgb(148, 163, 184)),
	border: Style::new().fg(Color::Rgb(99, 102, 241)),
	button: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(34, 197, 94)),
	button_disabled: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(107, 114, 128)),
	chip: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(55, 48, 107)),
	chip_selected: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(59, 130, 246)),
	cell_focus: Style::new().bg(Color::Rgb(76, 29, 149)),
	muted: Style::new().fg(Color::Rgb(100, 116, 139)),
};

pub const LIGHT: Theme = Theme {
	title: Style::new().fg(Color::Rgb(15, 23, 42)),
	subtitle: Style::new().fg(Color::Rgb(71, 85, 105)),
	border: Style::new().fg(Color::Rgb(0, 102, 153)),
	button: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(22, 163, 74)),
	button_disabled: Style::new()
		.fg(Color::Rgb(71, 85, 105))
		.bg(Color::Rgb(203, 213, 225)),
	chip: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	chip_selected: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(37, 99, 235)),
	cell_focus: Style::new().bg(Color::Rgb(200, 200, 200)),
	muted: Style::new().fg(Color::Rgb(100, 100, 100)),
};

pub const SOLARIZED: Theme = Theme {
	title: Style::new().fg(Color::Rgb(253, 246, 227)),
	subtitle: Style::new().fg(Color::Rgb(147, 161, 161)),
	border: Style::new().fg(Color::Rgb(38, 139, 210)),
	button: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(133, 153, 0)),
	button_disabled: Style::new()
		.fg(Color::Rgb(147, 161, 161))
		.bg(Color::Rgb(7, 54, 66)),
	chip: Style::new()
		.fg(Color::Rgb(238, 232, 213))
		.bg(Color::Rgb(7, 54, 66)),
	chip_selected: Style::new()
		.fg(Color::Rgb(0, 43, 54))
		.bg(Color::Rgb(181, 137, 0)),
	cell_focus: Style::new().bg(Color::Rgb(0, 43, 54)),
	muted: Style::new().fg(Color::Rgb(88, 110, 117)),
};

pub(super) const DEFAULT_NAME: &str = "slate";

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition::new(DEFAULT_NAME, SLATE).with_aliases(&["dark", "default"]),
	ThemeDefinition::new("light", LIGHT),
	ThemeDefinition::new("solarized", SOLARIZED).with_aliases(&["solarized-dark"]),
];
