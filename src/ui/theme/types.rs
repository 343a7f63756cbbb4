use ratatui::style::{Color, Modifier, Style};

/// Colours for every part of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub title: Style,
	pub subtitle: Style,
	pub border: Style,
	pub button: Style,
	pub button_disabled: Style,
	pub chip: Style,
	pub chip_selected: Style,
	pub cell_focus: Style,
	pub muted: Style,
}

impl Theme {
	#[must_use]
	pub fn title_style(&self) -> Style {
		self.title.add_modifier(Modifier::BOLD)
	}

	#[must_use]
	pub fn subtitle_style(&self) -> Style {
		self.subtitle
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		self.border
	}

	/// Style of the roll button, greyed out while a spin runs.
	#[must_use]
	pub fn button_style(&self, spinning: bool) -> Style {
		if spinning {
			self.button_disabled
		} else {
			self.button.add_modifier(Modifier::BOLD)
		}
	}

	#[must_use]
	pub fn chip_style(&self, selected: bool) -> Style {
		if selected { self.chip_selected } else { self.chip }
	}

	#[must_use]
	pub fn cell_focus_style(&self) -> Style {
		self.cell_focus
	}

	#[must_use]
	pub fn muted_style(&self) -> Style {
		self.muted
	}

	#[must_use]
	pub fn accent(&self) -> Color {
		self.chip_selected.bg.unwrap_or(Color::Reset)
	}
}

/// A built-in theme with the names it answers to.
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
}
