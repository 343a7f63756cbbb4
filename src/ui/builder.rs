use anyhow::Result;
use log::LevelFilter;

use super::App;
use super::config::UiConfig;
use super::outcome::PickerOutcome;
use super::theme::Theme;
use crate::catalog::Category;
use crate::logging;
use crate::picker::{ReactionPicker, SpinConfig};

/// Builder for the interactive reaction picker.
///
/// ```no_run
/// use reaction_picker::{Category, PickerUi};
///
/// let outcome = PickerUi::new()
///     .with_start_category(Category::Funny)
///     .run()?;
/// if let Some(emoji) = outcome.emoji {
///     println!("{emoji}");
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PickerUi {
	spin: SpinConfig,
	ui: UiConfig,
	theme: Option<Theme>,
	log_level: Option<LevelFilter>,
}

impl PickerUi {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_spin_config(mut self, spin: SpinConfig) -> Self {
		self.spin = spin;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	#[must_use]
	pub fn with_grid_columns(mut self, columns: u16) -> Self {
		self.ui.grid_columns = columns.max(1);
		self
	}

	#[must_use]
	pub fn with_start_category(mut self, category: Category) -> Self {
		self.ui.start_category = Some(category);
		self
	}

	/// Start a spin as soon as the picker opens.
	#[must_use]
	pub fn roll_on_start(mut self, roll: bool) -> Self {
		self.ui.roll_on_start = roll;
		self
	}

	#[must_use]
	pub fn show_logs(mut self, show: bool) -> Self {
		self.ui.show_logs = show;
		self
	}

	/// Route `log` records into the in-UI log pane at `level`.
	#[must_use]
	pub fn with_log_level(mut self, level: LevelFilter) -> Self {
		self.log_level = Some(level);
		self
	}

	/// Assemble the application without starting the terminal.
	#[must_use]
	pub fn build(self) -> App {
		let mut app = App::new(ReactionPicker::new(self.spin), self.ui);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app
	}

	/// Open the picker and block until the user accepts or cancels.
	pub fn run(self) -> Result<PickerOutcome> {
		if let Some(level) = self.log_level {
			logging::initialize(level);
		}
		let mut app = self.build();
		app.run()
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;
	use crate::ui::theme::LIGHT;

	#[test]
	fn builder_carries_options_into_app() {
		let spin = SpinConfig::new(Duration::from_millis(500), 10, Duration::from_millis(25))
			.expect("valid spin config");
		let app = PickerUi::new()
			.with_spin_config(spin)
			.with_theme(LIGHT)
			.with_grid_columns(0)
			.with_start_category(Category::Sad)
			.build();

		assert_eq!(app.theme, LIGHT);
		assert_eq!(app.ui.grid_columns, 1);
		assert_eq!(app.picker().spin_config(), spin);
		assert_eq!(app.picker().selected_category(), Some(Category::Sad));
		assert!(Category::Sad.emojis().contains(&app.picker().current()));
	}
}
