use anyhow::Result;
use reaction_picker::{PickerOutcome, PickerUi};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive picker.
pub(crate) struct PickerWorkflow {
	picker_ui: PickerUi,
}

impl PickerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self {
			picker_ui: build_picker_ui(config),
		}
	}

	pub(crate) fn run(self) -> Result<PickerOutcome> {
		self.picker_ui.run()
	}
}

/// Translate resolved configuration into a configured [`PickerUi`].
fn build_picker_ui(config: ResolvedConfig) -> PickerUi {
	let ResolvedConfig {
		theme_name: _,
		theme,
		spin,
		grid_columns,
		start_category,
		roll_on_start,
		show_logs,
		log_level,
	} = config;

	let picker_ui = PickerUi::new()
		.with_theme(theme)
		.with_spin_config(spin)
		.with_grid_columns(grid_columns)
		.roll_on_start(roll_on_start)
		.show_logs(show_logs)
		.with_log_level(log_level);

	match start_category {
		Some(category) => picker_ui.with_start_category(category),
		None => picker_ui,
	}
}

#[cfg(test)]
mod tests {
	use log::LevelFilter;
	use reaction_picker::Category;
	use reaction_picker::picker::SpinConfig;
	use reaction_picker::ui::theme::SOLARIZED;

	use super::*;

	#[test]
	fn resolved_settings_reach_the_app() {
		let config = ResolvedConfig {
			theme_name: "solarized".into(),
			theme: SOLARIZED,
			spin: SpinConfig::default(),
			grid_columns: 5,
			start_category: Some(Category::Angry),
			roll_on_start: false,
			show_logs: false,
			log_level: LevelFilter::Info,
		};

		let app = build_picker_ui(config).build();
		assert_eq!(app.theme, SOLARIZED);
		assert_eq!(app.picker().selected_category(), Some(Category::Angry));
	}
}
