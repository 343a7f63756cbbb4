use super::{ConfigError, ConfigSources, ResolvedConfig};

const MAX_GRID_COLUMNS: u16 = 12;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if !(1..=MAX_GRID_COLUMNS).contains(&config.grid_columns) {
		return Err(ConfigError::invalid(
			"ui.grid_columns",
			config.grid_columns.to_string(),
			sources.source_for("ui.grid_columns"),
			format!("must be between 1 and {MAX_GRID_COLUMNS}"),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use log::LevelFilter;
	use reaction_picker::SpinConfig;
	use reaction_picker::ui::theme::SLATE;

	use super::super::SettingSource;
	use super::*;

	fn config(grid_columns: u16) -> ResolvedConfig {
		ResolvedConfig {
			theme_name: "slate".into(),
			theme: SLATE,
			spin: SpinConfig::default(),
			grid_columns,
			start_category: None,
			roll_on_start: false,
			show_logs: false,
			log_level: LevelFilter::Info,
		}
	}

	#[test]
	fn validation_rejects_zero_columns() {
		let mut sources = ConfigSources::default();
		sources.record("ui.grid_columns", "--grid-columns");

		let err = validate(&config(0), &sources).expect_err("zero columns");
		assert_eq!(err.key, "ui.grid_columns");
		assert_eq!(err.origin, SettingSource::CliFlag("--grid-columns"));
	}

	#[test]
	fn validation_rejects_too_many_columns() {
		let err = validate(&config(13), &ConfigSources::default()).expect_err("too wide");
		assert_eq!(err.value, "13");
	}

	#[test]
	fn validation_accepts_bounds() {
		assert!(validate(&config(1), &ConfigSources::default()).is_ok());
		assert!(validate(&config(12), &ConfigSources::default()).is_ok());
	}
}
