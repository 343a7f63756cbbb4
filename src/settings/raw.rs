use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use serde::Deserialize;

use reaction_picker::picker::{
	DEFAULT_FRAME_INTERVAL, DEFAULT_PREVIEW_LEN, DEFAULT_SPIN_DURATION, SpinConfig,
};
use reaction_picker::ui::grid::DEFAULT_GRID_COLUMNS;
use reaction_picker::ui::theme;
use reaction_picker::{Category, PickerError};

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig};
use crate::cli::CliArgs;

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	spin: SpinSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	grid_columns: Option<u16>,
	start_category: Option<String>,
	roll_on_start: Option<bool>,
	show_logs: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SpinSection {
	duration_ms: Option<u64>,
	preview_len: Option<usize>,
	frame_interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the file and environment values,
	/// remembering which flag supplied each one.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs, sources: &mut ConfigSources) {
		if let Some(name) = cli.theme.clone() {
			self.ui.theme = Some(name);
			sources.record("ui.theme", "--theme");
		}
		if let Some(columns) = cli.grid_columns {
			self.ui.grid_columns = Some(columns);
			sources.record("ui.grid_columns", "--grid-columns");
		}
		if let Some(category) = cli.category.clone() {
			self.ui.start_category = Some(category);
			sources.record("ui.start_category", "--category");
		}
		if cli.roll {
			self.ui.roll_on_start = Some(true);
			sources.record("ui.roll_on_start", "--roll");
		}
		if cli.logs {
			self.ui.show_logs = Some(true);
			sources.record("ui.show_logs", "--logs");
		}
		if let Some(ms) = cli.spin_ms {
			self.spin.duration_ms = Some(ms);
			sources.record("spin.duration_ms", "--spin-ms");
		}
		if let Some(len) = cli.preview_len {
			self.spin.preview_len = Some(len);
			sources.record("spin.preview_len", "--preview-len");
		}
		if let Some(ms) = cli.frame_ms {
			self.spin.frame_interval_ms = Some(ms);
			sources.record("spin.frame_interval_ms", "--frame-ms");
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
			sources.record("logging.level", "--log-level");
		}
	}

	/// Turn raw values into a validated [`ResolvedConfig`].
	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<ResolvedConfig, ConfigError> {
		let theme_name = self
			.ui
			.theme
			.unwrap_or_else(|| theme::default_name().to_string());
		let Some(resolved_theme) = theme::by_name(&theme_name) else {
			return Err(ConfigError::invalid(
				"ui.theme",
				theme_name,
				sources.source_for("ui.theme"),
				format!("expected one of: {}", theme::names().join(", ")),
			));
		};

		let start_category = match self.ui.start_category {
			Some(name) => Some(Category::from_str(&name).map_err(|err| {
				ConfigError::invalid(
					"ui.start_category",
					name.clone(),
					sources.source_for("ui.start_category"),
					err.to_string(),
				)
			})?),
			None => None,
		};

		let spin = resolve_spin(&self.spin, sources)?;

		let level_text = self.logging.level.unwrap_or_else(|| "info".to_string());
		let log_level = LevelFilter::from_str(level_text.trim()).map_err(|_| {
			ConfigError::invalid(
				"logging.level",
				level_text.clone(),
				sources.source_for("logging.level"),
				"expected one of: off, error, warn, info, debug, trace",
			)
		})?;

		let config = ResolvedConfig {
			theme_name,
			theme: resolved_theme,
			spin,
			grid_columns: self.ui.grid_columns.unwrap_or(DEFAULT_GRID_COLUMNS),
			start_category,
			roll_on_start: self.ui.roll_on_start.unwrap_or(false),
			show_logs: self.ui.show_logs.unwrap_or(false),
			log_level,
		};
		config.validate(sources)?;
		Ok(config)
	}
}

fn resolve_spin(section: &SpinSection, sources: &ConfigSources) -> Result<SpinConfig, ConfigError> {
	let duration = section
		.duration_ms
		.map_or(DEFAULT_SPIN_DURATION, Duration::from_millis);
	let preview_len = section.preview_len.unwrap_or(DEFAULT_PREVIEW_LEN);
	let frame_interval = section
		.frame_interval_ms
		.map_or(DEFAULT_FRAME_INTERVAL, Duration::from_millis);

	SpinConfig::new(duration, preview_len, frame_interval).map_err(|err| {
		let (key, value) = match &err {
			PickerError::InvalidSpinConfig(reason) if reason.starts_with("preview") => {
				("spin.preview_len", preview_len.to_string())
			}
			PickerError::InvalidSpinConfig(reason) if reason.starts_with("frame") => (
				"spin.frame_interval_ms",
				frame_interval.as_millis().to_string(),
			),
			_ => ("spin.duration_ms", duration.as_millis().to_string()),
		};
		ConfigError::invalid(key, value, sources.source_for(key), err.to_string())
	})
}
