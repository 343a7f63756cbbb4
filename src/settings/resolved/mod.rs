use log::LevelFilter;
use reaction_picker::picker::SpinConfig;
use reaction_picker::{Category, Theme};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from CLI flags, environment
/// variables, config files and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub theme_name: String,
	pub theme: Theme,
	pub spin: SpinConfig,
	pub grid_columns: u16,
	pub start_category: Option<Category>,
	pub roll_on_start: bool,
	pub show_logs: bool,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
