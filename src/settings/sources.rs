use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};

use crate::cli::CliArgs;
use reaction_picker::app_dirs;

pub(super) const ENV_PREFIX: &str = "REACTION_PICKER";
pub(super) const ENV_SEPARATOR: &str = "__";

/// Build a [`Config`] from the default locations, explicit files and the
/// environment.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.separator(ENV_SEPARATOR)
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Default configuration file locations, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".reaction-picker.toml"));
		files.push(current_dir.join("reaction-picker.toml"));
	}

	files
}

/// Environment variable that overrides `key` (`spin.duration_ms` becomes
/// `REACTION_PICKER__SPIN__DURATION_MS`).
pub(super) fn env_var_for(key: &str) -> String {
	format!(
		"{ENV_PREFIX}{ENV_SEPARATOR}{}",
		key.replace('.', ENV_SEPARATOR).to_ascii_uppercase()
	)
}
