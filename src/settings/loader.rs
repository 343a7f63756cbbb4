use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::{ConfigSources, ResolvedConfig};
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining config files, environment variables and
/// CLI arguments, in increasing order of precedence.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	let mut sources = ConfigSources::default();
	raw.apply_cli_overrides(cli, &mut sources);
	Ok(raw.resolve(&sources)?)
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::time::Duration;

	use clap::Parser;
	use log::LevelFilter;
	use reaction_picker::Category;
	use reaction_picker::ui::theme::SOLARIZED;
	use tempfile::tempdir;

	use super::*;

	fn cli(args: &[&str]) -> CliArgs {
		let mut argv = vec!["reaction-picker", "--no-config"];
		argv.extend_from_slice(args);
		CliArgs::try_parse_from(argv).expect("valid arguments")
	}

	#[test]
	fn defaults_apply_without_any_sources() {
		let resolved = load(&cli(&[])).expect("defaults resolve");
		assert_eq!(resolved.theme_name, "slate");
		assert_eq!(resolved.spin.duration(), Duration::from_millis(2000));
		assert_eq!(resolved.spin.preview_len(), 20);
		assert_eq!(resolved.grid_columns, 6);
		assert_eq!(resolved.start_category, None);
		assert_eq!(resolved.log_level, LevelFilter::Info);
	}

	#[test]
	fn config_file_values_are_loaded_and_cli_wins() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("picker.toml");
		fs::write(
			&path,
			r#"
[ui]
theme = "solarized"
grid_columns = 8
start_category = "angry"

[spin]
duration_ms = 1200
preview_len = 12

[logging]
level = "debug"
"#,
		)
		.unwrap();

		let path = path.to_string_lossy().to_string();
		let resolved = load(&cli(&["--config", &path, "--spin-ms", "900"])).expect("resolves");
		assert_eq!(resolved.theme, SOLARIZED);
		assert_eq!(resolved.grid_columns, 8);
		assert_eq!(resolved.start_category, Some(Category::Angry));
		assert_eq!(resolved.spin.duration(), Duration::from_millis(900));
		assert_eq!(resolved.spin.preview_len(), 12);
		assert_eq!(resolved.log_level, LevelFilter::Debug);
	}

	#[test]
	fn oversized_spin_duration_is_a_config_error() {
		let err = load(&cli(&["--spin-ms", "18446744073709551615", "--roll"])).unwrap_err();
		let message = err.to_string();
		assert!(message.contains("spin.duration_ms"), "{message}");
		assert!(message.contains("--spin-ms"), "{message}");
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("absent.toml");
		let path = path.to_string_lossy().to_string();
		assert!(load(&cli(&["--config", &path])).is_err());
	}

	#[test]
	fn invalid_cli_category_names_the_flag() {
		let err = load(&cli(&["--category", "sleepy"])).unwrap_err();
		let message = err.to_string();
		assert!(message.contains("ui.start_category"), "{message}");
		assert!(message.contains("--category"), "{message}");
	}
}
