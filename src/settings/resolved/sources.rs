use std::collections::HashMap;
use std::env;
use std::fmt;

use super::super::sources::env_var_for;

/// Where a configuration value came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(String),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// CLI flags that overrode configuration keys.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	flags: HashMap<&'static str, &'static str>,
}

impl ConfigSources {
	pub(crate) fn record(&mut self, key: &'static str, flag: &'static str) {
		self.flags.insert(key, flag);
	}

	/// CLI flag first, then a matching environment variable, then the file key.
	pub(crate) fn source_for(&self, key: &'static str) -> SettingSource {
		if let Some(flag) = self.flags.get(key) {
			return SettingSource::CliFlag(*flag);
		}
		let var = env_var_for(key);
		if env::var_os(&var).is_some() {
			return SettingSource::Environment(var);
		}
		SettingSource::ConfigKey(key)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn recorded_flag_wins() {
		let mut sources = ConfigSources::default();
		sources.record("spin.preview_len", "--preview-len");
		assert_eq!(
			sources.source_for("spin.preview_len"),
			SettingSource::CliFlag("--preview-len")
		);
	}

	#[test]
	fn unrecorded_key_points_at_the_file() {
		let sources = ConfigSources::default();
		assert_eq!(
			sources.source_for("spin.frame_interval_ms"),
			SettingSource::ConfigKey("spin.frame_interval_ms")
		);
	}
}
