mod builtins;
mod types;

pub use builtins::{LIGHT, SLATE, SOLARIZED};
pub use types::{Theme, ThemeDefinition};

use builtins::{BUILT_IN_DEFINITIONS, DEFAULT_NAME};

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Canonical names of the bundled themes, default first.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

#[must_use]
pub fn default_name() -> &'static str {
	DEFAULT_NAME
}

/// Look a theme up by name or alias, ignoring case and separators.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| {
			normalize_name(definition.name) == wanted
				|| definition
					.aliases
					.iter()
					.any(|alias| normalize_name(alias) == wanted)
		})
		.map(|definition| definition.theme)
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_ignores_case_and_separators() {
		assert_eq!(by_name("Light"), Some(LIGHT));
		assert_eq!(by_name("SOLARIZED_DARK"), Some(SOLARIZED));
		assert_eq!(by_name(" dark "), Some(SLATE));
		assert_eq!(by_name("neon"), None);
	}

	#[test]
	fn default_theme_is_listed_first() {
		assert_eq!(names().first(), Some(&default_name()));
		assert_eq!(by_name(default_name()), Some(default_theme()));
	}
}
