use serde::Serialize;

use crate::catalog::{Category, Emoji};

/// Result of an interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PickerOutcome {
	pub accepted: bool,
	pub emoji: Option<Emoji>,
	pub category: Option<Category>,
}

impl PickerOutcome {
	#[must_use]
	pub fn accepted(emoji: Emoji, category: Option<Category>) -> Self {
		Self {
			accepted: true,
			emoji: Some(emoji),
			category,
		}
	}

	#[must_use]
	pub fn cancelled() -> Self {
		Self {
			accepted: false,
			emoji: None,
			category: None,
		}
	}
}
