//! Static emoji data used by the picker.
//!
//! The full [`CATALOG`] is what random rolls and the "All Expressions" grid
//! draw from. Each [`Category`] owns its own fixed list; lists may share
//! entries with each other and with the catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PickerError;

/// A display symbol. The picker never looks inside it.
pub type Emoji = &'static str;

/// Shown before the user has picked or rolled anything.
pub const PLACEHOLDER: Emoji = "🎬";

/// Every expression offered by a random roll and the full grid, in display order.
pub const CATALOG: &[Emoji] = &[
	"😂", "😆", "😅", "🤣", "😊", "😎", "😍", "🥰", "😘", "😋", "🤔", "🧐", "😮", "😲", "😳",
	"🥺", "😢", "😭", "😠", "😡", "🤬", "🤢", "🤮", "😱", "😵", "🥴", "🤪", "😜", "🙄", "😬",
];

const HAPPY: &[Emoji] = &[
	"😀", "😃", "😄", "😁", "😆", "😅", "🤣", "😂", "🙂", "😊", "😇",
];
const LOVE: &[Emoji] = &[
	"😍", "🥰", "😘", "😗", "😙", "😚", "😻", "💘", "💝", "💖", "💗",
];
const SAD: &[Emoji] = &[
	"😢", "😭", "😞", "😔", "😟", "😕", "🙁", "☹️", "😣", "😖", "😫",
];
const ANGRY: &[Emoji] = &["😠", "😡", "🤬", "👿", "😤", "😾", "💢", "💥"];
const SURPRISED: &[Emoji] = &["😮", "😲", "😯", "😦", "😧", "😨", "😱", "🙀"];
const DISGUSTED: &[Emoji] = &["🤢", "🤮", "😖", "😫", "😩", "😤"];
const FUNNY: &[Emoji] = &["🤪", "😜", "😝", "😛", "😋", "🤣", "😂", "😹"];
const CONFUSED: &[Emoji] = &["🤔", "🧐", "😕", "😟", "🤨", "🙄", "😒", "😑"];

/// Named filter over a fixed emoji list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	Happy,
	Love,
	Sad,
	Angry,
	Surprised,
	Disgusted,
	Funny,
	Confused,
}

impl Category {
	/// All categories in chip order.
	pub const ALL: [Category; 8] = [
		Category::Happy,
		Category::Love,
		Category::Sad,
		Category::Angry,
		Category::Surprised,
		Category::Disgusted,
		Category::Funny,
		Category::Confused,
	];

	/// Identifier used on the command line and in configuration files.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Category::Happy => "happy",
			Category::Love => "love",
			Category::Sad => "sad",
			Category::Angry => "angry",
			Category::Surprised => "surprised",
			Category::Disgusted => "disgusted",
			Category::Funny => "funny",
			Category::Confused => "confused",
		}
	}

	/// Capitalized chip label.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Category::Happy => "Happy",
			Category::Love => "Love",
			Category::Sad => "Sad",
			Category::Angry => "Angry",
			Category::Surprised => "Surprised",
			Category::Disgusted => "Disgusted",
			Category::Funny => "Funny",
			Category::Confused => "Confused",
		}
	}

	#[must_use]
	pub fn emojis(self) -> &'static [Emoji] {
		match self {
			Category::Happy => HAPPY,
			Category::Love => LOVE,
			Category::Sad => SAD,
			Category::Angry => ANGRY,
			Category::Surprised => SURPRISED,
			Category::Disgusted => DISGUSTED,
			Category::Funny => FUNNY,
			Category::Confused => CONFUSED,
		}
	}

	/// Position of the category in [`Category::ALL`].
	#[must_use]
	pub fn index(self) -> usize {
		Self::ALL
			.iter()
			.position(|category| *category == self)
			.unwrap_or_default()
	}

	/// Look up a category by its zero-based chip position.
	#[must_use]
	pub fn from_index(index: usize) -> Option<Self> {
		Self::ALL.get(index).copied()
	}

	/// Comma separated list of every identifier, for error messages.
	#[must_use]
	pub fn expected_names() -> String {
		Self::ALL
			.iter()
			.map(|category| category.as_str())
			.collect::<Vec<_>>()
			.join(", ")
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Category {
	type Err = PickerError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized = value.trim().to_ascii_lowercase();
		Self::ALL
			.into_iter()
			.find(|category| category.as_str() == normalized)
			.ok_or_else(|| PickerError::UnknownCategory {
				name: value.to_string(),
				expected: Self::expected_names(),
			})
	}
}

/// The list random rolls and the full grid draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
	emojis: &'static [Emoji],
}

impl Catalog {
	/// Wrap a custom emoji list. The list must not be empty since a roll has
	/// to land somewhere.
	pub fn new(emojis: &'static [Emoji]) -> Result<Self, PickerError> {
		if emojis.is_empty() {
			return Err(PickerError::EmptyCatalog);
		}
		Ok(Self { emojis })
	}

	#[must_use]
	pub fn emojis(&self) -> &'static [Emoji] {
		self.emojis
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.emojis.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.emojis.is_empty()
	}

	#[must_use]
	pub fn contains(&self, emoji: &str) -> bool {
		self.emojis.contains(&emoji)
	}
}

impl Default for Catalog {
	fn default() -> Self {
		Self { emojis: CATALOG }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn catalog_has_thirty_expressions() {
		assert_eq!(CATALOG.len(), 30);
		assert_eq!(Catalog::default().len(), 30);
	}

	#[test]
	fn category_names_round_trip_through_parsing() {
		for category in Category::ALL {
			assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
		}
		assert_eq!(" Angry ".parse::<Category>().unwrap(), Category::Angry);
	}

	#[test]
	fn unknown_category_lists_valid_names() {
		let err = "sleepy".parse::<Category>().unwrap_err();
		let message = err.to_string();
		assert!(message.contains("sleepy"));
		assert!(message.contains("happy, love, sad"));
	}

	#[test]
	fn angry_category_matches_expected_faces() {
		assert_eq!(
			Category::Angry.emojis(),
			&["😠", "😡", "🤬", "👿", "😤", "😾", "💢", "💥"]
		);
	}

	#[test]
	fn categories_share_entries_with_each_other() {
		assert!(Category::Sad.emojis().contains(&"😖"));
		assert!(Category::Disgusted.emojis().contains(&"😖"));
	}

	#[test]
	fn index_lookup_matches_chip_order() {
		for (position, category) in Category::ALL.into_iter().enumerate() {
			assert_eq!(category.index(), position);
			assert_eq!(Category::from_index(position), Some(category));
		}
		assert_eq!(Category::from_index(8), None);
	}

	#[test]
	fn empty_catalog_is_rejected() {
		assert_eq!(Catalog::new(&[]), Err(PickerError::EmptyCatalog));
	}
}
