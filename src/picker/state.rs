use crate::catalog::{Category, Emoji, PLACEHOLDER};

/// What the widget currently shows and which filters are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
	pub current: Emoji,
	pub selected_category: Option<Category>,
	pub show_all_visible: bool,
}

impl Default for SelectionState {
	fn default() -> Self {
		Self {
			current: PLACEHOLDER,
			selected_category: None,
			show_all_visible: false,
		}
	}
}
