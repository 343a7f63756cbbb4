use crate::catalog::Category;

use super::grid::DEFAULT_GRID_COLUMNS;

/// Presentation options that do not affect picker semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub grid_columns: u16,
	pub start_category: Option<Category>,
	pub roll_on_start: bool,
	pub show_logs: bool,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			grid_columns: DEFAULT_GRID_COLUMNS,
			start_category: None,
			roll_on_start: false,
			show_logs: false,
		}
	}
}
