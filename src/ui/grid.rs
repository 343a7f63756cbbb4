use crate::catalog::{Category, Emoji};

pub const DEFAULT_GRID_COLUMNS: u16 = 6;

/// Which emoji grid a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKind {
	/// "All Expressions", shown after clicking the big emoji.
	Full,
	/// "<Category> Expressions", shown while a category is selected.
	Category(Category),
}

/// Keyboard focus inside the active grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCursor {
	index: usize,
}

impl GridCursor {
	#[must_use]
	pub fn index(&self) -> usize {
		self.index
	}

	pub fn reset(&mut self) {
		self.index = 0;
	}

	/// Keep the cursor inside a grid of `len` cells.
	pub fn clamp(&mut self, len: usize) {
		if len == 0 {
			self.index = 0;
		} else if self.index >= len {
			self.index = len - 1;
		}
	}

	pub fn left(&mut self) {
		self.index = self.index.saturating_sub(1);
	}

	pub fn right(&mut self, len: usize) {
		if self.index + 1 < len {
			self.index += 1;
		}
	}

	pub fn up(&mut self, columns: usize) {
		if self.index >= columns {
			self.index -= columns;
		}
	}

	pub fn down(&mut self, len: usize, columns: usize) {
		if self.index + columns < len {
			self.index += columns;
		}
	}
}

/// Emoji shown by a grid.
#[must_use]
pub fn cells(kind: GridKind, catalog: &'static [Emoji]) -> &'static [Emoji] {
	match kind {
		GridKind::Full => catalog,
		GridKind::Category(category) => category.emojis(),
	}
}

/// Grid title as shown above its cells.
#[must_use]
pub fn title(kind: GridKind) -> String {
	match kind {
		GridKind::Full => "All Expressions:".to_string(),
		GridKind::Category(category) => format!("{} Expressions:", category.label()),
	}
}

/// Number of rows needed for `len` cells.
#[must_use]
pub fn rows_for(len: usize, columns: u16) -> u16 {
	let columns = usize::from(columns.max(1));
	len.div_ceil(columns) as u16
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cursor_stays_inside_grid() {
		let mut cursor = GridCursor::default();
		cursor.left();
		cursor.up(6);
		assert_eq!(cursor.index(), 0);

		cursor.down(8, 6);
		assert_eq!(cursor.index(), 6);
		cursor.down(8, 6);
		assert_eq!(cursor.index(), 6);
		cursor.right(8);
		cursor.right(8);
		assert_eq!(cursor.index(), 7);
		cursor.up(6);
		assert_eq!(cursor.index(), 1);
	}

	#[test]
	fn clamp_pulls_cursor_back_into_shorter_grid() {
		let mut cursor = GridCursor::default();
		for _ in 0..20 {
			cursor.right(30);
		}
		cursor.clamp(6);
		assert_eq!(cursor.index(), 5);
		cursor.clamp(0);
		assert_eq!(cursor.index(), 0);
	}

	#[test]
	fn titles_follow_category_label() {
		assert_eq!(title(GridKind::Full), "All Expressions:");
		assert_eq!(
			title(GridKind::Category(Category::Surprised)),
			"Surprised Expressions:"
		);
	}

	#[test]
	fn rows_round_up() {
		assert_eq!(rows_for(30, 6), 5);
		assert_eq!(rows_for(11, 6), 2);
		assert_eq!(rows_for(6, 6), 1);
	}
}
