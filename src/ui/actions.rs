use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rand::Rng;
use tui_logger::TuiWidgetEvent;

use super::App;
use super::outcome::PickerOutcome;
use crate::catalog::Category;
use crate::picker::{Action, Clock};

impl<C: Clock, R: Rng> App<C, R> {
	/// Route a key press. Returns an outcome when the session should end.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<PickerOutcome> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Some(PickerOutcome::cancelled());
		}

		if self.show_logs && self.handle_logger_key(key) {
			return None;
		}

		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(PickerOutcome::cancelled()),
			KeyCode::Enter => return self.confirm(),
			KeyCode::Char('a') => return self.accept(),
			KeyCode::Char('r') | KeyCode::Char(' ') => {
				self.apply(Action::PickRandom);
			}
			KeyCode::Char('g') => {
				self.apply(Action::ToggleGrid);
			}
			KeyCode::Char('L') => {
				self.show_logs = !self.show_logs;
			}
			KeyCode::Char(digit @ '1'..='8') => {
				let index = digit as usize - '1' as usize;
				if let Some(category) = Category::from_index(index) {
					self.apply(Action::SelectCategory(category));
				}
			}
			KeyCode::Left | KeyCode::Char('h') => self.cursor.left(),
			KeyCode::Right | KeyCode::Char('l') => {
				let len = self.active_cells().len();
				self.cursor.right(len);
			}
			KeyCode::Up | KeyCode::Char('k') => {
				let columns = self.columns();
				self.cursor.up(columns);
			}
			KeyCode::Down | KeyCode::Char('j') => {
				let len = self.active_cells().len();
				let columns = self.columns();
				self.cursor.down(len, columns);
			}
			_ => {}
		}
		None
	}

	/// Enter picks the focused cell when it differs from the displayed emoji,
	/// otherwise accepts.
	fn confirm(&mut self) -> Option<PickerOutcome> {
		if let Some(emoji) = self.focused_emoji()
			&& emoji != self.picker.current()
		{
			self.apply(Action::PickFromGrid(emoji));
			return None;
		}
		self.accept()
	}

	/// Accept the displayed emoji. Not possible mid-spin.
	fn accept(&self) -> Option<PickerOutcome> {
		if self.picker.is_spinning() {
			return None;
		}
		Some(PickerOutcome::accepted(
			self.picker.current(),
			self.picker.selected_category(),
		))
	}

	fn handle_logger_key(&mut self, key: KeyEvent) -> bool {
		let event = match key.code {
			KeyCode::Char('+') => TuiWidgetEvent::PlusKey,
			KeyCode::Char('-') => TuiWidgetEvent::MinusKey,
			KeyCode::PageUp => TuiWidgetEvent::PrevPageKey,
			KeyCode::PageDown => TuiWidgetEvent::NextPageKey,
			_ => return false,
		};
		self.logger_state.transition(event);
		true
	}

	/// Route a mouse event through the regions recorded by the last draw.
	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return;
		}
		if let Some(action) = self.hits.action_at(mouse.column, mouse.row) {
			self.apply(action);
		}
	}
}
