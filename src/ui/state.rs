use log::LevelFilter;
use rand::Rng;
use rand::rngs::StdRng;
use throbber_widgets_tui::ThrobberState;
use tui_logger::TuiWidgetState;

use super::config::UiConfig;
use super::grid::{self, GridCursor, GridKind};
use super::render::HitMap;
use super::theme::Theme;
use crate::catalog::Emoji;
use crate::picker::{Action, Clock, Dispatch, ReactionPicker, SystemClock};

/// Interactive picker: the state machine plus everything the terminal view
/// needs to draw it and route input back to it.
pub struct App<C: Clock = SystemClock, R: Rng = StdRng> {
	pub(crate) picker: ReactionPicker<C, R>,
	pub theme: Theme,
	pub(crate) ui: UiConfig,
	pub(crate) cursor: GridCursor,
	cursor_grid: Option<GridKind>,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) hits: HitMap,
	pub(crate) show_logs: bool,
	pub(crate) logger_state: TuiWidgetState,
}

impl<C: Clock, R: Rng> App<C, R> {
	pub fn new(picker: ReactionPicker<C, R>, ui: UiConfig) -> Self {
		let show_logs = ui.show_logs;
		let mut app = Self {
			picker,
			theme: Theme::default(),
			ui,
			cursor: GridCursor::default(),
			cursor_grid: None,
			throbber_state: ThrobberState::default(),
			hits: HitMap::default(),
			show_logs,
			logger_state: TuiWidgetState::new().set_default_display_level(LevelFilter::Debug),
		};
		if let Some(category) = app.ui.start_category {
			app.apply(Action::SelectCategory(category));
		}
		if app.ui.roll_on_start {
			app.apply(Action::PickRandom);
		}
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	#[must_use]
	pub fn picker(&self) -> &ReactionPicker<C, R> {
		&self.picker
	}

	/// Run an action against the picker and keep the grid cursor in sync.
	pub fn apply(&mut self, action: Action) -> Dispatch {
		let outcome = self.picker.dispatch(action);
		self.sync_cursor();
		outcome
	}

	/// Advance time-driven state: spin completion and the throbber.
	pub(crate) fn on_tick(&mut self) {
		if self.picker.is_spinning() {
			self.throbber_state.calc_next();
		}
		if self.picker.tick().is_some() {
			self.sync_cursor();
		}
	}

	/// Grid the cursor operates on. The full grid wins when both are shown.
	#[must_use]
	pub fn active_grid(&self) -> Option<GridKind> {
		if self.picker.show_all_visible() {
			Some(GridKind::Full)
		} else {
			self.picker.selected_category().map(GridKind::Category)
		}
	}

	pub(crate) fn active_cells(&self) -> &'static [Emoji] {
		match self.active_grid() {
			Some(kind) => grid::cells(kind, self.picker.catalog().emojis()),
			None => &[],
		}
	}

	pub(crate) fn focused_emoji(&self) -> Option<Emoji> {
		self.active_cells().get(self.cursor.index()).copied()
	}

	pub(crate) fn columns(&self) -> usize {
		usize::from(self.ui.grid_columns.max(1))
	}

	fn sync_cursor(&mut self) {
		let active = self.active_grid();
		if active != self.cursor_grid {
			self.cursor.reset();
			self.cursor_grid = active;
		}
		let len = self.active_cells().len();
		self.cursor.clamp(len);
	}
}
