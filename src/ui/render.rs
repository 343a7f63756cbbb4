use rand::Rng;
use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Layout, Position, Rect},
	style::{Modifier, Style},
	text::Line,
	widgets::{Block, BorderType, Clear, Paragraph, Wrap},
};
use throbber_widgets_tui::{BRAILLE_SIX, Throbber};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerSmartWidget};
use unicode_width::UnicodeWidthStr;

use super::App;
use super::grid::{self, GridKind};
use crate::catalog::{Category, Emoji};
use crate::picker::{Action, Clock};

const PANEL_WIDTH: u16 = 52;
const HEADER_HEIGHT: u16 = 2;
const DISPLAY_HEIGHT: u16 = 5;
const BUTTON_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 2;
const LOG_PANE_HEIGHT: u16 = 12;
const CHIP_GAP: u16 = 1;

const TITLE: &str = "Reaction Emoji Selector";
const SUBTITLE: &str = "Pick an expression for your reaction videos!";
const HELP: &str = "Click the big emoji to show all options, or use the category chips to filter expressions.";
const KEYS: &str = "r roll · 1-8 chips · g grid · enter pick · a accept · L logs · q quit";

/// Screen regions from the last draw, used to turn clicks into actions.
#[derive(Debug, Default, Clone)]
pub(crate) struct HitMap {
	pub(crate) display: Rect,
	pub(crate) button: Rect,
	pub(crate) chips: Vec<(Category, Rect)>,
	pub(crate) cells: Vec<(Emoji, Rect)>,
}

impl HitMap {
	pub(crate) fn action_at(&self, column: u16, row: u16) -> Option<Action> {
		let position = Position::new(column, row);
		if self.button.contains(position) {
			return Some(Action::PickRandom);
		}
		if self.display.contains(position) {
			return Some(Action::ToggleGrid);
		}
		if let Some((category, _)) = self.chips.iter().find(|(_, rect)| rect.contains(position)) {
			return Some(Action::SelectCategory(*category));
		}
		self.cells
			.iter()
			.find(|(_, rect)| rect.contains(position))
			.map(|(emoji, _)| Action::PickFromGrid(*emoji))
	}
}

fn chip_label(category: Category) -> String {
	format!(" {} {} ", category.index() + 1, category.label())
}

/// Place chips left to right, wrapping at `width`. Each row is centred.
/// Returns `(category, x offset, row, width)` per chip and the row count.
fn chip_positions(width: u16) -> (Vec<(Category, u16, u16, u16)>, u16) {
	let mut rows: Vec<Vec<(Category, u16)>> = vec![Vec::new()];
	let mut used = 0u16;
	for category in Category::ALL {
		let chip_width = chip_label(category).width() as u16;
		let needed = if used == 0 { chip_width } else { used + CHIP_GAP + chip_width };
		if used > 0 && needed > width {
			rows.push(Vec::new());
			used = chip_width;
		} else {
			used = needed;
		}
		if let Some(row) = rows.last_mut() {
			row.push((category, chip_width));
		}
	}

	let mut positions = Vec::new();
	for (row_index, row) in rows.iter().enumerate() {
		let row_width: u16 = row.iter().map(|(_, chip_width)| chip_width).sum::<u16>()
			+ CHIP_GAP * row.len().saturating_sub(1) as u16;
		let mut x = width.saturating_sub(row_width) / 2;
		for (category, chip_width) in row {
			positions.push((*category, x, row_index as u16, *chip_width));
			x += chip_width + CHIP_GAP;
		}
	}
	(positions, rows.len() as u16)
}

fn centered_column(area: Rect, width: u16) -> Rect {
	let width = width.min(area.width);
	Rect {
		x: area.x + (area.width - width) / 2,
		width,
		..area
	}
}

impl<C: Clock, R: Rng> App<C, R> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let mut hits = HitMap::default();
		let area = frame.area();
		let (main, log_area) = if self.show_logs {
			let [main, logs] =
				Layout::vertical([Constraint::Min(0), Constraint::Length(LOG_PANE_HEIGHT)])
					.areas(area);
			(main, Some(logs))
		} else {
			(area, None)
		};

		let panel = centered_column(main, PANEL_WIDTH);
		let (_, chip_rows) = chip_positions(panel.width);
		let columns = self.ui.grid_columns.max(1);
		let grids = self.visible_grids();

		let mut constraints = vec![
			Constraint::Length(HEADER_HEIGHT),
			Constraint::Length(1),
			Constraint::Length(DISPLAY_HEIGHT),
			Constraint::Length(BUTTON_HEIGHT),
			Constraint::Length(chip_rows),
		];
		for kind in &grids {
			let len = grid::cells(*kind, self.picker.catalog().emojis()).len();
			constraints.push(Constraint::Length(grid::rows_for(len, columns) + 2));
		}
		constraints.push(Constraint::Min(0));
		constraints.push(Constraint::Length(FOOTER_HEIGHT));
		let layout = Layout::vertical(constraints).split(panel);

		self.render_header(frame, layout[0]);
		hits.display = layout[2];
		self.render_display(frame, layout[2]);
		hits.button = layout[3];
		self.render_button(frame, layout[3]);
		self.render_chips(frame, layout[4], &mut hits);
		for (offset, kind) in grids.iter().enumerate() {
			self.render_grid(frame, layout[5 + offset], *kind, &mut hits);
		}
		self.render_footer(frame, layout[layout.len() - 1]);

		if let Some(log_area) = log_area {
			self.render_logs(frame, log_area);
		}

		self.hits = hits;
	}

	/// Grids on screen, full grid first.
	fn visible_grids(&self) -> Vec<GridKind> {
		let mut grids = Vec::new();
		if self.picker.show_all_visible() {
			grids.push(GridKind::Full);
		}
		if let Some(category) = self.picker.selected_category() {
			grids.push(GridKind::Category(category));
		}
		grids
	}

	fn render_header(&self, frame: &mut Frame, area: Rect) {
		let lines = vec![
			Line::styled(TITLE, self.theme.title_style()),
			Line::styled(SUBTITLE, self.theme.subtitle_style()),
		];
		frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
	}

	fn render_display(&self, frame: &mut Frame, area: Rect) {
		let spinning = self.picker.is_spinning();
		let title = match self.picker.spin_remaining() {
			Some(remaining) => format!(" Spinning {:.1}s ", remaining.as_secs_f32()),
			None => " Reaction ".to_string(),
		};
		let mut block = Block::bordered()
			.border_type(BorderType::Rounded)
			.border_style(self.theme.border_style())
			.title(title)
			.title_alignment(Alignment::Center);
		if !spinning {
			block = block.title_bottom(
				Line::styled(" click or g: all ", self.theme.muted_style()).right_aligned(),
			);
		}
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let emphasis = Style::new().add_modifier(Modifier::BOLD);
		let lines = match self.picker.reel_window() {
			Some([previous, current, next]) => vec![
				Line::styled(previous, self.theme.muted_style()),
				Line::styled(current, emphasis.bg(self.theme.accent())),
				Line::styled(next, self.theme.muted_style()),
			],
			None => vec![
				Line::default(),
				Line::styled(self.picker.current(), emphasis),
				Line::default(),
			],
		};
		frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
	}

	fn render_button(&mut self, frame: &mut Frame, area: Rect) {
		let spinning = self.picker.is_spinning();
		let style = self.theme.button_style(spinning);
		let block = Block::bordered()
			.border_type(BorderType::Rounded)
			.border_style(self.theme.border_style());
		let inner = block.inner(area);
		frame.render_widget(block, area);
		frame.render_widget(Block::new().style(style), inner);

		if spinning {
			let label = "Spinning...";
			let width = (label.width() as u16 + 2).min(inner.width);
			let throbber_area = Rect {
				x: inner.x + (inner.width - width) / 2,
				width,
				..inner
			};
			let throbber = Throbber::default()
				.label(label)
				.style(style)
				.throbber_style(style)
				.throbber_set(BRAILLE_SIX);
			frame.render_stateful_widget(throbber, throbber_area, &mut self.throbber_state);
		} else {
			let paragraph = Paragraph::new("Random Expression  [r]")
				.alignment(Alignment::Center)
				.style(style);
			frame.render_widget(paragraph, inner);
		}
	}

	fn render_chips(&self, frame: &mut Frame, area: Rect, hits: &mut HitMap) {
		let (positions, _) = chip_positions(area.width);
		let selected = self.picker.selected_category();
		for (category, x, row, width) in positions {
			if row >= area.height {
				continue;
			}
			let rect = Rect::new(area.x + x, area.y + row, width, 1).intersection(area);
			let style = self.theme.chip_style(selected == Some(category));
			frame.render_widget(Paragraph::new(chip_label(category)).style(style), rect);
			hits.chips.push((category, rect));
		}
	}

	fn render_grid(&self, frame: &mut Frame, area: Rect, kind: GridKind, hits: &mut HitMap) {
		let block = Block::bordered()
			.border_type(BorderType::Rounded)
			.border_style(self.theme.border_style())
			.title(grid::title(kind));
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let columns = self.ui.grid_columns.max(1);
		let cell_width = inner.width / columns;
		if cell_width == 0 {
			return;
		}
		let focused = (self.active_grid() == Some(kind)).then(|| self.cursor.index());
		let cells = grid::cells(kind, self.picker.catalog().emojis());
		for (index, emoji) in cells.iter().enumerate() {
			let row = (index / usize::from(columns)) as u16;
			let column = (index % usize::from(columns)) as u16;
			if row >= inner.height {
				break;
			}
			let rect = Rect::new(
				inner.x + column * cell_width,
				inner.y + row,
				cell_width,
				1,
			);
			let style = if focused == Some(index) {
				self.theme.cell_focus_style()
			} else {
				Style::new()
			};
			frame.render_widget(
				Paragraph::new(*emoji)
					.alignment(Alignment::Center)
					.style(style),
				rect,
			);
			hits.cells.push((*emoji, rect));
		}
	}

	fn render_footer(&self, frame: &mut Frame, area: Rect) {
		let lines = vec![Line::from(HELP), Line::from(KEYS)];
		let paragraph = Paragraph::new(lines)
			.alignment(Alignment::Center)
			.style(self.theme.muted_style())
			.wrap(Wrap { trim: true });
		frame.render_widget(paragraph, area);
	}

	fn render_logs(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(Clear, area);
		if area.width == 0 || area.height == 0 {
			return;
		}
		let widget = TuiLoggerSmartWidget::default()
			.title_log("Runtime log")
			.title_target("Targets")
			.highlight_style(self.theme.cell_focus_style())
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.state(&self.logger_state);
		frame.render_widget(widget, area);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::{Terminal, backend::TestBackend};

	use super::*;
	use crate::picker::DEFAULT_SPIN_DURATION;
	use crate::ui::UiConfig;
	use crate::ui::state::tests::test_app;

	fn render<C: Clock, R: Rng>(app: &mut App<C, R>) -> String {
		let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();
		terminal.backend().to_string()
	}

	#[test]
	fn initial_view_shows_placeholder_and_controls() {
		let (mut app, _) = test_app(UiConfig::default());
		let view = render(&mut app);
		assert!(view.contains(TITLE));
		assert!(view.contains("🎬"));
		assert!(view.contains("Random Expression"));
		for category in Category::ALL {
			assert!(view.contains(category.label()), "missing chip {category}");
		}
		assert!(!view.contains("All Expressions:"));
	}

	#[test]
	fn spinning_view_shows_reel_and_throbber() {
		let (mut app, _) = test_app(UiConfig::default());
		app.apply(Action::PickRandom);
		let view = render(&mut app);
		assert!(view.contains("Spinning..."));
		assert!(view.contains("Spinning 2.0s"));
		assert!(!view.contains("Random Expression"));
		let [_, center, _] = app.picker().reel_window().unwrap();
		assert!(view.contains(center));
	}

	#[test]
	fn finished_spin_restores_button() {
		let (mut app, clock) = test_app(UiConfig::default());
		app.apply(Action::PickRandom);
		clock.advance(DEFAULT_SPIN_DURATION);
		app.on_tick();
		let view = render(&mut app);
		assert!(view.contains("Random Expression"));
		assert!(view.contains(app.picker().current()));
	}

	#[test]
	fn both_grids_render_when_category_and_full_grid_are_visible() {
		let (mut app, _) = test_app(UiConfig::default());
		app.apply(Action::SelectCategory(Category::Angry));
		app.apply(Action::ToggleGrid);
		let view = render(&mut app);
		assert!(view.contains("All Expressions:"));
		assert!(view.contains("Angry Expressions:"));
		assert_eq!(
			app.hits.cells.len(),
			app.picker().catalog().len() + Category::Angry.emojis().len()
		);
	}

	#[test]
	fn chips_wrap_to_panel_width() {
		let (positions, rows) = chip_positions(PANEL_WIDTH);
		assert_eq!(rows, 2);
		assert_eq!(positions.len(), Category::ALL.len());
		for (_, x, _, width) in positions {
			assert!(x + width <= PANEL_WIDTH);
		}

		let (_, narrow_rows) = chip_positions(12);
		assert_eq!(narrow_rows, 8);
	}

	#[test]
	fn hit_map_prefers_button_then_display() {
		let hits = HitMap {
			display: Rect::new(0, 0, 10, 5),
			button: Rect::new(0, 5, 10, 3),
			chips: vec![(Category::Sad, Rect::new(0, 8, 6, 1))],
			cells: vec![("😂", Rect::new(0, 10, 7, 1))],
		};
		assert_eq!(hits.action_at(2, 6), Some(Action::PickRandom));
		assert_eq!(hits.action_at(2, 2), Some(Action::ToggleGrid));
		assert_eq!(hits.action_at(1, 8), Some(Action::SelectCategory(Category::Sad)));
		assert_eq!(hits.action_at(3, 10), Some(Action::PickFromGrid("😂")));
		assert_eq!(hits.action_at(40, 40), None);
	}
}
