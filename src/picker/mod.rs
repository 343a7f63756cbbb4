//! The reaction picker state machine.
//!
//! [`ReactionPicker`] owns the selection state and the spin controller and is
//! only mutated through its action methods (or [`ReactionPicker::dispatch`]).
//! The host drives time by calling [`ReactionPicker::tick`] from its event
//! loop; a spin commits its final emoji on the first tick at or after its
//! deadline.

mod spin;
mod state;
mod timer;

use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

pub use spin::{
	DEFAULT_FRAME_INTERVAL, DEFAULT_PREVIEW_LEN, DEFAULT_SPIN_DURATION, MAX_SPIN_DURATION,
	SpinConfig, SpinController, preview_sequence,
};
pub use state::SelectionState;
pub use timer::{Clock, ManualClock, SpinTimer, SystemClock};

use crate::catalog::{Catalog, Category, Emoji};

/// User-facing operations on the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	PickRandom,
	SelectCategory(Category),
	ToggleGrid,
	PickFromGrid(Emoji),
}

/// Whether an action changed the picker or was swallowed because it is
/// disabled in the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
	Applied,
	Ignored,
}

impl Dispatch {
	#[must_use]
	pub fn is_applied(self) -> bool {
		matches!(self, Dispatch::Applied)
	}
}

pub struct ReactionPicker<C: Clock = SystemClock, R: Rng = StdRng> {
	catalog: Catalog,
	selection: SelectionState,
	spin: SpinController,
	clock: C,
	rng: R,
}

impl ReactionPicker {
	/// Picker over the built-in catalog, seeded from the operating system.
	#[must_use]
	pub fn new(config: SpinConfig) -> Self {
		Self::with_parts(Catalog::default(), config, SystemClock, StdRng::from_os_rng())
	}
}

impl Default for ReactionPicker {
	fn default() -> Self {
		Self::new(SpinConfig::default())
	}
}

impl<C: Clock, R: Rng> ReactionPicker<C, R> {
	pub fn with_parts(catalog: Catalog, config: SpinConfig, clock: C, rng: R) -> Self {
		Self {
			catalog,
			selection: SelectionState::default(),
			spin: SpinController::new(config),
			clock,
			rng,
		}
	}

	#[must_use]
	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	#[must_use]
	pub fn selection(&self) -> SelectionState {
		self.selection
	}

	#[must_use]
	pub fn current(&self) -> Emoji {
		self.selection.current
	}

	#[must_use]
	pub fn selected_category(&self) -> Option<Category> {
		self.selection.selected_category
	}

	#[must_use]
	pub fn show_all_visible(&self) -> bool {
		self.selection.show_all_visible
	}

	#[must_use]
	pub fn is_spinning(&self) -> bool {
		self.spin.is_spinning()
	}

	#[must_use]
	pub fn spin_sequence(&self) -> &[Emoji] {
		self.spin.sequence()
	}

	#[must_use]
	pub fn spin_config(&self) -> SpinConfig {
		self.spin.config()
	}

	/// Deadline of the pending completion, if a spin is running.
	#[must_use]
	pub fn pending_deadline(&self) -> Option<Instant> {
		self.spin.timer().map(SpinTimer::deadline)
	}

	/// Time left until the pending completion fires.
	#[must_use]
	pub fn spin_remaining(&self) -> Option<Duration> {
		let now = self.clock.now();
		self.spin.timer().map(|timer| timer.remaining(now))
	}

	/// Emoji the reel should display right now while spinning.
	#[must_use]
	pub fn reel_emoji(&self) -> Option<Emoji> {
		let position = self.spin.reel_position(self.clock.now())?;
		self.spin.sequence().get(position).copied()
	}

	/// Neighbours of [`Self::reel_emoji`] in reel order, for a three-row window.
	#[must_use]
	pub fn reel_window(&self) -> Option<[Emoji; 3]> {
		let position = self.spin.reel_position(self.clock.now())?;
		let sequence = self.spin.sequence();
		let len = sequence.len();
		Some([
			sequence[(position + len - 1) % len],
			sequence[position],
			sequence[(position + 1) % len],
		])
	}

	pub fn dispatch(&mut self, action: Action) -> Dispatch {
		match action {
			Action::PickRandom => self.pick_random(),
			Action::SelectCategory(category) => self.select_category(category),
			Action::ToggleGrid => self.toggle_grid(),
			Action::PickFromGrid(emoji) => self.pick_from_grid(emoji),
		}
	}

	/// Start a spin. Ignored while a spin is already running.
	pub fn pick_random(&mut self) -> Dispatch {
		let now = self.clock.now();
		if !self.spin.start(self.catalog.emojis(), now, &mut self.rng) {
			debug!("random pick ignored: spin already in progress");
			return Dispatch::Ignored;
		}
		self.selection.selected_category = None;
		self.selection.show_all_visible = false;
		debug!(
			"spin started with {} preview emoji for {:?}",
			self.spin.sequence().len(),
			self.spin.config().duration()
		);
		Dispatch::Applied
	}

	/// Select `category` and show one of its emoji. Allowed while spinning.
	pub fn select_category(&mut self, category: Category) -> Dispatch {
		self.selection.selected_category = Some(category);
		self.selection.show_all_visible = false;
		if let Some(&emoji) = category.emojis().choose(&mut self.rng) {
			self.selection.current = emoji;
		}
		if self.spin.is_spinning() {
			debug!("category {category} selected while a spin is pending");
		}
		info!("category {category} -> {}", self.selection.current);
		Dispatch::Applied
	}

	/// Flip the full grid. Ignored while spinning.
	pub fn toggle_grid(&mut self) -> Dispatch {
		if self.spin.is_spinning() {
			return Dispatch::Ignored;
		}
		self.selection.show_all_visible = !self.selection.show_all_visible;
		debug!("full grid visible: {}", self.selection.show_all_visible);
		Dispatch::Applied
	}

	/// Show `emoji` and hide the full grid. The selected category is kept.
	pub fn pick_from_grid(&mut self, emoji: Emoji) -> Dispatch {
		self.selection.current = emoji;
		self.selection.show_all_visible = false;
		info!("picked {emoji} from grid");
		Dispatch::Applied
	}

	/// Deliver the spin completion if it is due. Returns the committed emoji
	/// when the completion fired on this call.
	pub fn tick(&mut self) -> Option<Emoji> {
		if !self.spin.poll(self.clock.now()) {
			return None;
		}
		if let Some(&emoji) = self.catalog.emojis().choose(&mut self.rng) {
			self.selection.current = emoji;
		}
		info!("spin landed on {}", self.selection.current);
		Some(self.selection.current)
	}

	/// Tear the picker down, cancelling any pending completion. Returns
	/// whether a completion was cancelled.
	pub fn teardown(mut self) -> bool {
		self.cancel_pending()
	}

	/// Drop a pending completion without committing anything. Only meant for
	/// hosts shutting the widget down; users cannot cancel a running spin.
	pub fn cancel_pending(&mut self) -> bool {
		let cancelled = self.spin.cancel();
		if cancelled {
			debug!("pending spin completion cancelled on teardown");
		}
		cancelled
	}
}

impl<C: Clock, R: Rng> Drop for ReactionPicker<C, R> {
	fn drop(&mut self) {
		self.cancel_pending();
	}
}
