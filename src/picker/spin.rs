use std::time::{Duration, Instant};

use rand::Rng;
use rand::seq::SliceRandom;

use super::timer::SpinTimer;
use crate::catalog::Emoji;
use crate::error::PickerError;

pub const DEFAULT_SPIN_DURATION: Duration = Duration::from_millis(2000);
pub const DEFAULT_PREVIEW_LEN: usize = 20;
/// One pass over a 20 emoji reel takes 0.8s.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(40);
/// Longest accepted spin. Keeps the completion deadline representable.
pub const MAX_SPIN_DURATION: Duration = Duration::from_secs(10 * 60);

/// Timing and sizing of the slot-machine animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinConfig {
	duration: Duration,
	preview_len: usize,
	frame_interval: Duration,
}

impl SpinConfig {
	pub fn new(
		duration: Duration,
		preview_len: usize,
		frame_interval: Duration,
	) -> Result<Self, PickerError> {
		if duration.is_zero() {
			return Err(PickerError::InvalidSpinConfig(
				"spin duration must be greater than zero",
			));
		}
		if duration > MAX_SPIN_DURATION {
			return Err(PickerError::InvalidSpinConfig(
				"spin duration must not exceed 10 minutes",
			));
		}
		if preview_len == 0 {
			return Err(PickerError::InvalidSpinConfig(
				"preview length must be greater than zero",
			));
		}
		if frame_interval.is_zero() {
			return Err(PickerError::InvalidSpinConfig(
				"frame interval must be greater than zero",
			));
		}
		Ok(Self {
			duration,
			preview_len,
			frame_interval,
		})
	}

	#[must_use]
	pub fn duration(&self) -> Duration {
		self.duration
	}

	#[must_use]
	pub fn preview_len(&self) -> usize {
		self.preview_len
	}

	#[must_use]
	pub fn frame_interval(&self) -> Duration {
		self.frame_interval
	}
}

impl Default for SpinConfig {
	fn default() -> Self {
		Self {
			duration: DEFAULT_SPIN_DURATION,
			preview_len: DEFAULT_PREVIEW_LEN,
			frame_interval: DEFAULT_FRAME_INTERVAL,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpinPhase {
	Idle,
	Spinning(SpinTimer),
}

/// Idle/Spinning state machine behind the random roll.
///
/// The controller only owns the animation bookkeeping. Committing the final
/// emoji is left to the picker, which draws it independently of the preview
/// sequence.
#[derive(Debug, Clone)]
pub struct SpinController {
	config: SpinConfig,
	phase: SpinPhase,
	sequence: Vec<Emoji>,
}

impl SpinController {
	#[must_use]
	pub fn new(config: SpinConfig) -> Self {
		Self {
			config,
			phase: SpinPhase::Idle,
			sequence: Vec::new(),
		}
	}

	#[must_use]
	pub fn config(&self) -> SpinConfig {
		self.config
	}

	#[must_use]
	pub fn is_spinning(&self) -> bool {
		matches!(self.phase, SpinPhase::Spinning(_))
	}

	/// Emoji cycled by the reel. Stale once the spin has completed.
	#[must_use]
	pub fn sequence(&self) -> &[Emoji] {
		&self.sequence
	}

	#[must_use]
	pub fn timer(&self) -> Option<&SpinTimer> {
		match &self.phase {
			SpinPhase::Spinning(timer) => Some(timer),
			SpinPhase::Idle => None,
		}
	}

	/// Enter `Spinning`. Returns `false`, touching nothing, when a spin is
	/// already running.
	pub(crate) fn start<R: Rng + ?Sized>(
		&mut self,
		catalog: &[Emoji],
		now: Instant,
		rng: &mut R,
	) -> bool {
		if self.is_spinning() {
			return false;
		}
		self.sequence = preview_sequence(catalog, self.config.preview_len, rng);
		self.phase = SpinPhase::Spinning(SpinTimer::schedule(now, self.config.duration));
		true
	}

	/// Fire the pending completion if its deadline has passed. Returns `true`
	/// exactly once per spin.
	pub(crate) fn poll(&mut self, now: Instant) -> bool {
		match self.phase {
			SpinPhase::Spinning(timer) if timer.is_due(now) => {
				self.phase = SpinPhase::Idle;
				true
			}
			_ => false,
		}
	}

	/// Drop the pending completion without firing it.
	pub(crate) fn cancel(&mut self) -> bool {
		let was_spinning = self.is_spinning();
		self.phase = SpinPhase::Idle;
		was_spinning
	}

	/// Index into [`Self::sequence`] the reel should show at `now`.
	#[must_use]
	pub fn reel_position(&self, now: Instant) -> Option<usize> {
		let timer = self.timer()?;
		if self.sequence.is_empty() {
			return None;
		}
		let frame = timer.elapsed(now).as_millis() / self.config.frame_interval.as_millis().max(1);
		Some((frame % self.sequence.len() as u128) as usize)
	}
}

/// Uniform permutation of `catalog` truncated to `len` entries.
pub fn preview_sequence<R: Rng + ?Sized>(catalog: &[Emoji], len: usize, rng: &mut R) -> Vec<Emoji> {
	let mut shuffled = catalog.to_vec();
	shuffled.shuffle(rng);
	shuffled.truncate(len);
	shuffled
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::catalog::CATALOG;
	use crate::picker::timer::{Clock, ManualClock};

	fn counts(items: &[Emoji]) -> HashMap<Emoji, usize> {
		let mut counts = HashMap::new();
		for item in items {
			*counts.entry(*item).or_default() += 1;
		}
		counts
	}

	#[test]
	fn preview_is_a_prefix_of_a_permutation() {
		let mut rng = StdRng::seed_from_u64(7);
		let preview = preview_sequence(CATALOG, 20, &mut rng);
		assert_eq!(preview.len(), 20);

		let catalog_counts = counts(CATALOG);
		for (emoji, count) in counts(&preview) {
			assert!(count <= catalog_counts[emoji]);
		}
	}

	#[test]
	fn short_catalog_yields_every_entry_once() {
		let short: &[Emoji] = &["😂", "😢", "😂"];
		let mut rng = StdRng::seed_from_u64(3);
		let preview = preview_sequence(short, 20, &mut rng);
		assert_eq!(preview.len(), 3);
		assert_eq!(counts(&preview), counts(short));
	}

	#[test]
	fn start_is_rejected_while_spinning() {
		let clock = ManualClock::new();
		let mut rng = StdRng::seed_from_u64(11);
		let mut spin = SpinController::new(SpinConfig::default());

		assert!(spin.start(CATALOG, clock.now(), &mut rng));
		let sequence = spin.sequence().to_vec();
		let timer = *spin.timer().unwrap();

		clock.advance(Duration::from_millis(500));
		assert!(!spin.start(CATALOG, clock.now(), &mut rng));
		assert_eq!(spin.sequence(), sequence.as_slice());
		assert_eq!(spin.timer(), Some(&timer));
	}

	#[test]
	fn poll_fires_once_at_the_deadline() {
		let clock = ManualClock::new();
		let mut rng = StdRng::seed_from_u64(5);
		let mut spin = SpinController::new(SpinConfig::default());
		spin.start(CATALOG, clock.now(), &mut rng);

		clock.advance(DEFAULT_SPIN_DURATION - Duration::from_millis(1));
		assert!(!spin.poll(clock.now()));
		clock.advance(Duration::from_millis(1));
		assert!(spin.poll(clock.now()));
		assert!(!spin.is_spinning());
		assert!(!spin.poll(clock.now()));
	}

	#[test]
	fn cancel_reports_whether_a_spin_was_pending() {
		let clock = ManualClock::new();
		let mut rng = StdRng::seed_from_u64(9);
		let mut spin = SpinController::new(SpinConfig::default());
		assert!(!spin.cancel());
		spin.start(CATALOG, clock.now(), &mut rng);
		assert!(spin.cancel());
		clock.advance(DEFAULT_SPIN_DURATION);
		assert!(!spin.poll(clock.now()));
	}

	#[test]
	fn reel_cycles_with_frame_interval() {
		let clock = ManualClock::new();
		let mut rng = StdRng::seed_from_u64(1);
		let mut spin = SpinController::new(SpinConfig::default());
		assert_eq!(spin.reel_position(clock.now()), None);

		spin.start(CATALOG, clock.now(), &mut rng);
		assert_eq!(spin.reel_position(clock.now()), Some(0));
		clock.advance(Duration::from_millis(85));
		assert_eq!(spin.reel_position(clock.now()), Some(2));
		clock.advance(Duration::from_millis(800));
		assert_eq!(spin.reel_position(clock.now()), Some(2));
	}

	#[test]
	fn config_rejects_zero_values() {
		assert!(SpinConfig::new(Duration::ZERO, 20, DEFAULT_FRAME_INTERVAL).is_err());
		assert!(SpinConfig::new(DEFAULT_SPIN_DURATION, 0, DEFAULT_FRAME_INTERVAL).is_err());
		assert!(SpinConfig::new(DEFAULT_SPIN_DURATION, 20, Duration::ZERO).is_err());
	}

	#[test]
	fn config_caps_spin_duration() {
		assert!(SpinConfig::new(MAX_SPIN_DURATION, 20, DEFAULT_FRAME_INTERVAL).is_ok());
		let err = SpinConfig::new(
			Duration::from_millis(u64::MAX),
			20,
			DEFAULT_FRAME_INTERVAL,
		)
		.unwrap_err();
		assert!(matches!(err, PickerError::InvalidSpinConfig(_)));
	}
}
