//! Time source and the one-shot completion handle used by spins.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current instant for the spin controller.
pub trait Clock {
	fn now(&self) -> Instant;
}

/// Wall clock used by the interactive picker.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> Instant {
		Instant::now()
	}
}

/// Clock that only moves when told to. Clones share the same instant, so a
/// test can keep one handle while the picker owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
	now: Rc<Cell<Instant>>,
}

impl ManualClock {
	#[must_use]
	pub fn new() -> Self {
		Self {
			now: Rc::new(Cell::new(Instant::now())),
		}
	}

	pub fn advance(&self, by: Duration) {
		self.now.set(self.now.get() + by);
	}
}

impl Default for ManualClock {
	fn default() -> Self {
		Self::new()
	}
}

impl Clock for ManualClock {
	fn now(&self) -> Instant {
		self.now.get()
	}
}

/// Pending completion of a spin. Created once per spin and consumed when it
/// fires or when the owner cancels it; it cannot be moved to a new deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinTimer {
	started: Instant,
	deadline: Instant,
}

impl SpinTimer {
	pub(crate) fn schedule(now: Instant, delay: Duration) -> Self {
		Self {
			started: now,
			deadline: now + delay,
		}
	}

	#[must_use]
	pub fn deadline(&self) -> Instant {
		self.deadline
	}

	#[must_use]
	pub fn is_due(&self, now: Instant) -> bool {
		now >= self.deadline
	}

	#[must_use]
	pub fn elapsed(&self, now: Instant) -> Duration {
		now.saturating_duration_since(self.started)
	}

	#[must_use]
	pub fn remaining(&self, now: Instant) -> Duration {
		self.deadline.saturating_duration_since(now)
	}
}
