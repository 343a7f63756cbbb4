//! Log plumbing. Records go through the `log` facade into `tui-logger`, which
//! buffers them for the in-UI log pane instead of writing to the terminal the
//! picker is drawing on.

use std::sync::Once;

use log::LevelFilter;

static INSTALL: Once = Once::new();

/// Install the tui-logger backend. Later calls only adjust the level.
pub fn initialize(level: LevelFilter) {
	INSTALL.call_once(|| {
		if let Err(err) = tui_logger::init_logger(level) {
			eprintln!("failed to install logger: {err:?}");
		}
	});
	tui_logger::set_default_level(level);
	log::set_max_level(level);
}

/// Move buffered records into the widget's display buffer.
pub fn pump() {
	tui_logger::move_events();
}
