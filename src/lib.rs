//! Reaction emoji picker for video overlays.
//!
//! The crate is split into the static emoji [`catalog`], the [`picker`] state
//! machine that owns the selection and the slot-machine spin, and the
//! ratatui [`ui`] that draws it and feeds user input back in. The root
//! re-exports the pieces embedders usually need.

pub mod app_dirs;
pub mod catalog;
mod error;
pub mod logging;
pub mod picker;
pub mod ui;

pub use catalog::{CATALOG, Catalog, Category, Emoji, PLACEHOLDER};
pub use error::PickerError;
pub use picker::{Action, Dispatch, ReactionPicker, SelectionState, SpinConfig};
pub use ui::theme::{Theme, default_theme};
pub use ui::{App, PickerOutcome, PickerUi, UiConfig};
