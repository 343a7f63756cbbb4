//! Terminal front end for the reaction picker.
//!
//! [`PickerUi`] is the public entry point. The remaining submodules hold the
//! event loop, the renderer, input routing, and the theme definitions.

mod actions;
mod builder;
mod config;
pub mod grid;
mod outcome;
mod render;
mod runtime;
mod state;
pub mod theme;

pub use builder::PickerUi;
pub use config::UiConfig;
pub use outcome::PickerOutcome;
pub use state::App;
