use thiserror::Error;

/// Errors raised while building a picker or parsing its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
	#[error("unknown category `{name}` (expected one of: {expected})")]
	UnknownCategory { name: String, expected: String },
	#[error("invalid spin configuration: {0}")]
	InvalidSpinConfig(&'static str),
	#[error("emoji catalog must not be empty")]
	EmptyCatalog,
}
