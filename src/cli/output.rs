use anyhow::Result;
use reaction_picker::PickerOutcome;

/// Print a plain-text representation of the outcome.
pub(crate) fn print_plain(outcome: &PickerOutcome) {
	match (outcome.accepted, outcome.emoji) {
		(true, Some(emoji)) => println!("{emoji}"),
		_ => println!("Selection cancelled"),
	}
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickerOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &PickerOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
