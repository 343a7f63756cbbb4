use std::time::Duration;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Theme: {}", config.theme_name);
	println!("  Grid columns: {}", config.grid_columns);
	println!(
		"  Start category: {}",
		config
			.start_category
			.map(|category| category.as_str())
			.unwrap_or("(none)")
	);
	println!("  Roll on start: {}", bool_to_word(config.roll_on_start));
	println!("  Show logs: {}", bool_to_word(config.show_logs));
	println!("  Spin duration: {}", millis(config.spin.duration()));
	println!("  Preview length: {}", config.spin.preview_len());
	println!("  Frame interval: {}", millis(config.spin.frame_interval()));
	println!("  Log level: {}", config.log_level);
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

fn millis(duration: Duration) -> String {
	format!("{}ms", duration.as_millis())
}
