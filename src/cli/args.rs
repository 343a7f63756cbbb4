use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use reaction_picker::app_dirs;

/// Produce the full version banner including the config directory.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("reaction-picker {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn cli_command() -> Command {
	CliArgs::command()
}

#[derive(Parser, Debug)]
#[command(
	name = "reaction-picker",
	version,
	long_version = long_version(),
	about = "Pick or roll a reaction emoji for your video overlays",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "REACTION_PICKER_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long,
		value_name = "CATEGORY",
		help = "Open with a category selected (default: none)"
	)]
	pub(crate) category: Option<String>,
	#[arg(long, help = "Start spinning as soon as the picker opens (default: disabled)")]
	pub(crate) roll: bool,
	#[arg(
		long = "spin-ms",
		value_name = "MS",
		help = "Length of the spin animation in milliseconds (default: 2000)"
	)]
	pub(crate) spin_ms: Option<u64>,
	#[arg(
		long = "preview-len",
		value_name = "NUM",
		help = "Number of emoji cycled by the reel (default: 20)"
	)]
	pub(crate) preview_len: Option<usize>,
	#[arg(
		long = "frame-ms",
		value_name = "MS",
		help = "Time each reel emoji stays on screen (default: 40)"
	)]
	pub(crate) frame_ms: Option<u64>,
	#[arg(
		long = "grid-columns",
		value_name = "NUM",
		help = "Columns in the emoji grids (default: 6)"
	)]
	pub(crate) grid_columns: Option<u16>,
	#[arg(long = "logs", help = "Show the log pane on start (default: disabled)")]
	pub(crate) logs: bool,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Minimum level shown in the log pane (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "list-categories",
		help = "List categories with their emoji and exit (default: disabled)"
	)]
	pub(crate) list_categories: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
