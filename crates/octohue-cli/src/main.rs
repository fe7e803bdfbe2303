//! octohue - colour conversion and light state CLI
//!
//! Converts colours between spaces, projects them to bridge xy chromaticity
//! and builds the light state configured for printer events.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "octohue")]
#[command(author, version, about = "Colour conversion and light state CLI")]
#[command(long_about = "
Converts colours between colour spaces and builds light states.

Examples:
  octohue convert --hex '#33FF36' --to lab        # sRGB hex to Lab
  octohue convert 0.5 0.25 0.125 --from xyz --to hsl --through-rgb adobe-rgb
  octohue xy '#33FF36' '#FF0000'                  # Bridge chromaticity
  octohue adapt 0.95047 1.0 1.08883 --from d65 --to d50
  octohue path hsl lchuv                          # Show conversion chain
  octohue spaces                                  # List colour spaces
  octohue state PrintDone --config octohue.yaml   # Light state for an event
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Event configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a colour between spaces
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Project sRGB hex colours to xy chromaticity
    Xy(XyArgs),

    /// Chromatically adapt an XYZ triple
    Adapt(AdaptArgs),

    /// Show the conversion chain between two spaces
    Path(PathArgs),

    /// List colour spaces and their channels
    Spaces,

    /// Build the light state for a printer event
    State(StateArgs),

    /// Build the state that flips a light on or off
    Toggle(ToggleArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Channel values
    #[arg(allow_negative_numbers = true, required_unless_present = "hex")]
    values: Vec<f64>,

    /// `#RRGGBB` input instead of channel values
    #[arg(long, conflicts_with = "values")]
    hex: Option<String>,

    /// Source space
    #[arg(short, long, default_value = "srgb")]
    from: String,

    /// Target space
    #[arg(short, long)]
    to: String,

    /// RGB variant used when routing through RGB
    #[arg(long)]
    through_rgb: Option<String>,

    /// Illuminant of the input (for spaces with a reference white)
    #[arg(long)]
    illuminant: Option<String>,

    /// Observer angle of the input: 2, 10
    #[arg(long, default_value = "2")]
    observer: String,

    /// Illuminant to adapt RGB-derived XYZ to
    #[arg(long)]
    target_illuminant: Option<String>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct XyArgs {
    /// `#RRGGBB` colours
    #[arg(required = true)]
    hex: Vec<String>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct AdaptArgs {
    /// XYZ triple
    #[arg(num_args = 3, allow_negative_numbers = true, required = true)]
    xyz: Vec<f64>,

    /// Source illuminant
    #[arg(short, long, default_value = "d65")]
    from: String,

    /// Target illuminant
    #[arg(short, long, default_value = "d50")]
    to: String,

    /// Observer angle: 2, 10
    #[arg(long, default_value = "2")]
    observer: String,

    /// Method: bradford, von-kries, cat02, xyz-scaling
    #[arg(short, long, default_value = "bradford")]
    method: String,
}

#[derive(Args)]
struct PathArgs {
    /// Source space
    from: String,

    /// Target space
    to: String,
}

#[derive(Args)]
struct StateArgs {
    /// Printer event name, e.g. PrintDone
    event: String,
}

#[derive(Args)]
struct ToggleArgs {
    /// The light is currently on
    #[arg(long)]
    on: bool,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Xy(args) => commands::xy::run(args, cli.verbose),
        Commands::Adapt(args) => commands::adapt::run(args, cli.verbose),
        Commands::Path(args) => commands::path::run(args, cli.verbose),
        Commands::Spaces => commands::spaces::run(cli.verbose),
        Commands::State(args) => commands::state::run(args, cli.config.as_deref(), cli.verbose),
        Commands::Toggle(args) => commands::state::run_toggle(args, cli.config.as_deref()),
    }
}
