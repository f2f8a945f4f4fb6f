//! gamma - projector gamma curve generator
//!
//! Builds monotone gamma-correction tables from control points or a plain
//! gamma exponent and writes them as `.gcv` files for device upload.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use gamma_core::DeviceProfile;
use std::path::PathBuf;

mod commands;
mod preset;

#[derive(Parser)]
#[command(name = "gamma")]
#[command(author, version, about = "Projector gamma curve generator")]
#[command(long_about = "
Generates monotone gamma-correction tables for projector upload and
inspects existing curve files.

Examples:
  gamma generate out.gcv                      # Identity table, 10-bit profile
  gamma generate out.gcv --gamma 2.2          # Power-law curve
  gamma generate out.gcv --preset warm.yaml   # Control points from a preset
  gamma generate out.gcv --gamma 2.2 --dump   # Print the sampled values
  gamma info out.gcv                          # Show header and channel summary
  gamma check out.gcv                         # Validate curve invariants
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive curves and write a .gcv file
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Display header fields and per-channel summaries
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Validate a curve file against a device profile
    Check(CheckArgs),
}

/// Hardware profile selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProfileArg {
    /// 1024 samples, levels 0-1023, RGB
    TenBit,
    /// 256 samples, levels 0-255, RGB
    EightBit,
}

impl ProfileArg {
    fn to_profile(self) -> DeviceProfile {
        match self {
            ProfileArg::TenBit => DeviceProfile::ten_bit(),
            ProfileArg::EightBit => DeviceProfile::eight_bit(),
        }
    }
}

#[derive(Args)]
struct GenerateArgs {
    /// Output curve file
    output: PathBuf,

    /// Control point preset file (YAML)
    #[arg(short, long, conflicts_with = "gamma")]
    preset: Option<PathBuf>,

    /// Power-law gamma exponent (e.g. 2.2); omit for an identity table
    #[arg(short, long)]
    gamma: Option<f32>,

    /// Device profile
    #[arg(long, value_enum, default_value_t = ProfileArg::TenBit)]
    profile: ProfileArg,

    /// Print the sampled values after writing
    #[arg(long)]
    dump: bool,
}

#[derive(Args)]
struct InfoArgs {
    /// Curve file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

#[derive(Args)]
struct CheckArgs {
    /// Curve file
    input: PathBuf,

    /// Device profile to check against; omitted, the file's own header
    /// fields set the expectations
    #[arg(long, value_enum)]
    profile: Option<ProfileArg>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Check(args) => commands::check::run(args, cli.verbose),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
