//! dungeon-dice CLI
//!
//! Tally and roll One Deck Dungeon dice pools in the terminal.
//! With no subcommand the interactive TUI starts; `roll` performs a
//! one-shot roll for scripting.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use dungeon_dice::report::{RollReport, format_report};
use dungeon_dice::roll::{FaceSource, RngFaces};
use dungeon_dice::tui;
use dungeon_dice::types::{DiceTally, DieColor, MAX_COUNT, OutputFormat};

#[derive(Parser)]
#[command(name = "dungeon-dice")]
#[command(about = "Tally and roll One Deck Dungeon dice pools")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a pool once and print the results (no TUI)
    Roll {
        /// Agility (magenta) dice
        #[arg(long, default_value_t = 0)]
        agility: u32,

        /// Strength (yellow) dice
        #[arg(long, default_value_t = 0)]
        strength: u32,

        /// Magic (blue) dice
        #[arg(long, default_value_t = 0)]
        magic: u32,

        /// Heroic (black) dice
        #[arg(long, default_value_t = 0)]
        heroic: u32,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        None => match tui::run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        Some(Commands::Roll {
            agility,
            strength,
            magic,
            heroic,
            format,
            seed,
        }) => {
            cmd_roll([agility, strength, magic, heroic], format.into(), seed);
            ExitCode::SUCCESS
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

/// One-shot pipeline: tally → materialize → roll everything → print.
///
/// `counts` follows canonical color order.
fn cmd_roll(counts: [u32; 4], format: OutputFormat, seed: Option<u64>) {
    let mut tally = DiceTally::new();
    for (color, requested) in DieColor::ALL.into_iter().zip(counts) {
        if requested > MAX_COUNT {
            // Warnings to stderr so they don't interfere with JSON output
            eprintln!(
                "Note: --{} capped at {}",
                color.label().to_lowercase(),
                MAX_COUNT
            );
        }
        tally.set_count(color, requested);
    }

    let mut faces: Box<dyn FaceSource> = match seed {
        Some(seed) => Box::new(RngFaces::seeded(seed)),
        None => Box::new(RngFaces::thread_local()),
    };

    let mut dice = tally.materialize();
    for die in &mut dice {
        die.roll(faces.as_mut());
    }

    print!("{}", format_report(&RollReport::new(dice), format));
}
