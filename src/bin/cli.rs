//! Command-line interface for the FluxML library
//!
//! This binary exposes the measurement specification parser and the numeric
//! helpers of the library:
//! - Parsing measurement specifications into groups
//! - Transforming isotopomer vectors into cumomer space and back
//! - Converting between atom masks and range notation
//!
//! # Usage
//!
//! ```bash
//! # Inspect a measurement specification
//! fluxml parse "Ala[1-2,4]#M0,1,2"
//!
//! # Print a flux measurement as JSON
//! fluxml flux --xch --json "v1 + v2"
//!
//! # Transform isotopomer fractions into cumomer fractions
//! fluxml cumulate 0.1 0.2 0.3 0.4
//!
//! # Range notation <-> atom mask
//! fluxml mask --atoms 6 1-3,5
//! fluxml range 111010
//! ```

use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use fluxml::prelude::{
    cumulate, mask_to_range, parse_mgroup, range_to_mask, Direction, FluxGroup, MGroup,
};
use itertools::Itertools;

/// Main CLI configuration struct
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Parse a measurement specification
    Parse {
        /// The measurement specification, e.g. "Glc#M(0,1),(1,2)"
        spec: String,

        /// Identifier of the measurement group
        #[arg(long, default_value = "mgroup")]
        id: String,

        /// Print the group as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Create a flux measurement group
    Flux {
        /// The flux specification
        spec: String,

        /// Identifier of the measurement group
        #[arg(long, default_value = "flux")]
        id: String,

        /// Measure exchange instead of net fluxes
        #[arg(long)]
        xch: bool,

        /// Print the group as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Transform an isotopomer vector into cumomer space
    Cumulate {
        /// Vector entries; the count must be a power of two
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Transform cumomers back into isotopomers
        #[arg(short, long)]
        inverse: bool,
    },
    /// Convert a range specification into an atom mask
    Mask {
        /// Range specification, e.g. "1-3,5"
        range: String,

        /// Number of atoms; defaults to the highest referenced position
        #[arg(short, long)]
        atoms: Option<usize>,
    },
    /// Convert an atom mask into a range specification
    Range {
        /// Mask as a string of 1 and 0, e.g. "11101"
        mask: String,
    },
}

/// Prints an error in red and exits with status 1
fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), msg.to_string().red());
    process::exit(1)
}

fn print_group(group: &MGroup, json: bool) {
    if json {
        match serde_json::to_string_pretty(group) {
            Ok(json) => println!("{json}"),
            Err(err) => fail(err),
        }
    } else {
        println!("{group}");
    }
}

/// Main entry point for the CLI application
pub fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { spec, id, json } => {
            let group = parse_mgroup(&id, &spec);
            if group.kind() == fluxml::prelude::MGroupKind::Generic && !spec.contains(';') {
                eprintln!(
                    "{}",
                    format!("Warning: '{spec}' matches no known grammar, read as generic row")
                        .yellow()
                );
            }
            print_group(&group, json);
        }
        Commands::Flux {
            spec,
            id,
            xch,
            json,
        } => {
            let group = MGroup::from(FluxGroup::new(id, spec, !xch));
            print_group(&group, json);
        }
        Commands::Cumulate { values, inverse } => {
            let direction = if inverse {
                Direction::Inverse
            } else {
                Direction::Forward
            };
            let mut values = values;
            match cumulate(&mut values, direction) {
                Ok(result) => println!("{}", result.iter().join(" ")),
                Err(err) => fail(err),
            }
        }
        Commands::Mask { range, atoms } => match range_to_mask(&range, atoms) {
            Ok(mask) => println!(
                "{}",
                mask.iter().map(|set| if *set { '1' } else { '0' }).join("")
            ),
            Err(err) => fail(err),
        },
        Commands::Range { mask } => {
            let bits: Vec<bool> = mask
                .chars()
                .map(|c| match c {
                    '1' => Ok(true),
                    '0' => Ok(false),
                    other => Err(format!("invalid mask character '{other}'")),
                })
                .collect::<Result<_, _>>()
                .unwrap_or_else(|err| fail(err));
            println!("{}", mask_to_range(&bits));
        }
    }
}
