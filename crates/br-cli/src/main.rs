//! CLI frontend for the Beamroll dice roller.

mod commands;
mod logging;
mod render;

use std::process;

use clap::{Parser, Subcommand};

use br_mechanics::RollConfig;

#[derive(Parser)]
#[command(
    name = "br",
    about = "Beamroll: action and resistance rolls for d6 pool games",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a pool of d6 and read the result
    Roll {
        /// Number of dice; zero or less rolls two and keeps the worst
        #[arg(allow_negative_numbers = true)]
        dice: i32,

        /// Action or attribute being rolled (actions use position and effect)
        #[arg(short, long, default_value = "")]
        attribute: String,

        /// Position: controlled, risky, desperate
        #[arg(short, long)]
        position: Option<String>,

        /// Effect: limited, standard, great
        #[arg(short, long)]
        effect: Option<String>,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the roll as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask how many dice to roll, then roll them
    Prompt {
        /// Largest pool to offer
        #[arg(short, long, default_value = "10")]
        max_dice: u32,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List attributes and the actions under each
    Catalog,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            dice,
            attribute,
            position,
            effect,
            seed,
            json,
        } => {
            let config = RollConfig::default().with_seed(seed);
            commands::roll::run(
                &config,
                dice,
                &attribute,
                position.as_deref(),
                effect.as_deref(),
                json,
            )
        }
        Commands::Prompt { max_dice, seed } => {
            let config = RollConfig::default()
                .with_seed(seed)
                .with_max_dice(max_dice);
            commands::prompt::run(&config)
        }
        Commands::Catalog => commands::catalog::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
