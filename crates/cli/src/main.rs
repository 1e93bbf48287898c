// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Thirteen cards game CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;

use thirteen_core::{
    ArrangeConfig, Arrangement, Hand, RowSize, SweepBonus, auto_arrange_with, classify,
    parse_cards, validate,
};

pub mod table;

#[derive(Debug, Parser)]
#[command(version, about = "Thirteen cards arrangement engine.")]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    /// Print results as JSON.
    #[clap(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deal an offline table, arrange every hand and compare all players.
    Deal {
        /// Number of players.
        #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=4))]
        players: u8,
        /// Seed for a repeatable deal.
        #[clap(long, short)]
        seed: Option<u64>,
        /// Extra points for winning all three rows.
        #[clap(long, default_value_t = 0)]
        sweep_bonus: i32,
        /// Maximum number of splits the arranger tries.
        #[clap(long, default_value_t = ArrangeConfig::default().max_iterations)]
        max_iterations: usize,
    },
    /// Arrange a 13 cards hand.
    Arrange {
        /// The hand cards, e.g. `AS KD 10h`.
        #[clap(required = true)]
        cards: Vec<String>,
        /// Maximum number of splits the arranger tries.
        #[clap(long, default_value_t = ArrangeConfig::default().max_iterations)]
        max_iterations: usize,
    },
    /// Validate an arrangement.
    Check {
        /// The front row cards.
        #[clap(long)]
        front: String,
        /// The middle row cards.
        #[clap(long)]
        middle: String,
        /// The back row cards.
        #[clap(long)]
        back: String,
    },
    /// Classify a 3 or 5 cards group.
    Classify {
        /// The group cards.
        #[clap(required = true)]
        cards: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Deal {
            players,
            seed,
            sweep_bonus,
            max_iterations,
        } => {
            let config = table::Config {
                players: players as usize,
                seed,
                rule: SweepBonus { bonus: sweep_bonus },
                arrange: ArrangeConfig { max_iterations },
            };

            let report = table::play(&config)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{report}");
            }
        }
        Command::Arrange {
            cards,
            max_iterations,
        } => {
            let hand = cards.join(" ").parse::<Hand>()?;
            let config = ArrangeConfig { max_iterations };
            let arrangement = auto_arrange_with(&hand, &config)?;
            print_validation(&arrangement, cli.json)?;
        }
        Command::Check {
            front,
            middle,
            back,
        } => {
            let arrangement = Arrangement::new(
                parse_cards(&front)?,
                parse_cards(&middle)?,
                parse_cards(&back)?,
            );
            print_validation(&arrangement, cli.json)?;
        }
        Command::Classify { cards } => {
            let cards = parse_cards(&cards.join(" "))?;
            let size = if cards.len() == RowSize::Three.count() {
                RowSize::Three
            } else {
                RowSize::Five
            };

            let key = classify(&cards, size)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&key)?);
            } else {
                println!("{key}");
            }
        }
    }

    Ok(())
}

fn print_validation(arrangement: &Arrangement, json: bool) -> Result<()> {
    let res = validate(arrangement)?;

    if json {
        let out = serde_json::json!({
            "arrangement": arrangement,
            "validation": res,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", table::RowsView(arrangement, &res.keys));
        match res.reason {
            Some(reason) => println!("invalid: {reason}"),
            None => println!("valid"),
        }
    }

    Ok(())
}
