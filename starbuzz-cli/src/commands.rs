pub mod brew;
pub mod ducks;
pub mod menu;

use clap::{Parser, Subcommand};
use starbuzz_catalog::{Condiment, Roast, Size};
use starbuzz_ducks::DuckKind;

#[derive(Parser)]
#[command(name = "starbuzz")]
#[command(about = "Price coffee orders built from a roast and its condiments.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Price one drink, e.g. `brew -r dark-roast -w mocha -w whip`
    #[command(alias = "b")]
    Brew {
        #[arg(short, long)]
        roast: Roast,
        /// TALL, GRANDE or VENTI (defaults to the configured size)
        #[arg(short, long)]
        size: Option<Size>,
        /// Condiment to add; repeat to stack, outermost last
        #[arg(short = 'w', long = "with")]
        condiments: Vec<Condiment>,
        /// Print the receipt as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the price board
    #[command(alias = "m")]
    Menu {
        #[arg(short, long)]
        size: Option<Size>,
        /// Print the price board as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show how strategy-based ducks fly and quack
    #[command(alias = "d")]
    Ducks {
        /// Show only this kind: mallard, redhead, rubber or decoy
        #[arg(short, long)]
        kind: Option<DuckKind>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
