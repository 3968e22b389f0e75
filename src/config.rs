use std::path::PathBuf;

use clap::Parser;

/// Finds the elf carrying the most calories.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Config {
    /// Calorie list, one number per line with blank lines between elves. `-` reads stdin.
    #[arg(default_value = "./day_1_input.txt")]
    pub input: PathBuf,

    /// Report the combined total of this many best-supplied elves
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub top: u64,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
