use std::process::ExitCode;

use calorie_counting::config::Config;
use calorie_counting::{count_calories_in, logger};
use clap::Parser;

pub fn main() -> ExitCode {
    let config = Config::parse();
    logger::init(config.verbose);
    tracing::debug!(?config, "starting");

    let top = usize::try_from(config.top).unwrap_or(usize::MAX);
    match count_calories_in(&config.input, top) {
        Ok(calories) => {
            println!("{}", calories);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
