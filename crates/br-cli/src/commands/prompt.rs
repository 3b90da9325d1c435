use std::io::{self, BufRead, Write};

use colored::Colorize;

use br_mechanics::{RollConfig, RollRequest, perform_roll};

pub fn run(config: &RollConfig) -> Result<(), String> {
    println!("  {}", "Roll some dice".bold());
    print!("  Number of dice (0-{}): ", config.max_dice);
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("no pool size given".into());
    }
    println!();

    let dice = config.parse_pool_choice(&line).map_err(|e| e.to_string())?;
    let mut roller = config.roller();
    let report = perform_roll(&RollRequest::new(dice), &mut roller).map_err(|e| e.to_string())?;
    super::print_report(&report, false)
}
