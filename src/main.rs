mod cli;
mod command;
mod logging;

use std::process;

use clap::Parser;
use julian_day::SystemClock;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match command::run(&cli, &SystemClock) {
        Ok(line) => println!("{line}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
