mod catalog;
mod cli;
mod clock;
mod config;
mod meetings;
mod model;
mod schedule;
mod storage;

use std::process;

use clap::Parser;

use clock::SystemClock;
use config::Config;
use storage::Storage;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::Cli::parse();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let Some(db_path) = cli
        .db
        .clone()
        .or_else(|| config.database.clone())
        .or_else(Storage::default_path)
    else {
        eprintln!("Could not determine home directory.");
        process::exit(1);
    };

    let storage = match Storage::open(&db_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to open {}: {e}", db_path.display());
            process::exit(1);
        }
    };

    let clock = SystemClock::for_zone(config.time_zone.as_deref());

    match cli::run(cli.command, &storage, &clock) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
