//! Blackjack basic strategy trainer.
//!
//! Deals a hand, asks for the move and explains the optimal one. Runs until
//! interrupted or until standard input ends.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjdrill::{Drill, DrillOptions};

fn main() -> ExitCode {
    log();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = DrillOptions::default().with_seed(seed);
    log::debug!("starting drill with seed {seed}");

    let mut drill = Drill::new(options);
    match drill.run(io::stdin().lock(), io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Logs to stderr so stdout carries only the drill.
fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::init(
        log::LevelFilter::Warn,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    if term.is_err() {
        eprintln!("logger already initialized");
    }
}
