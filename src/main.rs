mod config;

use anyhow::Context;
use clap::Parser;
use crossterm::style::Stylize;
use log::{error, info};

use config::Config;
use npuzzle::{report, Board};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = Config::parse();
    info!("Configuration: {:?}", config);

    let initial = config
        .initial_board()
        .context("failed to build the start board")?;
    let goal = Board::goal(initial.size())?;

    println!("{}\n{}", "Initial board:".bold(), initial);

    for strategy in config.strategies() {
        let (moves, report) = match report::run(strategy, &initial, &goal) {
            Ok(solved) => solved,
            Err(e) => {
                error!("{} failed: {}", strategy, e);
                return Err(e).with_context(|| format!("{} search failed", strategy));
            }
        };
        println!("{}", report.to_string().green());

        if config.show_path {
            let mut board = initial.clone();
            for (step, &movement) in moves.iter().enumerate() {
                board = board
                    .apply(movement)
                    .with_context(|| format!("illegal move {} at step {}", movement, step + 1))?;
                println!(
                    "{} {} {}\n{}",
                    format!("{:>3}.", step + 1).dim(),
                    movement.symbol(),
                    movement,
                    board
                );
            }
        }
    }

    Ok(())
}
